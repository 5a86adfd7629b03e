//! Solve orchestration for `maze solve`: load, endpoint checks, search, report.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::core::grid::Grid;
use crate::core::search::{PathSearch, SearchSummary};
use crate::io::config::SolverConfig;
use crate::io::maze_file::load_maze;
use crate::io::report::ReportWriter;

/// Structured solve outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveOutcome {
    /// At least one path was written.
    Solved(SearchSummary),
    /// The search ran to completion without reaching the exit.
    NoSolutions(SearchSummary),
    /// Entry and/or exit cell is a wall; no search was run.
    Blocked { entry: bool, exit: bool },
}

impl SolveOutcome {
    pub fn solutions(&self) -> usize {
        match self {
            SolveOutcome::Solved(summary) | SolveOutcome::NoSolutions(summary) => {
                summary.solutions
            }
            SolveOutcome::Blocked { .. } => 0,
        }
    }
}

/// Load the maze at `maze_path` using the configured file name policy.
pub fn load_board(maze_path: &Path, config: &SolverConfig) -> Result<Grid> {
    load_maze(maze_path, config.strict_file_names)
        .with_context(|| format!("load maze {}", maze_path.display()))
}

/// Solve `grid`, streaming the report into `out`.
pub fn solve_grid<W: Write>(
    grid: &mut Grid,
    out: W,
    max_solutions: Option<usize>,
) -> Result<SolveOutcome> {
    solve_with(grid, ReportWriter::new(out), max_solutions)
}

/// Solve `grid`, writing the report to the file at `output`.
pub fn solve_to_path(
    grid: &mut Grid,
    output: &Path,
    max_solutions: Option<usize>,
) -> Result<SolveOutcome> {
    let writer = ReportWriter::create(output)?;
    solve_with(grid, writer, max_solutions)
        .with_context(|| format!("write report {}", output.display()))
}

/// Load the maze file and solve it with `config`.
pub fn solve_file(maze_path: &Path, config: &SolverConfig) -> Result<SolveOutcome> {
    let mut grid = load_board(maze_path, config)?;
    solve_to_path(&mut grid, &config.output, config.max_solutions)
}

fn solve_with<W: Write>(
    grid: &mut Grid,
    mut writer: ReportWriter<W>,
    max_solutions: Option<usize>,
) -> Result<SolveOutcome> {
    let exit = !grid.is_open(grid.exit());
    let entry = !grid.is_open(grid.entry());
    if entry || exit {
        warn!(entry, exit, "maze endpoint blocked, skipping search");
        writer
            .write_blocked(entry, exit)
            .context("write blocked notice")?;
        writer.close().context("flush report")?;
        return Ok(SolveOutcome::Blocked { entry, exit });
    }

    let summary = PathSearch::new(grid)
        .with_limit(max_solutions)
        .run(&mut writer)
        .context("write solution")?;
    writer.finish().context("finish report")?;
    info!(
        solutions = summary.solutions,
        steps = summary.steps,
        stopped_early = summary.stopped_early,
        "maze solved"
    );

    if summary.solutions == 0 {
        return Ok(SolveOutcome::NoSolutions(summary));
    }
    Ok(SolveOutcome::Solved(summary))
}
