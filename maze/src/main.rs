//! Maze path enumerator.
//!
//! Reads a maze file (dimensions, then wall cells), enumerates every simple
//! path from the top-left cell to the bottom-right cell, and writes each one
//! as a numbered list of moves to the report file (`solution.out` by default).

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};

use maze::exit_codes;
use maze::io::config::{DEFAULT_CONFIG_FILE, SolverConfig, load_config};
use maze::logging;
use maze::solve::{SolveOutcome, load_board, solve_to_path};

#[derive(Parser)]
#[command(
    name = "maze",
    version,
    about = "Enumerate every path through a walled maze"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Find every path from the top-left to the bottom-right cell and write the report.
    Solve {
        /// Maze file: rows and columns, then one `row col` pair per wall.
        maze: PathBuf,
        /// Report file (overrides `output` in the config).
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Config file; missing means defaults.
        #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,
        /// Stop after this many paths.
        #[arg(long)]
        limit: Option<usize>,
        /// Do not print the board before searching.
        #[arg(long)]
        no_board: bool,
        /// Accept any maze file name.
        #[arg(long)]
        lenient_names: bool,
    },
    /// Load and print a maze without searching it.
    Check {
        /// Maze file to check.
        maze: PathBuf,
        /// Config file; missing means defaults.
        #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,
    },
}

fn main() {
    logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    match cli.command {
        Command::Solve {
            maze,
            output,
            config,
            limit,
            no_board,
            lenient_names,
        } => {
            let mut cfg = load_config(&config)?;
            if let Some(output) = output {
                cfg.output = output;
            }
            if limit.is_some() {
                cfg.max_solutions = limit;
            }
            cfg.print_board &= !no_board;
            cfg.strict_file_names &= !lenient_names;
            cfg.validate()?;
            cmd_solve(&maze, &cfg)
        }
        Command::Check { maze, config } => {
            let cfg = load_config(&config)?;
            cmd_check(&maze, &cfg)
        }
    }
}

fn cmd_solve(maze: &Path, cfg: &SolverConfig) -> Result<i32> {
    let mut grid = load_board(maze, cfg)?;
    println!(
        "Success! Generating paths and writing solution to '{}'",
        cfg.output.display()
    );
    if cfg.print_board {
        println!("{grid}");
    }

    let outcome = solve_to_path(&mut grid, &cfg.output, cfg.max_solutions)?;
    let code = match outcome {
        SolveOutcome::Solved(summary) => {
            println!(
                "{} path(s) written to {}",
                summary.solutions,
                cfg.output.display()
            );
            exit_codes::OK
        }
        SolveOutcome::NoSolutions(_) => {
            println!("No solutions");
            exit_codes::NO_SOLUTIONS
        }
        SolveOutcome::Blocked { entry, exit } => {
            if exit {
                println!("Exit is blocked. No solutions.");
            }
            if entry {
                println!("Entry point blocked. No solutions.");
            }
            exit_codes::BLOCKED
        }
    };
    Ok(code)
}

fn cmd_check(maze: &Path, cfg: &SolverConfig) -> Result<i32> {
    let grid = load_board(maze, cfg)?;
    println!("{grid}");
    println!(
        "{}x{} board, {} wall(s)",
        grid.height(),
        grid.length(),
        grid.closed_count()
    );
    Ok(exit_codes::OK)
}
