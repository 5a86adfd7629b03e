//! Text rendering of solutions, and reading a rendered report back.
//!
//! A solution block looks like:
//!
//! ```text
//! PATH NUMBER: 2
//! START. ENTER FROM NORTH.
//! EAST
//! SOUTH
//! EXIT SOUTH. END PATH.
//!
//! ```

use super::error::CoreError;
use super::location::{Direction, Location};
use super::solution::{Solution, replay};

pub const PATH_NUMBER: &str = "PATH NUMBER: ";
pub const START: &str = "START. ENTER FROM NORTH.";
pub const END: &str = "EXIT SOUTH. END PATH.";
pub const NO_SOLUTIONS: &str = "No solutions";
pub const EXIT_BLOCKED: &str = "Exit is blocked. No solutions.";
pub const ENTRY_BLOCKED: &str = "Entry point blocked. No solutions.";

/// Render one solution block, trailing blank line included.
pub fn render_solution(solution: &Solution) -> Result<String, CoreError> {
    let moves = solution.moves()?;
    let mut out = format!("{PATH_NUMBER}{}\n{START}\n", solution.number);
    for direction in moves {
        out.push_str(direction.label());
        out.push('\n');
    }
    out.push_str(END);
    out.push_str("\n\n");
    Ok(out)
}

/// A solution block read back from a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPath {
    pub number: usize,
    pub moves: Vec<Direction>,
}

impl ParsedPath {
    /// Locations visited when the moves are replayed from `start`.
    pub fn locations(&self, start: Location) -> Vec<Location> {
        replay(start, &self.moves)
    }
}

/// Parse every solution block in `report`.
///
/// Notice lines (no solutions, blocked endpoints) and blank lines outside a
/// block are skipped.
pub fn parse_report(report: &str) -> Result<Vec<ParsedPath>, CoreError> {
    let mut paths = Vec::new();
    let mut current: Option<ParsedPath> = None;
    let mut started = false;

    for (index, raw) in report.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.trim();
        let malformed = |reason: &str| CoreError::MalformedReport {
            line: line_no,
            reason: reason.to_string(),
        };

        if let Some(number) = line.strip_prefix(PATH_NUMBER) {
            if current.is_some() {
                return Err(malformed("path block not terminated"));
            }
            let number = number
                .trim()
                .parse()
                .map_err(|_| malformed("invalid path number"))?;
            current = Some(ParsedPath {
                number,
                moves: Vec::new(),
            });
            started = false;
            continue;
        }

        let Some(path) = current.as_mut() else {
            continue;
        };
        if line == START {
            if started {
                return Err(malformed("duplicate start marker"));
            }
            started = true;
        } else if line == END {
            if !started {
                return Err(malformed("end marker before start marker"));
            }
            paths.extend(current.take());
        } else if !started {
            return Err(malformed("expected start marker"));
        } else {
            let direction = Direction::from_label(line).ok_or_else(|| malformed("unknown move"))?;
            path.moves.push(direction);
        }
    }

    if current.is_some() {
        return Err(CoreError::MalformedReport {
            line: report.lines().count(),
            reason: "unterminated path block".to_string(),
        });
    }
    Ok(paths)
}
