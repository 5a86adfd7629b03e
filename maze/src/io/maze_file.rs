//! Maze file validation and parsing.
//!
//! The file holds whitespace-separated integers: the board's rows and
//! columns, then one `row col` pair per wall cell until end of input.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, instrument};

use crate::core::error::CoreError;
use crate::core::grid::Grid;
use crate::core::location::Location;

/// Length of the extension after the single `.` in a maze file name.
const EXTENSION_LEN: usize = 3;

#[derive(Debug, Error)]
pub enum MazeFileError {
    #[error("bad file format: '{name}' must be letters with a three-letter extension")]
    BadFileName { name: String },

    #[error("error reading file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: expected an integer, found '{token}'")]
    NotAnInteger { line: usize, token: String },

    #[error("missing board dimensions")]
    MissingDimensions,

    #[error("wall on line {line} has a row but no column")]
    IncompleteWall { line: usize },

    #[error("wall {wall} on line {line} is outside the {height}x{length} board")]
    WallOutOfRange {
        line: usize,
        wall: Location,
        height: i64,
        length: i64,
    },

    #[error(transparent)]
    Dimensions(#[from] CoreError),
}

/// Check the final path component is `LETTERS.EXT` (case-insensitive).
pub fn validate_file_name(path: &Path) -> Result<(), MazeFileError> {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let bad = || MazeFileError::BadFileName { name: name.clone() };

    let (stem, extension) = name.rsplit_once('.').ok_or_else(bad)?;
    let letters_only = |part: &str| part.chars().all(|c| c.is_ascii_alphabetic());
    if !letters_only(stem)
        || !letters_only(extension)
        || extension.chars().count() != EXTENSION_LEN
    {
        return Err(bad());
    }
    Ok(())
}

/// Parse maze file contents into a board with its walls closed.
pub fn parse_maze(source: &str) -> Result<Grid, MazeFileError> {
    let mut numbers = tokens(source);
    let (height, length) = match (numbers.next(), numbers.next()) {
        (Some(height), Some(length)) => (height?.1, length?.1),
        (Some(first), None) => {
            first?;
            return Err(MazeFileError::MissingDimensions);
        }
        _ => return Err(MazeFileError::MissingDimensions),
    };
    let mut grid = Grid::new(height, length)?;

    while let Some(row) = numbers.next() {
        let (line, row) = row?;
        let (_, col) = numbers
            .next()
            .ok_or(MazeFileError::IncompleteWall { line })??;
        let wall = Location::new(row, col);
        if !grid.contains(wall) {
            return Err(MazeFileError::WallOutOfRange {
                line,
                wall,
                height,
                length,
            });
        }
        grid.set_open(wall, false);
    }
    Ok(grid)
}

/// Read and parse a maze file, optionally enforcing the file name format.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn load_maze(path: &Path, strict_file_names: bool) -> Result<Grid, MazeFileError> {
    if strict_file_names {
        validate_file_name(path)?;
    }
    let source = fs::read_to_string(path).map_err(|source| MazeFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let grid = parse_maze(&source)?;
    debug!(
        height = grid.height(),
        length = grid.length(),
        walls = grid.closed_count(),
        "maze loaded"
    );
    Ok(grid)
}

/// Integers in `source` with their 1-based line numbers.
fn tokens(source: &str) -> impl Iterator<Item = Result<(usize, i64), MazeFileError>> + '_ {
    source.lines().enumerate().flat_map(|(index, line)| {
        line.split_whitespace().map(move |token| {
            token
                .parse::<i64>()
                .map(|value| (index + 1, value))
                .map_err(|_| MazeFileError::NotAnInteger {
                    line: index + 1,
                    token: token.to_string(),
                })
        })
    })
}
