//! Test-only helpers for constructing boards and maze files.

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::grid::Grid;
use crate::core::location::Location;

/// A `height` x `length` board with no walls.
pub fn open_grid(height: i64, length: i64) -> Grid {
    Grid::new(height, length).expect("valid test dimensions")
}

/// A board with the given `(row, col)` cells closed.
pub fn grid_with_walls(height: i64, length: i64, walls: &[(i64, i64)]) -> Grid {
    let mut grid = open_grid(height, length);
    for &(row, col) in walls {
        grid.set_open(Location::new(row, col), false);
    }
    grid
}

/// Maze file contents in the on-disk format: dimensions line, then one wall per line.
pub fn maze_source(height: i64, length: i64, walls: &[(i64, i64)]) -> String {
    let mut source = format!("{height} {length}\n");
    for (row, col) in walls {
        source.push_str(&format!("{row} {col}\n"));
    }
    source
}

/// Write a maze file named `name` under `dir` and return its path.
pub fn write_maze(
    dir: &Path,
    name: &str,
    height: i64,
    length: i64,
    walls: &[(i64, i64)],
) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, maze_source(height, length, walls)).expect("write maze fixture");
    path
}

/// A fresh temporary directory holding one maze file.
///
/// Keep the returned `TempDir` alive for as long as the path is used.
pub fn temp_maze(
    name: &str,
    height: i64,
    length: i64,
    walls: &[(i64, i64)],
) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_maze(dir.path(), name, height, length, walls);
    (dir, path)
}
