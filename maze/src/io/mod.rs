//! I/O adapters around the maze core.

pub mod config;
pub mod maze_file;
pub mod report;
