//! Stable exit codes for maze CLI commands.

/// Command succeeded; at least one path was written (or the maze checked out).
pub const OK: i32 = 0;
/// Command failed due to a bad file name, unreadable or malformed maze, config or I/O errors.
pub const INVALID: i32 = 1;
/// `maze solve` searched the whole board and found no path.
pub const NO_SOLUTIONS: i32 = 2;
/// `maze solve` found the entry or exit cell walled off and skipped the search.
pub const BLOCKED: i32 = 3;
