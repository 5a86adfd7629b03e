//! Exhaustive maze path enumeration.
//!
//! Every simple path from the top-left cell to the bottom-right cell of a
//! walled grid is found by depth-first backtracking and written out as a
//! numbered list of cardinal moves. The crate keeps a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (grid, path recorder, search,
//!   rendering). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (config, maze files, report files).
//!
//! [`solve`] coordinates core logic with I/O to implement the CLI.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod solve;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
