//! Deterministic, pure maze logic.
//!
//! Core modules are free of I/O side effects. They operate on in-memory
//! grids and paths and return deterministic outputs suitable for tests.

pub mod error;
pub mod grid;
pub mod location;
pub mod recorder;
pub mod render;
pub mod search;
pub mod solution;
