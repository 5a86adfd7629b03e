//! Error taxonomy for the pure maze core.

use thiserror::Error;

use super::location::Location;

/// Contract violations raised by core data structures.
///
/// Blocked entry/exit cells are not errors: they are reported as a solve
/// outcome and the search is skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Board construction with a non-positive height or length.
    #[error("invalid board dimensions {height}x{length}: both must be > 0")]
    InvalidDimensions { height: i64, length: i64 },

    /// Board whose padded cell count cannot be addressed or allocated.
    #[error("board {height}x{length} is too large")]
    TooLarge { height: i64, length: i64 },

    /// Top-of-stack access on an empty path recorder.
    #[error("path recorder is empty")]
    EmptyStack,

    /// Two consecutive path locations are not one cardinal step apart.
    #[error("locations {from} and {to} are not adjacent")]
    NonAdjacentStep { from: Location, to: Location },

    /// A report block could not be read back.
    #[error("malformed report at line {line}: {reason}")]
    MalformedReport { line: usize, reason: String },
}
