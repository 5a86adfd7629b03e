//! Maze board with a closed border ring ("virtual padding").
//!
//! Callers address interior cells with zero-based coordinates. The buffer is
//! padded by [`BORDER`] cells on every side and the padding is never open, so
//! a step off any edge reads as closed without an explicit bounds check.

use std::fmt;

use super::error::CoreError;
use super::location::Location;

/// Width of the closed ring around the interior.
pub const BORDER: i64 = 1;

/// Open/closed state for every cell, border included.
///
/// `false` means either a wall or a cell on the path currently being
/// explored. The search only reopens cells it closed itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<bool>,
    padded_height: i64,
    padded_length: i64,
}

impl Grid {
    /// Build a `height` x `length` board with every interior cell open.
    pub fn new(height: i64, length: i64) -> Result<Self, CoreError> {
        if height <= 0 || length <= 0 {
            return Err(CoreError::InvalidDimensions { height, length });
        }
        let too_large = || CoreError::TooLarge { height, length };
        let padded_height = height.checked_add(2 * BORDER).ok_or_else(too_large)?;
        let padded_length = length.checked_add(2 * BORDER).ok_or_else(too_large)?;
        let count = padded_height
            .checked_mul(padded_length)
            .and_then(|count| usize::try_from(count).ok())
            .ok_or_else(too_large)?;
        let mut cells = Vec::new();
        cells.try_reserve_exact(count).map_err(|_| too_large())?;
        for row in 0..padded_height {
            for col in 0..padded_length {
                let border = row < BORDER
                    || col < BORDER
                    || row >= padded_height - BORDER
                    || col >= padded_length - BORDER;
                cells.push(!border);
            }
        }
        Ok(Self {
            cells,
            padded_height,
            padded_length,
        })
    }

    /// Interior height (rows).
    pub fn height(&self) -> i64 {
        self.padded_height - 2 * BORDER
    }

    /// Interior length (columns).
    pub fn length(&self) -> i64 {
        self.padded_length - 2 * BORDER
    }

    pub fn entry(&self) -> Location {
        Location::new(0, 0)
    }

    pub fn exit(&self) -> Location {
        Location::new(self.height() - 1, self.length() - 1)
    }

    /// True if `loc` addresses an interior cell.
    pub fn contains(&self, loc: Location) -> bool {
        (0..self.height()).contains(&loc.row) && (0..self.length()).contains(&loc.col)
    }

    /// Set the open flag at `loc`.
    ///
    /// Locations on the border ring write into the sentinel; anything past it
    /// has no backing cell and is ignored.
    pub fn set_open(&mut self, loc: Location, value: bool) {
        if let Some(index) = self.index(loc) {
            self.cells[index] = value;
        }
    }

    /// Open flag at `loc`. Anything outside the padded buffer is closed.
    pub fn is_open(&self, loc: Location) -> bool {
        self.index(loc).is_some_and(|index| self.cells[index])
    }

    /// Number of closed interior cells.
    pub fn closed_count(&self) -> usize {
        self.interior().filter(|loc| !self.is_open(*loc)).count()
    }

    /// Interior locations in row-major order.
    pub fn interior(&self) -> impl Iterator<Item = Location> + '_ {
        (0..self.height())
            .flat_map(move |row| (0..self.length()).map(move |col| Location::new(row, col)))
    }

    fn index(&self, loc: Location) -> Option<usize> {
        let row = loc.row + BORDER;
        let col = loc.col + BORDER;
        if !(0..self.padded_height).contains(&row) || !(0..self.padded_length).contains(&col) {
            return None;
        }
        Some((row * self.padded_length + col) as usize)
    }
}

impl fmt::Display for Grid {
    /// One line per row, `O` for open and `|` for closed, blank line between rows.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height() {
            for col in 0..self.length() {
                let cell = if self.is_open(Location::new(row, col)) {
                    " O "
                } else {
                    " | "
                };
                f.write_str(cell)?;
            }
            f.write_str("\n\n")?;
        }
        Ok(())
    }
}
