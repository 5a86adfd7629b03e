//! Completed entry-to-exit paths.

use super::error::CoreError;
use super::location::{Direction, Location};

/// One discovered path, numbered from 1 in discovery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub number: usize,
    pub locations: Vec<Location>,
}

impl Solution {
    /// Build from locations already in entry-to-exit order.
    pub fn new(number: usize, locations: Vec<Location>) -> Self {
        Self { number, locations }
    }

    /// Build from locations in exit-first (top-of-stack first) order.
    pub fn from_top_first(number: usize, top_first: impl IntoIterator<Item = Location>) -> Self {
        let mut locations: Vec<Location> = top_first.into_iter().collect();
        locations.reverse();
        Self { number, locations }
    }

    /// The unit moves between consecutive locations.
    pub fn moves(&self) -> Result<Vec<Direction>, CoreError> {
        self.locations
            .windows(2)
            .map(|pair| {
                pair[0]
                    .direction_to(pair[1])
                    .ok_or(CoreError::NonAdjacentStep {
                        from: pair[0],
                        to: pair[1],
                    })
            })
            .collect()
    }

    pub fn move_count(&self) -> usize {
        self.locations.len().saturating_sub(1)
    }
}

/// Replay `moves` from `start`, returning every visited location.
pub fn replay(start: Location, moves: &[Direction]) -> Vec<Location> {
    let mut locations = Vec::with_capacity(moves.len() + 1);
    let mut current = start;
    locations.push(current);
    for direction in moves {
        current = current.step(*direction);
        locations.push(current);
    }
    locations
}
