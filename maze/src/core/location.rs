//! Cell coordinates and cardinal moves.

use std::fmt;

/// A `(row, col)` pair in interior coordinates.
///
/// Signed so that a step off the north or west edge is representable; the
/// grid reads such locations as closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Location {
    pub row: i64,
    pub col: i64,
}

impl Location {
    pub const fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }

    /// The neighbouring location one step in `direction`. No range check.
    pub fn step(self, direction: Direction) -> Self {
        let (d_row, d_col) = direction.delta();
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }

    /// The direction that moves `self` onto `next`, if they are one step apart.
    pub fn direction_to(self, next: Location) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|direction| self.step(*direction) == next)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A single unit move along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    South,
    East,
    North,
    West,
}

/// Order in which the search tries neighbours.
pub const SEARCH_ORDER: [Direction; 4] = [
    Direction::South,
    Direction::East,
    Direction::North,
    Direction::West,
];

impl Direction {
    pub const ALL: [Direction; 4] = SEARCH_ORDER;

    /// `(row, col)` offset applied by this move.
    pub const fn delta(self) -> (i64, i64) {
        match self {
            Direction::South => (1, 0),
            Direction::East => (0, 1),
            Direction::North => (-1, 0),
            Direction::West => (0, -1),
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Direction::South => "SOUTH",
            Direction::East => "EAST",
            Direction::North => "NORTH",
            Direction::West => "WEST",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Direction::ALL
            .into_iter()
            .find(|direction| direction.label() == label)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_applies_row_and_col_deltas() {
        let origin = Location::new(0, 0);
        assert_eq!(origin.step(Direction::South), Location::new(1, 0));
        assert_eq!(origin.step(Direction::East), Location::new(0, 1));
        assert_eq!(origin.step(Direction::North), Location::new(-1, 0));
        assert_eq!(origin.step(Direction::West), Location::new(0, -1));
    }

    #[test]
    fn direction_to_requires_unit_step() {
        let here = Location::new(2, 2);
        assert_eq!(here.direction_to(Location::new(1, 2)), Some(Direction::North));
        assert_eq!(here.direction_to(Location::new(2, 1)), Some(Direction::West));
        assert_eq!(here.direction_to(Location::new(3, 3)), None);
        assert_eq!(here.direction_to(here), None);
    }

    #[test]
    fn labels_parse_back() {
        for direction in Direction::ALL {
            assert_eq!(Direction::from_label(direction.label()), Some(direction));
        }
        assert_eq!(Direction::from_label("south"), None);
    }
}
