//! Last-in-first-out record of the path currently being explored.

use super::error::CoreError;
use super::location::Location;

/// Visited locations in visitation order, most recent on top.
///
/// `pop` on an empty recorder is a no-op so that backtracking call sites
/// never need to check. `peek` on an empty recorder is an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathRecorder {
    items: Vec<Location>,
}

impl PathRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, loc: Location) {
        self.items.push(loc);
    }

    /// Remove and return the top location, if any.
    pub fn pop(&mut self) -> Option<Location> {
        self.items.pop()
    }

    pub fn peek(&self) -> Result<Location, CoreError> {
        self.items.last().copied().ok_or(CoreError::EmptyStack)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Bottom-to-top view.
    pub fn as_slice(&self) -> &[Location] {
        &self.items
    }

    /// Consume the recorder, yielding locations top first.
    pub fn drain_top_first(self) -> impl Iterator<Item = Location> {
        self.items.into_iter().rev()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(row: i64, col: i64) -> Location {
        Location::new(row, col)
    }

    #[test]
    fn push_pop_is_last_in_first_out() {
        let mut recorder = PathRecorder::new();
        recorder.push(loc(0, 0));
        recorder.push(loc(1, 0));
        assert_eq!(recorder.peek(), Ok(loc(1, 0)));
        assert_eq!(recorder.pop(), Some(loc(1, 0)));
        assert_eq!(recorder.pop(), Some(loc(0, 0)));
        assert!(recorder.is_empty());
    }

    #[test]
    fn pop_on_empty_is_noop() {
        let mut recorder = PathRecorder::new();
        assert_eq!(recorder.pop(), None);
        assert!(recorder.is_empty());
    }

    #[test]
    fn peek_on_empty_is_error() {
        let recorder = PathRecorder::new();
        assert_eq!(recorder.peek(), Err(CoreError::EmptyStack));
    }

    #[test]
    fn clone_keeps_top_on_top() {
        let mut recorder = PathRecorder::new();
        for col in 0..4 {
            recorder.push(loc(0, col));
        }
        let mut copy = recorder.clone();
        assert_eq!(copy.pop(), Some(loc(0, 3)));
        assert_eq!(copy.pop(), Some(loc(0, 2)));
        assert_eq!(recorder.len(), 4);
        assert_eq!(recorder.peek(), Ok(loc(0, 3)));
    }

    #[test]
    fn drain_top_first_reverses_visitation_order() {
        let mut recorder = PathRecorder::new();
        recorder.push(loc(0, 0));
        recorder.push(loc(0, 1));
        recorder.push(loc(1, 1));
        let drained: Vec<_> = recorder.drain_top_first().collect();
        assert_eq!(drained, vec![loc(1, 1), loc(0, 1), loc(0, 0)]);
    }
}
