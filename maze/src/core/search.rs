//! Exhaustive depth-first backtracking from the entry cell to the exit cell.
//!
//! Each visited location is pushed on the recorder, checked against the exit,
//! and, if open, closed while its neighbours are explored in
//! [`SEARCH_ORDER`]. Neighbours are tried without range checks; the grid's
//! border ring makes any step off the board read as closed. The cell is
//! reopened and the location popped once its neighbours are exhausted, so the
//! grid is left as it was found.
//!
//! Pending neighbours live in a heap-allocated frame stack rather than on the
//! call stack, so path length is bounded by memory, not thread stack size.

use std::convert::Infallible;
use std::ops::ControlFlow;

use tracing::{debug, instrument};

use super::grid::Grid;
use super::location::{Location, SEARCH_ORDER};
use super::recorder::PathRecorder;
use super::solution::Solution;

/// Receives solutions as the search finds them.
///
/// Returning `ControlFlow::Break` stops the search; an error aborts it. In
/// both cases the grid is restored before `PathSearch::run` returns.
pub trait SolutionSink {
    type Error;

    fn accept(&mut self, solution: &Solution) -> Result<ControlFlow<()>, Self::Error>;
}

impl SolutionSink for Vec<Solution> {
    type Error = Infallible;

    fn accept(&mut self, solution: &Solution) -> Result<ControlFlow<()>, Infallible> {
        self.push(solution.clone());
        Ok(ControlFlow::Continue(()))
    }
}

/// Counters reported after a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchSummary {
    /// Solutions handed to the sink.
    pub solutions: usize,
    /// Locations pushed on the recorder, including dead ends.
    pub steps: u64,
    /// True if a solution limit or the sink ended the search.
    pub stopped_early: bool,
}

/// A closed cell on the current path and how many of its neighbours have
/// been tried.
struct Frame {
    loc: Location,
    tried: usize,
}

/// Backtracking search over an exclusively borrowed grid.
pub struct PathSearch<'g> {
    grid: &'g mut Grid,
    recorder: PathRecorder,
    exit: Location,
    limit: Option<usize>,
    solutions: usize,
    steps: u64,
}

impl<'g> PathSearch<'g> {
    pub fn new(grid: &'g mut Grid) -> Self {
        let exit = grid.exit();
        Self {
            grid,
            recorder: PathRecorder::new(),
            exit,
            limit: None,
            solutions: 0,
            steps: 0,
        }
    }

    /// Stop after `limit` solutions. `None` enumerates every path.
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// Run from the entry cell until every branch is exhausted.
    #[instrument(skip_all)]
    pub fn run<S: SolutionSink>(mut self, sink: &mut S) -> Result<SearchSummary, S::Error> {
        debug!(
            height = self.grid.height(),
            length = self.grid.length(),
            "search started"
        );
        let flow = self.explore(sink)?;
        debug_assert!(self.recorder.is_empty());
        let summary = SearchSummary {
            solutions: self.solutions,
            steps: self.steps,
            stopped_early: flow.is_break(),
        };
        debug!(
            solutions = summary.solutions,
            steps = summary.steps,
            stopped_early = summary.stopped_early,
            "search finished"
        );
        Ok(summary)
    }

    fn explore<S: SolutionSink>(&mut self, sink: &mut S) -> Result<ControlFlow<()>, S::Error> {
        let mut frames = Vec::new();
        let mut next = Some(self.grid.entry());
        let flow = loop {
            if let Some(loc) = next.take() {
                match self.enter(loc, &mut frames, sink) {
                    Ok(ControlFlow::Continue(())) => {}
                    done => break done,
                }
            }
            let Some(frame) = frames.last_mut() else {
                break Ok(ControlFlow::Continue(()));
            };
            match SEARCH_ORDER.get(frame.tried) {
                Some(&direction) => {
                    frame.tried += 1;
                    next = Some(frame.loc.step(direction));
                }
                None => {
                    let loc = frame.loc;
                    frames.pop();
                    self.leave(loc);
                }
            }
        };
        // Early stop or sink error: reopen whatever is still on the path.
        while let Some(frame) = frames.pop() {
            self.leave(frame.loc);
        }
        flow
    }

    /// Push `loc` and either report it, open a frame for it, or drop it.
    fn enter<S: SolutionSink>(
        &mut self,
        loc: Location,
        frames: &mut Vec<Frame>,
        sink: &mut S,
    ) -> Result<ControlFlow<()>, S::Error> {
        self.recorder.push(loc);
        self.steps += 1;

        // The exit is terminal: report it and never move on from it.
        if loc == self.exit {
            let flow = self.emit(sink);
            self.recorder.pop();
            return flow;
        }
        if self.grid.is_open(loc) {
            self.grid.set_open(loc, false);
            frames.push(Frame { loc, tried: 0 });
        } else {
            self.recorder.pop();
        }
        Ok(ControlFlow::Continue(()))
    }

    fn leave(&mut self, loc: Location) {
        self.grid.set_open(loc, true);
        self.recorder.pop();
    }

    fn emit<S: SolutionSink>(&mut self, sink: &mut S) -> Result<ControlFlow<()>, S::Error> {
        self.solutions += 1;
        let solution = Solution::new(self.solutions, self.recorder.as_slice().to_vec());
        debug!(
            number = solution.number,
            moves = solution.move_count(),
            "solution found"
        );
        let flow = sink.accept(&solution)?;
        if self.limit.is_some_and(|limit| self.solutions >= limit) {
            return Ok(ControlFlow::Break(()));
        }
        Ok(flow)
    }
}

/// Collect every solution on `grid`, in discovery order.
pub fn find_all_paths(grid: &mut Grid) -> Vec<Solution> {
    let mut solutions = Vec::new();
    PathSearch::new(grid)
        .run(&mut solutions)
        .unwrap_or_else(|never| match never {});
    solutions
}
