//! Incremental best-first search.
//!
//! A search is a state machine driven by the caller: each [`step`] performs
//! exactly one dequeue-and-expand transition, so a caller embedded in a
//! per-tick update loop never blocks for an unbounded expansion. Callers
//! that want synchronous resolution use [`run_to_completion`], which has
//! identical semantics to stepping in a loop.
//!
//! [`step`]: IncrementalSearch::step
//! [`run_to_completion`]: IncrementalSearch::run_to_completion

mod astar;

pub use astar::{astar_to_node, dijkstra_to_node, AStarSearch};

use crate::path::Route;

/// Observable state of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    /// The open set is non-empty and no goal node has been dequeued yet.
    Running,
    /// A goal node was dequeued; the solution is available.
    Succeeded,
    /// The open set was exhausted without reaching a goal.
    Failed,
}

impl SearchStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, SearchStatus::Running)
    }
}

/// Contract shared by incremental searches.
///
/// Terminal states are sticky: stepping a finished search returns the
/// terminal status without touching any bookkeeping.
pub trait IncrementalSearch {
    /// Execute one dequeue-and-expand transition and report the resulting
    /// status.
    fn step(&mut self) -> SearchStatus;

    /// Current status without advancing the search.
    fn status(&self) -> SearchStatus;

    /// The solution route, available once the status is
    /// [`SearchStatus::Succeeded`].
    fn solution(&self) -> Option<&Route>;

    /// Step until a terminal state is reached.
    fn run_to_completion(&mut self) -> SearchStatus {
        loop {
            let status = self.step();
            if status.is_terminal() {
                return status;
            }
        }
    }
}
