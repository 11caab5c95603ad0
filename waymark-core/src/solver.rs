//! Solver contract shared by shortest-path implementations.
//!
//! A solve either reaches one of three terminal [`SolverOutcome`]s, reported
//! through a [`Solution`], or fails with a [`SolveError`] when the inputs or the
//! solver's own bookkeeping break a precondition. Timing out and finding no
//! path are outcomes, not errors.

use std::time::Duration;

use thiserror::Error;

use crate::QueueError;

/// Parameters for a point-to-point search.
///
/// # Examples
/// ```rust
/// use std::time::Duration;
/// use waymark_core::SolveRequest;
///
/// let request = SolveRequest::new('a', 'd', Duration::from_secs(1));
/// assert_eq!(request.start, 'a');
/// assert_eq!(request.goal, 'd');
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveRequest<V> {
    /// Vertex the path starts from.
    pub start: V,
    /// Vertex the path must reach.
    pub goal: V,
    /// Wall-clock budget for the search. A zero budget times out before the
    /// first expansion.
    pub timeout: Duration,
}

impl<V> SolveRequest<V> {
    /// Construct a request.
    #[must_use]
    pub const fn new(start: V, goal: V, timeout: Duration) -> Self {
        Self {
            start,
            goal,
            timeout,
        }
    }
}

/// Terminal state of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SolverOutcome {
    /// The goal was reached; the solution carries a path and its weight.
    Solved,
    /// Every vertex reachable from the start was exhausted without reaching
    /// the goal.
    Unsolvable,
    /// The time budget ran out before the search finished.
    Timeout,
}

/// Counters describing how much work a search performed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagnostics {
    /// Wall-clock time from the start of the search to its termination.
    pub elapsed: Duration,
    /// Distinct vertices discovered, including the start.
    pub vertices_discovered: usize,
    /// Vertices taken from the frontier, counting re-expansions.
    pub expansions: usize,
}

/// Result bundle of a completed search.
///
/// The path runs from start to goal inclusive and is empty unless the outcome
/// is [`SolverOutcome::Solved`]; likewise the weight is only set for a solved
/// search.
///
/// # Examples
/// ```rust
/// use waymark_core::{Diagnostics, Solution, SolverOutcome};
///
/// let solution = Solution::solved(vec!['a', 'b'], 1.5, Diagnostics::default());
/// assert_eq!(solution.outcome(), SolverOutcome::Solved);
/// assert_eq!(solution.path(), &['a', 'b']);
/// assert_eq!(solution.weight(), Some(1.5));
///
/// let timed_out: Solution<char> = Solution::timed_out(Diagnostics::default());
/// assert!(timed_out.path().is_empty());
/// assert_eq!(timed_out.weight(), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution<V> {
    outcome: SolverOutcome,
    path: Vec<V>,
    weight: Option<f64>,
    diagnostics: Diagnostics,
}

impl<V> Solution<V> {
    /// A solved search with its path and total weight.
    #[must_use]
    pub const fn solved(path: Vec<V>, weight: f64, diagnostics: Diagnostics) -> Self {
        Self {
            outcome: SolverOutcome::Solved,
            path,
            weight: Some(weight),
            diagnostics,
        }
    }

    /// A search that exhausted the reachable graph.
    #[must_use]
    pub const fn unsolvable(diagnostics: Diagnostics) -> Self {
        Self::unfinished(SolverOutcome::Unsolvable, diagnostics)
    }

    /// A search abandoned because its time budget ran out.
    #[must_use]
    pub const fn timed_out(diagnostics: Diagnostics) -> Self {
        Self::unfinished(SolverOutcome::Timeout, diagnostics)
    }

    const fn unfinished(outcome: SolverOutcome, diagnostics: Diagnostics) -> Self {
        Self {
            outcome,
            path: Vec::new(),
            weight: None,
            diagnostics,
        }
    }

    /// Terminal outcome.
    #[must_use]
    pub const fn outcome(&self) -> SolverOutcome {
        self.outcome
    }

    /// Whether the goal was reached.
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        matches!(self.outcome, SolverOutcome::Solved)
    }

    /// Vertices from start to goal inclusive.
    #[must_use]
    pub fn path(&self) -> &[V] {
        &self.path
    }

    /// Consume the solution, returning the path.
    #[must_use]
    pub fn into_path(self) -> Vec<V> {
        self.path
    }

    /// Sum of edge weights along the path.
    #[must_use]
    pub const fn weight(&self) -> Option<f64> {
        self.weight
    }

    /// Distinct vertices discovered during the search.
    #[must_use]
    pub const fn vertices_discovered(&self) -> usize {
        self.diagnostics.vertices_discovered
    }

    /// Elapsed wall-clock time at termination.
    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        self.diagnostics.elapsed
    }

    /// Full work counters.
    #[must_use]
    pub const fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }
}

/// Errors returned by [`ShortestPathSolver::solve`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    /// The frontier was used in violation of its preconditions. This is a
    /// solver defect, never a property of the input graph.
    #[error("search frontier invariant violated: {0}")]
    Queue(#[from] QueueError),
    /// The graph produced an edge whose weight is negative, NaN or infinite.
    #[error("edge weight {weight} must be finite and non-negative")]
    InvalidEdgeWeight {
        /// Offending weight.
        weight: f64,
    },
    /// The heuristic returned a negative, NaN or infinite estimate.
    #[error("heuristic estimate {estimate} must be finite and non-negative")]
    InvalidHeuristic {
        /// Offending estimate.
        estimate: f64,
    },
    /// A vertex reached the frontier without a search record. Like
    /// [`SolveError::Queue`], this marks a solver defect.
    #[error("vertex has no search record")]
    UntrackedVertex,
}

/// Find a path between two vertices of a graph.
///
/// Implementations run the search to completion inside `solve`; there is no
/// stepping or resumption.
pub trait ShortestPathSolver<V> {
    /// Solve a request, producing a terminal solution or an error.
    ///
    /// # Errors
    ///
    /// Returns a [`SolveError`] when the graph violates its contract or the
    /// solver's internal bookkeeping fails.
    fn solve(&self, request: &SolveRequest<V>) -> Result<Solution<V>, SolveError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Solution::<u8>::unsolvable(Diagnostics::default()), SolverOutcome::Unsolvable)]
    #[case(Solution::<u8>::timed_out(Diagnostics::default()), SolverOutcome::Timeout)]
    fn unfinished_solutions_have_no_path(
        #[case] solution: Solution<u8>,
        #[case] expected: SolverOutcome,
    ) {
        assert_eq!(solution.outcome(), expected);
        assert!(!solution.is_solved());
        assert!(solution.path().is_empty());
        assert_eq!(solution.weight(), None);
    }

    #[rstest]
    fn accessors_expose_diagnostics() {
        let diagnostics = Diagnostics {
            elapsed: Duration::from_millis(3),
            vertices_discovered: 4,
            expansions: 2,
        };
        let solution = Solution::solved(vec![1_u8, 2], 2.0, diagnostics);
        assert_eq!(solution.vertices_discovered(), 4);
        assert_eq!(solution.elapsed(), Duration::from_millis(3));
        assert_eq!(solution.diagnostics().expansions, 2);
        assert_eq!(solution.into_path(), vec![1, 2]);
    }

    #[rstest]
    fn queue_errors_convert_into_solve_errors() {
        let err = SolveError::from(QueueError::DuplicateItem);
        assert_eq!(err, SolveError::Queue(QueueError::DuplicateItem));
        assert!(err.to_string().contains("already present"));
    }

    #[cfg(feature = "serde")]
    #[rstest]
    #[case(SolverOutcome::Solved, "\"solved\"")]
    #[case(SolverOutcome::Unsolvable, "\"unsolvable\"")]
    #[case(SolverOutcome::Timeout, "\"timeout\"")]
    fn outcomes_serialise_in_snake_case(#[case] outcome: SolverOutcome, #[case] expected: &str) {
        let encoded = serde_json::to_string(&outcome).expect("outcome serialises");
        assert_eq!(encoded, expected);
    }
}
