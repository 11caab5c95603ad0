//! `AStarSolver` implementation over the core graph capability.

mod search;

use std::hash::Hash;
use std::time::Duration;

use waymark_core::{AStarGraph, ShortestPathSolver, Solution, SolveError, SolveRequest};

use self::search::Search;

/// Configuration for [`AStarSolver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AStarSolverConfig {
    /// Put an already expanded vertex back on the frontier when a strictly
    /// cheaper path to it turns up.
    ///
    /// With a consistent heuristic this never happens, so the flag only
    /// matters for inconsistent heuristics: enabled, the search stays optimal
    /// for any admissible heuristic at the cost of repeated expansions;
    /// disabled, every vertex is expanded at most once and the returned path
    /// may be suboptimal.
    pub reopen_expanded: bool,
}

impl Default for AStarSolverConfig {
    fn default() -> Self {
        Self {
            reopen_expanded: true,
        }
    }
}

impl AStarSolverConfig {
    /// Set [`reopen_expanded`](Self::reopen_expanded).
    #[must_use]
    pub const fn with_reopen_expanded(mut self, reopen_expanded: bool) -> Self {
        self.reopen_expanded = reopen_expanded;
        self
    }
}

/// A\* shortest-path solver.
///
/// The solver holds a graph and a configuration; every call to
/// [`solve`](ShortestPathSolver::solve) runs an independent search with its own
/// frontier and record table, so one solver can serve many requests in turn.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use waymark_core::{ShortestPathSolver, SolveRequest, SolverOutcome};
/// use waymark_core::test_support::MemoryGraph;
/// use waymark_solver_astar::AStarSolver;
///
/// let graph = MemoryGraph::with_edges([
///     ('A', 'B', 1.0),
///     ('B', 'D', 1.0),
///     ('A', 'C', 5.0),
///     ('C', 'D', 1.0),
/// ]);
/// let solver = AStarSolver::new(&graph);
/// let solution = solver
///     .solve(&SolveRequest::new('A', 'D', Duration::from_secs(5)))
///     .expect("well-formed graph");
///
/// assert_eq!(solution.outcome(), SolverOutcome::Solved);
/// assert_eq!(solution.path(), &['A', 'B', 'D']);
/// assert_eq!(solution.weight(), Some(2.0));
/// ```
#[derive(Debug, Clone)]
pub struct AStarSolver<G> {
    graph: G,
    config: AStarSolverConfig,
}

impl<G> AStarSolver<G> {
    /// Construct a solver using default configuration.
    #[must_use]
    pub fn new(graph: G) -> Self {
        Self::with_config(graph, AStarSolverConfig::default())
    }

    /// Construct a solver with explicit configuration.
    #[must_use]
    pub const fn with_config(graph: G, config: AStarSolverConfig) -> Self {
        Self { graph, config }
    }

    /// The graph being searched.
    #[must_use]
    pub const fn graph(&self) -> &G {
        &self.graph
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &AStarSolverConfig {
        &self.config
    }
}

impl<V, G> ShortestPathSolver<V> for AStarSolver<G>
where
    V: Clone + Eq + Hash,
    G: AStarGraph<V>,
{
    fn solve(&self, request: &SolveRequest<V>) -> Result<Solution<V>, SolveError> {
        Search::start(&self.graph, request, &self.config)?.run()
    }
}

/// Search `graph` from `start` to `goal` within `timeout` using the default
/// configuration.
///
/// # Errors
///
/// Returns [`SolveError`] when the graph yields an invalid edge weight or
/// heuristic estimate.
pub fn solve<V, G>(
    graph: &G,
    start: V,
    goal: V,
    timeout: Duration,
) -> Result<Solution<V>, SolveError>
where
    V: Clone + Eq + Hash,
    G: AStarGraph<V> + ?Sized,
{
    let request = SolveRequest::new(start, goal, timeout);
    Search::start(graph, &request, &AStarSolverConfig::default())?.run()
}
