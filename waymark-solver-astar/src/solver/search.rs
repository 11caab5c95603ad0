//! Per-request search state for [`super::AStarSolver`].
//!
//! One [`Search`] owns the frontier and the record table for a single solve.
//! Records and frontier membership are kept apart: a vertex with a record but
//! no frontier entry has been expanded, and whether it may be reopened is an
//! explicit policy rather than a side effect of control flow.

use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

use log::{debug, error, trace, warn};
use waymark_core::{
    AStarGraph, Diagnostics, MinHeap, QueueError, Solution, SolveError, SolveRequest,
    SolverOutcome,
};

use super::AStarSolverConfig;

/// Best known way of reaching a discovered vertex.
#[derive(Debug, Clone)]
struct SearchRecord<V> {
    predecessor: Option<V>,
    distance: f64,
}

/// Where the search stands after one iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchState {
    Running,
    Finished(SolverOutcome),
}

pub(super) struct Search<'g, V, G: ?Sized> {
    graph: &'g G,
    goal: V,
    timeout: Duration,
    reopen_expanded: bool,
    records: HashMap<V, SearchRecord<V>>,
    frontier: MinHeap<V>,
    expansions: usize,
    started_at: Instant,
}

impl<'g, V, G> Search<'g, V, G>
where
    V: Clone + Eq + Hash,
    G: AStarGraph<V> + ?Sized,
{
    /// Seed the frontier with the start vertex and start the clock.
    pub(super) fn start(
        graph: &'g G,
        request: &SolveRequest<V>,
        config: &AStarSolverConfig,
    ) -> Result<Self, SolveError> {
        let mut search = Self {
            graph,
            goal: request.goal.clone(),
            timeout: request.timeout,
            reopen_expanded: config.reopen_expanded,
            records: HashMap::new(),
            frontier: MinHeap::new(),
            expansions: 0,
            started_at: Instant::now(),
        };
        debug!("A* search started with a {:?} budget", request.timeout);
        let priority = search.estimate(&request.start)?;
        search.records.insert(
            request.start.clone(),
            SearchRecord {
                predecessor: None,
                distance: 0.0,
            },
        );
        frontier_op(search.frontier.insert(request.start.clone(), priority))?;
        Ok(search)
    }

    /// Drive the search to a terminal outcome.
    pub(super) fn run(mut self) -> Result<Solution<V>, SolveError> {
        loop {
            if let SearchState::Finished(outcome) = self.step()? {
                return self.finish(outcome);
            }
        }
    }

    fn step(&mut self) -> Result<SearchState, SolveError> {
        if self.frontier.is_empty() {
            return Ok(SearchState::Finished(SolverOutcome::Unsolvable));
        }
        if self.started_at.elapsed() >= self.timeout {
            return Ok(SearchState::Finished(SolverOutcome::Timeout));
        }
        let (vertex, priority) = frontier_op(self.frontier.extract_min())?;
        self.expansions += 1;
        trace!(
            "expansion {} at priority {priority}, {} queued",
            self.expansions,
            self.frontier.len()
        );
        if vertex == self.goal {
            return Ok(SearchState::Finished(SolverOutcome::Solved));
        }
        self.expand(&vertex)?;
        Ok(SearchState::Running)
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "relaxation sums floating-point edge weights"
    )]
    fn expand(&mut self, vertex: &V) -> Result<(), SolveError> {
        let base = self.distance(vertex)?;
        for edge in self.graph.neighbors(vertex) {
            let weight = edge.weight();
            if !(weight.is_finite() && weight >= 0.0) {
                warn!("rejecting edge with weight {weight}");
                return Err(SolveError::InvalidEdgeWeight { weight });
            }
            let (to, _) = edge.into_target();
            let candidate = base + weight;
            match self.records.get(&to).map(|record| record.distance) {
                None => self.discover(vertex, to, candidate)?,
                Some(known) if candidate < known => self.improve(vertex, to, candidate)?,
                Some(_) => {}
            }
        }
        Ok(())
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "frontier priority is distance plus heuristic estimate"
    )]
    fn discover(&mut self, from: &V, to: V, distance: f64) -> Result<(), SolveError> {
        let priority = distance + self.estimate(&to)?;
        self.records.insert(
            to.clone(),
            SearchRecord {
                predecessor: Some(from.clone()),
                distance,
            },
        );
        frontier_op(self.frontier.insert(to, priority))
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "frontier priority is distance plus heuristic estimate"
    )]
    fn improve(&mut self, from: &V, to: V, distance: f64) -> Result<(), SolveError> {
        let queued = self.frontier.contains(&to);
        if !queued && !self.reopen_expanded {
            trace!("keeping expanded vertex closed despite a cheaper path");
            return Ok(());
        }
        let priority = distance + self.estimate(&to)?;
        self.records.insert(
            to.clone(),
            SearchRecord {
                predecessor: Some(from.clone()),
                distance,
            },
        );
        if queued {
            frontier_op(self.frontier.change_priority(&to, priority))
        } else {
            trace!("reopening an expanded vertex at priority {priority}");
            frontier_op(self.frontier.insert(to, priority))
        }
    }

    fn estimate(&self, vertex: &V) -> Result<f64, SolveError> {
        let estimate = self.graph.estimated_distance_to_goal(vertex, &self.goal);
        if estimate.is_finite() && estimate >= 0.0 {
            Ok(estimate)
        } else {
            warn!("rejecting heuristic estimate {estimate}");
            Err(SolveError::InvalidHeuristic { estimate })
        }
    }

    fn distance(&self, vertex: &V) -> Result<f64, SolveError> {
        self.records
            .get(vertex)
            .map(|record| record.distance)
            .ok_or_else(untracked)
    }

    /// Follow predecessors back from the goal and return the path in travel
    /// order.
    fn reconstruct_path(&self) -> Result<Vec<V>, SolveError> {
        let mut path = vec![self.goal.clone()];
        let mut cursor = &self.goal;
        while let Some(previous) = self
            .records
            .get(cursor)
            .ok_or_else(untracked)?
            .predecessor
            .as_ref()
        {
            if path.len() >= self.records.len() {
                warn!("predecessor chain is longer than the record table; truncating path");
                debug_assert!(false, "predecessor chain contains a cycle");
                break;
            }
            path.push(previous.clone());
            cursor = previous;
        }
        path.reverse();
        Ok(path)
    }

    fn finish(self, outcome: SolverOutcome) -> Result<Solution<V>, SolveError> {
        let diagnostics = Diagnostics {
            elapsed: self.started_at.elapsed(),
            vertices_discovered: self.records.len(),
            expansions: self.expansions,
        };
        debug!(
            "A* search finished: {outcome:?} after {} expansions, {} vertices discovered, {:?}",
            diagnostics.expansions, diagnostics.vertices_discovered, diagnostics.elapsed
        );
        match outcome {
            SolverOutcome::Solved => {
                let weight = self.distance(&self.goal)?;
                let path = self.reconstruct_path()?;
                Ok(Solution::solved(path, weight, diagnostics))
            }
            SolverOutcome::Unsolvable => Ok(Solution::unsolvable(diagnostics)),
            SolverOutcome::Timeout => {
                warn!(
                    "A* search exceeded its {:?} budget after {} expansions",
                    self.timeout, diagnostics.expansions
                );
                Ok(Solution::timed_out(diagnostics))
            }
        }
    }
}

/// Surface frontier precondition violations as solver defects.
fn frontier_op<T>(result: Result<T, QueueError>) -> Result<T, SolveError> {
    result.map_err(|err| {
        error!("search frontier invariant violated: {err}");
        SolveError::Queue(err)
    })
}

fn untracked() -> SolveError {
    error!("frontier produced a vertex with no search record");
    SolveError::UntrackedVertex
}
