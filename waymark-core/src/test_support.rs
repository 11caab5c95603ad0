//! Test-only graph fixtures and reference answers.
//!
//! The helpers in this module are available to unit tests and behavioural
//! tests. They are gated behind the `test-support` feature (and `cfg(test)`).

use std::collections::{HashMap, HashSet, VecDeque};
use std::hash::Hash;

use crate::{AStarGraph, WeightedEdge};

/// Adjacency-list graph with a per-vertex heuristic table.
///
/// Vertices without an entry in the table estimate zero, so a graph built
/// without estimates behaves like Dijkstra's algorithm under A\*.
///
/// # Examples
/// ```rust
/// use waymark_core::AStarGraph;
/// use waymark_core::test_support::MemoryGraph;
///
/// let graph = MemoryGraph::with_edges([('a', 'b', 1.0), ('b', 'c', 2.0)]);
/// assert_eq!(graph.neighbors(&'a').len(), 1);
/// assert_eq!(graph.estimated_distance_to_goal(&'a', &'c'), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct MemoryGraph<V> {
    edges: HashMap<V, Vec<WeightedEdge<V>>>,
    estimates: HashMap<V, f64>,
}

impl<V> Default for MemoryGraph<V> {
    fn default() -> Self {
        Self {
            edges: HashMap::new(),
            estimates: HashMap::new(),
        }
    }
}

impl<V> MemoryGraph<V>
where
    V: Clone + Eq + Hash,
{
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from `(from, to, weight)` triples.
    #[must_use]
    pub fn with_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (V, V, f64)>,
    {
        let mut graph = Self::new();
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight);
        }
        graph
    }

    /// Add a directed edge.
    pub fn add_edge(&mut self, from: V, to: V, weight: f64) {
        self.edges
            .entry(from.clone())
            .or_default()
            .push(WeightedEdge::new(from, to, weight));
    }

    /// Set the heuristic estimate returned for `vertex`, whatever the goal.
    #[must_use]
    pub fn with_estimate(mut self, vertex: V, estimate: f64) -> Self {
        self.estimates.insert(vertex, estimate);
        self
    }

    /// Every vertex that appears as an edge endpoint.
    #[must_use]
    pub fn vertices(&self) -> HashSet<V> {
        self.edges
            .values()
            .flatten()
            .flat_map(|edge| [edge.from().clone(), edge.to().clone()])
            .collect()
    }
}

impl<V> AStarGraph<V> for MemoryGraph<V>
where
    V: Clone + Eq + Hash,
{
    fn neighbors(&self, vertex: &V) -> Vec<WeightedEdge<V>> {
        self.edges.get(vertex).cloned().unwrap_or_default()
    }

    fn estimated_distance_to_goal(&self, vertex: &V, _goal: &V) -> f64 {
        self.estimates.get(vertex).copied().unwrap_or(0.0)
    }
}

/// Shortest distance from `start` to `goal` by exhaustive relaxation.
///
/// Edges are relaxed until no distance improves, with no priority ordering,
/// so the answer is independent of any heap. Returns `None` when the goal is
/// unreachable. Intended for small graphs with non-negative weights.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "reference distances sum floating-point edge weights"
)]
pub fn brute_force_distance<V, G>(graph: &G, start: &V, goal: &V) -> Option<f64>
where
    V: Clone + Eq + Hash,
    G: AStarGraph<V>,
{
    let mut distances: HashMap<V, f64> = HashMap::from([(start.clone(), 0.0)]);
    let mut changed = true;
    while changed {
        changed = false;
        let snapshot: Vec<(V, f64)> = distances
            .iter()
            .map(|(vertex, distance)| (vertex.clone(), *distance))
            .collect();
        for (vertex, distance) in snapshot {
            for edge in graph.neighbors(&vertex) {
                let candidate = distance + edge.weight();
                let (to, _) = edge.into_target();
                let improves = distances
                    .get(&to)
                    .is_none_or(|known| candidate < *known);
                if improves {
                    distances.insert(to, candidate);
                    changed = true;
                }
            }
        }
    }
    distances.get(goal).copied()
}

/// Count the vertices reachable from `start`, including `start` itself.
#[must_use]
pub fn reachable_count<V, G>(graph: &G, start: &V) -> usize
where
    V: Clone + Eq + Hash,
    G: AStarGraph<V>,
{
    let mut seen: HashSet<V> = HashSet::from([start.clone()]);
    let mut pending: VecDeque<V> = VecDeque::from([start.clone()]);
    while let Some(vertex) = pending.pop_front() {
        for edge in graph.neighbors(&vertex) {
            let (to, _) = edge.into_target();
            if seen.insert(to.clone()) {
                pending.push_back(to);
            }
        }
    }
    seen.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn brute_force_prefers_cheaper_detour() {
        let graph = MemoryGraph::with_edges([('a', 'b', 1.0), ('b', 'd', 1.0), ('a', 'd', 5.0)]);
        assert_eq!(brute_force_distance(&graph, &'a', &'d'), Some(2.0));
        assert_eq!(brute_force_distance(&graph, &'d', &'a'), None);
    }

    #[rstest]
    fn reachable_count_includes_start() {
        let graph = MemoryGraph::with_edges([(1, 2, 1.0), (2, 3, 1.0), (4, 1, 1.0)]);
        assert_eq!(reachable_count(&graph, &1), 3);
        assert_eq!(reachable_count(&graph, &3), 1);
        assert_eq!(graph.vertices().len(), 4);
    }

    #[rstest]
    fn estimates_default_to_zero() {
        let graph = MemoryGraph::with_edges([(1, 2, 1.0)]).with_estimate(1, 0.5);
        assert!((graph.estimated_distance_to_goal(&1, &2) - 0.5).abs() < f64::EPSILON);
        assert!(graph.estimated_distance_to_goal(&2, &2).abs() < f64::EPSILON);
    }
}
