//! Street networks with great-circle weights.
//!
//! [`StreetGraph`] stores intersections as WGS84 points (longitude in `x`,
//! latitude in `y`) and connects them with edges weighted by their haversine
//! distance in metres. The same distance, measured straight to the goal,
//! serves as the A\* heuristic: no street between two points is shorter than
//! the great circle joining them, so the estimate is admissible and
//! consistent.

mod error;

use std::collections::HashMap;

use geo::{Distance, Haversine, Line, Point};
use log::warn;

use crate::{AStarGraph, Solution, WeightedEdge};

pub use error::StreetGraphError;

/// In-memory street network keyed by node identifier.
///
/// # Examples
///
/// ```rust
/// use geo::Point;
/// use waymark_core::{AStarGraph, StreetGraph};
///
/// # fn main() -> Result<(), waymark_core::StreetGraphError> {
/// let mut graph = StreetGraph::new();
/// graph.add_node(1, Point::new(-122.2585, 37.8719));
/// graph.add_node(2, Point::new(-122.2590, 37.8725));
/// graph.add_way(&[1, 2])?;
///
/// assert_eq!(graph.neighbors(&1).len(), 1);
/// assert!(graph.estimated_distance_to_goal(&1, &2) > 0.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct StreetGraph {
    locations: HashMap<u64, Point<f64>>,
    adjacency: HashMap<u64, Vec<WeightedEdge<u64>>>,
}

impl StreetGraph {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node, or move an existing one.
    ///
    /// Edges already attached to a moved node keep the weight computed when
    /// they were added.
    pub fn add_node(&mut self, id: u64, location: Point<f64>) {
        if self.locations.insert(id, location).is_some() && self.adjacency.contains_key(&id) {
            warn!("street node {id} moved after edges were attached; edge weights are stale");
        }
    }

    /// Add a directed edge weighted by the great-circle distance between its
    /// endpoints, returning that weight in metres.
    ///
    /// # Errors
    ///
    /// Returns [`StreetGraphError::UnknownNode`] if either endpoint has not
    /// been added.
    pub fn add_edge(&mut self, from: u64, to: u64) -> Result<f64, StreetGraphError> {
        let origin = self.require(from)?;
        let destination = self.require(to)?;
        let weight = Haversine.distance(origin, destination);
        self.adjacency
            .entry(from)
            .or_default()
            .push(WeightedEdge::new(from, to, weight));
        Ok(weight)
    }

    /// Connect consecutive nodes of a way in both directions.
    ///
    /// The way is validated before any edge is added, so a failed call leaves
    /// the graph unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`StreetGraphError::ShortWay`] for fewer than two nodes and
    /// [`StreetGraphError::UnknownNode`] for a node that was never added.
    pub fn add_way(&mut self, nodes: &[u64]) -> Result<(), StreetGraphError> {
        if nodes.len() < 2 {
            return Err(StreetGraphError::ShortWay { count: nodes.len() });
        }
        for &id in nodes {
            self.require(id)?;
        }
        for pair in nodes.windows(2) {
            if let [from, to] = *pair {
                self.add_edge(from, to)?;
                self.add_edge(to, from)?;
            }
        }
        Ok(())
    }

    /// Location of a node.
    #[must_use]
    pub fn location(&self, id: u64) -> Option<Point<f64>> {
        self.locations.get(&id).copied()
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.locations.len()
    }

    /// Number of directed edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    fn require(&self, id: u64) -> Result<Point<f64>, StreetGraphError> {
        self.location(id).ok_or(StreetGraphError::UnknownNode { id })
    }
}

impl AStarGraph<u64> for StreetGraph {
    fn neighbors(&self, vertex: &u64) -> Vec<WeightedEdge<u64>> {
        self.adjacency.get(vertex).cloned().unwrap_or_default()
    }

    /// Great-circle distance in metres, or zero when either node is unknown.
    fn estimated_distance_to_goal(&self, vertex: &u64, goal: &u64) -> f64 {
        match (self.location(*vertex), self.location(*goal)) {
            (Some(here), Some(there)) => Haversine.distance(here, there),
            _ => 0.0,
        }
    }
}

/// Map a solved route to drawable line segments.
///
/// Consecutive path vertices become one [`Line`] each. Vertices without a
/// known location are skipped together with the segments touching them.
/// Unsolved solutions produce no segments.
#[must_use]
pub fn route_segments(graph: &StreetGraph, solution: &Solution<u64>) -> Vec<Line<f64>> {
    solution
        .path()
        .windows(2)
        .filter_map(|pair| match *pair {
            [from, to] => Some(Line::new(graph.location(from)?, graph.location(to)?)),
            _ => None,
        })
        .collect()
}
