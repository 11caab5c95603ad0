//! The graph capability consumed by informed search.
//!
//! Solvers never own graph data. They ask an [`AStarGraph`] for the outgoing
//! edges of a vertex and for a heuristic estimate of the remaining distance,
//! which lets callers compute neighbours lazily from whatever storage they
//! already have.

/// A directed edge with a non-negative weight.
///
/// Edges are produced on demand by [`AStarGraph::neighbors`] and are not
/// retained by the solver.
///
/// # Examples
/// ```
/// use waymark_core::WeightedEdge;
///
/// let edge = WeightedEdge::new("a", "b", 2.5);
/// assert_eq!(*edge.from(), "a");
/// assert_eq!(*edge.to(), "b");
/// assert_eq!(edge.weight(), 2.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightedEdge<V> {
    from: V,
    to: V,
    weight: f64,
}

impl<V> WeightedEdge<V> {
    /// Construct an edge from `from` to `to` with the given weight.
    #[must_use]
    pub const fn new(from: V, to: V, weight: f64) -> Self {
        Self { from, to, weight }
    }

    /// Source vertex.
    #[must_use]
    pub const fn from(&self) -> &V {
        &self.from
    }

    /// Destination vertex.
    #[must_use]
    pub const fn to(&self) -> &V {
        &self.to
    }

    /// Edge weight.
    #[must_use]
    pub const fn weight(&self) -> f64 {
        self.weight
    }

    /// Consume the edge, returning the destination vertex and weight.
    #[must_use]
    pub fn into_target(self) -> (V, f64) {
        (self.to, self.weight)
    }
}

/// A weighted graph that can be searched with A\*.
///
/// Implementations must be deterministic for a fixed graph: repeated calls to
/// [`neighbors`](Self::neighbors) for the same vertex return the same edges.
///
/// The heuristic must be non-negative. For a solved search to be optimal it
/// must also be admissible (never overestimating the remaining distance), and
/// for re-expanding an already expanded vertex to be sound it must be
/// consistent: `h(u) <= w(u, v) + h(v)` for every edge. Neither property is
/// checked at runtime; great-circle or straight-line distances satisfy both.
///
/// # Examples
///
/// ```rust
/// use waymark_core::{AStarGraph, WeightedEdge};
///
/// struct Line;
///
/// impl AStarGraph<i32> for Line {
///     fn neighbors(&self, vertex: &i32) -> Vec<WeightedEdge<i32>> {
///         vec![WeightedEdge::new(*vertex, vertex + 1, 1.0)]
///     }
///
///     fn estimated_distance_to_goal(&self, vertex: &i32, goal: &i32) -> f64 {
///         f64::from((goal - vertex).abs())
///     }
/// }
///
/// assert_eq!(Line.neighbors(&3).len(), 1);
/// assert_eq!(Line.estimated_distance_to_goal(&3, &5), 2.0);
/// ```
pub trait AStarGraph<V> {
    /// Return the outgoing edges of `vertex`.
    ///
    /// Vertices without outgoing edges, including vertices the graph does not
    /// know about, yield an empty vector.
    fn neighbors(&self, vertex: &V) -> Vec<WeightedEdge<V>>;

    /// Estimate the remaining distance from `vertex` to `goal`.
    fn estimated_distance_to_goal(&self, vertex: &V, goal: &V) -> f64;
}

impl<V, G> AStarGraph<V> for &G
where
    G: AStarGraph<V> + ?Sized,
{
    fn neighbors(&self, vertex: &V) -> Vec<WeightedEdge<V>> {
        (**self).neighbors(vertex)
    }

    fn estimated_distance_to_goal(&self, vertex: &V, goal: &V) -> f64 {
        (**self).estimated_distance_to_goal(vertex, goal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    struct Pair;

    impl AStarGraph<u8> for Pair {
        fn neighbors(&self, vertex: &u8) -> Vec<WeightedEdge<u8>> {
            match vertex {
                0 => vec![WeightedEdge::new(0, 1, 4.0)],
                _ => Vec::new(),
            }
        }

        fn estimated_distance_to_goal(&self, vertex: &u8, goal: &u8) -> f64 {
            if vertex == goal { 0.0 } else { 1.0 }
        }
    }

    #[rstest]
    fn into_target_yields_destination_and_weight() {
        let edge = WeightedEdge::new('a', 'b', 3.0);
        let (to, weight) = edge.into_target();
        assert_eq!(to, 'b');
        assert!((weight - 3.0).abs() < f64::EPSILON);
    }

    #[rstest]
    fn references_delegate_to_the_graph() {
        let graph = &Pair;
        assert_eq!(AStarGraph::neighbors(&graph, &0_u8).len(), 1);
        assert!(AStarGraph::neighbors(&graph, &1_u8).is_empty());
        let estimate = AStarGraph::estimated_distance_to_goal(&graph, &1_u8, &1_u8);
        assert!(estimate.abs() < f64::EPSILON);
    }
}
