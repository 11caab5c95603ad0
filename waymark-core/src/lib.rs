//! Core domain types for the Waymark shortest-path engine.
//!
//! The crate defines the boundaries a solver works against: the
//! [`AStarGraph`] capability callers implement for their own vertex types, the
//! addressable [`MinHeap`] that orders the search frontier, and the request,
//! outcome and solution types every [`ShortestPathSolver`] shares. A concrete
//! geographic graph lives in [`street`].

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod graph;
pub mod queue;
pub mod solver;
pub mod street;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use graph::{AStarGraph, WeightedEdge};
pub use queue::{MinHeap, QueueError};
pub use solver::{
    Diagnostics, ShortestPathSolver, Solution, SolveError, SolveRequest, SolverOutcome,
};
pub use street::{StreetGraph, StreetGraphError, route_segments};
