//! Facade crate for the Waymark route-finding engine.
//!
//! This crate re-exports the core graph, queue, and solver types and exposes
//! the A\* solver behind the `solver-astar` feature flag.

#![forbid(unsafe_code)]

pub use waymark_core::{
    AStarGraph, Diagnostics, MinHeap, QueueError, ShortestPathSolver, Solution, SolveError,
    SolveRequest, SolverOutcome, StreetGraph, StreetGraphError, WeightedEdge, route_segments,
};

#[cfg(feature = "solver-astar")]
pub use waymark_solver_astar::{AStarSolver, AStarSolverConfig, solve};
