//! A\* shortest-path solver for Waymark.
//!
//! This crate provides [`AStarSolver`], an implementation of the
//! [`ShortestPathSolver`](waymark_core::ShortestPathSolver) trait for any graph
//! exposing the [`AStarGraph`](waymark_core::AStarGraph) capability. Each solve
//! expands vertices in order of known distance plus heuristic estimate, using
//! the addressable [`MinHeap`](waymark_core::MinHeap) so that cheaper paths to
//! queued vertices lower their priority in place.
//!
//! A solve always ends in one of three outcomes: the goal is reached, the
//! reachable graph is exhausted, or the wall-clock budget runs out. The budget
//! is polled once per expansion; there is no other cancellation.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod solver;

pub use solver::{AStarSolver, AStarSolverConfig, solve};
