//! Benchmark support utilities for the A\* solver.
//!
//! Builds deterministic street grids with jittered intersections and picks
//! reproducible start and goal pairs from a seeded RNG.

use geo::Point;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use waymark_core::{StreetGraph, StreetGraphError};

/// Seed for deterministic random number generation in benchmarks.
pub const BENCHMARK_SEED: u64 = 42;

/// South-west corner of the generated grid, near downtown Berkeley.
const ORIGIN: (f64, f64) = (-122.27, 37.86);

/// Block spacing in degrees (roughly 100 m).
const BLOCK: f64 = 0.001;

/// Maximum jitter applied to each intersection, as a fraction of a block.
const JITTER: f64 = 0.3;

/// Build a `side` by `side` street grid with jittered intersections.
///
/// Every row and column becomes a two-way way. Node identifiers run
/// row-major from zero.
///
/// # Errors
///
/// Propagates [`StreetGraphError`] from way construction; a grid with
/// `side < 2` has ways too short to add.
pub fn jittered_street_grid(side: u64, seed: u64) -> Result<StreetGraph, StreetGraphError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut graph = StreetGraph::new();

    for row in 0..side {
        for column in 0..side {
            let dx: f64 = rng.gen_range(-JITTER..JITTER);
            let dy: f64 = rng.gen_range(-JITTER..JITTER);

            #[expect(
                clippy::float_arithmetic,
                clippy::cast_precision_loss,
                clippy::as_conversions,
                reason = "Grid coordinates are small and offset from the origin"
            )]
            let location = Point::new(
                ORIGIN.0 + (column as f64 + dx) * BLOCK,
                ORIGIN.1 + (row as f64 + dy) * BLOCK,
            );
            graph.add_node(row * side + column, location);
        }
    }

    for line in 0..side {
        let row: Vec<u64> = (0..side).map(|column| line * side + column).collect();
        let column: Vec<u64> = (0..side).map(|row| row * side + line).collect();
        graph.add_way(&row)?;
        graph.add_way(&column)?;
    }

    Ok(graph)
}

/// Draw `count` reproducible start and goal pairs among `node_count` nodes.
#[must_use]
pub fn route_pairs(node_count: u64, count: usize, seed: u64) -> Vec<(u64, u64)> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| (rng.gen_range(0..node_count), rng.gen_range(0..node_count)))
        .collect()
}
