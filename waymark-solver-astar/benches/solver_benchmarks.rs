//! Criterion benchmarks for the A\* solver.
//!
//! Measures solve time on street grids of increasing size (20, 40, 80 blocks
//! square) to track performance and detect regressions in the search loop
//! and the frontier.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package waymark-solver-astar
//! ```

// Criterion macros generate code that triggers missing_docs warnings.
#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use std::time::Duration;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use waymark_core::{ShortestPathSolver, SolveRequest};
use waymark_solver_astar::{AStarSolver, AStarSolverConfig};

mod bench_support;

use bench_support::{BENCHMARK_SEED, jittered_street_grid, route_pairs};

/// Grid sides to benchmark.
const GRID_SIDES: &[u64] = &[20, 40, 80];

/// Routes solved per benchmark iteration.
const ROUTES_PER_ITERATION: usize = 16;

/// Budget large enough that no benchmark route times out.
const BUDGET: Duration = Duration::from_secs(60);

/// Benchmark corner-to-corner routes, the worst case for a grid.
fn bench_corner_to_corner(c: &mut Criterion) {
    let mut group = c.benchmark_group("corner_to_corner");

    for &side in GRID_SIDES {
        let Ok(graph) = jittered_street_grid(side, BENCHMARK_SEED) else {
            continue;
        };
        let solver = AStarSolver::new(&graph);
        let request = SolveRequest::new(0, side * side - 1, BUDGET);

        group.throughput(Throughput::Elements(side * side));
        group.bench_with_input(BenchmarkId::new("side", side), &side, |b, _| {
            b.iter(|| {
                #[expect(
                    clippy::let_underscore_must_use,
                    reason = "Benchmarking solve performance, result is intentionally discarded"
                )]
                let _ = solver.solve(&request);
            });
        });
    }

    group.finish();
}

/// Benchmark batches of random routes with and without reopening.
fn bench_random_routes(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_routes");

    for &side in GRID_SIDES {
        let Ok(graph) = jittered_street_grid(side, BENCHMARK_SEED) else {
            continue;
        };
        let requests: Vec<SolveRequest<u64>> =
            route_pairs(side * side, ROUTES_PER_ITERATION, BENCHMARK_SEED)
                .into_iter()
                .map(|(start, goal)| SolveRequest::new(start, goal, BUDGET))
                .collect();

        for reopen in [true, false] {
            let config = AStarSolverConfig::default().with_reopen_expanded(reopen);
            let solver = AStarSolver::with_config(&graph, config);
            let label = if reopen { "reopen" } else { "no_reopen" };

            group.bench_with_input(BenchmarkId::new(label, side), &side, |b, _| {
                b.iter(|| {
                    for request in &requests {
                        #[expect(
                            clippy::let_underscore_must_use,
                            reason = "Benchmarking solve performance, result is intentionally discarded"
                        )]
                        let _ = solver.solve(request);
                    }
                });
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_corner_to_corner, bench_random_routes);
criterion_main!(benches);
