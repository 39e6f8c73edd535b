//! Benchmark: exhaustive search against dynamic programming on the same
//! small grids, to show where the exponential curve takes off.
//!
//! Run with:
//! `cargo bench --bench exhaustive_vs_dyn_prog`
//! (add `--features parallel` for the rayon-backed enumeration)

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use greedy_gnomes::utils::{random_grid, RandomGridConfig};
use greedy_gnomes::{DynamicProgramming, Exhaustive, GnomesSolver, Grid};
use rand::{rngs::StdRng, SeedableRng};

fn grids() -> Vec<(usize, Grid)> {
    let config = RandomGridConfig {
        blocked_ratio: 0.1,
        max_reward: 9,
    };
    [3usize, 5, 7, 9]
        .iter()
        .map(|&side| {
            let mut rng = StdRng::seed_from_u64(side as u64);
            let grid = random_grid(&mut rng, side, side, &config).expect("non-empty grid");
            (side, grid)
        })
        .collect()
}

fn bench_solvers(c: &mut Criterion) {
    let mut group = c.benchmark_group("exhaustive_vs_dyn_prog");
    let solvers: [&dyn GnomesSolver; 2] = [&Exhaustive, &DynamicProgramming];
    for (side, grid) in grids() {
        for solver in solvers {
            group.bench_with_input(BenchmarkId::new(solver.name(), side), &grid, |b, grid| {
                b.iter(|| black_box(solver.solve(grid).total_gold()))
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_solvers);
criterion_main!(benches);
