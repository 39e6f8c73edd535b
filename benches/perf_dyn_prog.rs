//! Benchmark: dynamic programming on large random grids.
//!
//! Run with:
//! `cargo bench --bench perf_dyn_prog`
//!
//! The table holds one path per cell, so memory grows faster than the cell
//! count; the RSS delta is printed to stderr for each run.

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use greedy_gnomes::solve_dynamic_programming;
use greedy_gnomes::utils::{random_grid, RandomGridConfig};
use rand::{rngs::StdRng, SeedableRng};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

fn rss_kib() -> u64 {
    let mut sys = System::new();
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    match get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        Some(p) => p.memory() / 1024,
        None => 0,
    }
}

fn bench_dyn_prog(c: &mut Criterion) {
    let mut group = c.benchmark_group("dyn_prog_square");
    group.sample_size(20);
    for &side in &[32usize, 64, 128, 256] {
        group.bench_function(format!("side_{side}"), |b| {
            b.iter_batched(
                || {
                    let mut rng = StdRng::seed_from_u64(42);
                    random_grid(&mut rng, side, side, &RandomGridConfig::default())
                        .expect("non-empty grid")
                },
                |grid| {
                    let before = rss_kib();
                    let best = solve_dynamic_programming(&grid);
                    let after = rss_kib();
                    criterion::black_box(best.total_gold());
                    eprintln!(
                        "RSS KiB delta (dyn_prog {side}x{side}): {}",
                        after.saturating_sub(before)
                    );
                },
                BatchSize::PerIteration,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_dyn_prog);
criterion_main!(benches);
