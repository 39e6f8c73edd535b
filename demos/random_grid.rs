//! Example: generate a random grid and solve it with dynamic programming,
//! cross-checking with exhaustive search when the grid is small enough.
//!
//! Run with:
//! `cargo run --example random_grid -- <rows> <columns> [seed]`

use greedy_gnomes::utils::{random_grid, RandomGridConfig};
use greedy_gnomes::{solve_dynamic_programming, Exhaustive};
use rand::{rngs::StdRng, SeedableRng};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let parse = |idx: usize, default: u64| -> u64 {
        args.get(idx)
            .and_then(|s| s.parse().ok())
            .unwrap_or(default)
    };
    let rows = parse(0, 6) as usize;
    let columns = parse(1, 8) as usize;
    let seed = parse(2, 2024);

    let mut rng = StdRng::seed_from_u64(seed);
    let grid = match random_grid(&mut rng, rows, columns, &RandomGridConfig::default()) {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("cannot build grid: {err}");
            std::process::exit(2);
        }
    };
    println!("{grid}");
    println!();

    let best = solve_dynamic_programming(&grid);
    println!(
        "dynamic programming: gold={} steps={} end=({}, {})",
        best.total_gold(),
        best.step_count(),
        best.final_row(),
        best.final_column()
    );

    // 2^20 sequences is about where exhaustive search stops being instant.
    if grid.max_steps() > 21 {
        println!("exhaustive search skipped: {} steps is too many to enumerate here", grid.max_steps());
        return;
    }
    match Exhaustive.try_solve(&grid) {
        Ok(reference) => println!(
            "exhaustive search:   gold={} ({})",
            reference.total_gold(),
            if reference.total_gold() == best.total_gold() {
                "agrees"
            } else {
                "DISAGREES"
            }
        ),
        Err(err) => println!("exhaustive search skipped: {err}"),
    }
}
