//! Example: solve a small hand-built grid with both algorithms.
//!
//! Run with:
//! `cargo run --example solve`

use greedy_gnomes::{DynamicProgramming, Exhaustive, GnomesSolver, GridBuilder};

fn main() {
    let grid = match GridBuilder::new(4, 5)
        .with_row(0, [0, 3, 0, 1, 2])
        .with_row(1, [4, 0, 0, 6, 0])
        .with_row(2, [0, 2, 0, 0, 9])
        .with_row(3, [1, 0, 5, 0, 0])
        .with_blocked(1, 1)
        .with_blocked(2, 2)
        .with_blocked(3, 1)
        .build()
    {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("bad grid: {err}");
            std::process::exit(1);
        }
    };

    println!("Grid ({} x {}):", grid.rows(), grid.columns());
    println!("{grid}");
    println!();

    let solvers: [&dyn GnomesSolver; 2] = [&Exhaustive, &DynamicProgramming];
    for solver in solvers {
        let path = solver.solve(&grid);
        let steps: Vec<String> = path.steps().iter().map(ToString::to_string).collect();
        println!("{}:", solver.name());
        println!("  gold:  {}", path.total_gold());
        println!("  ends:  ({}, {})", path.final_row(), path.final_column());
        println!("  steps: {}", steps.join(", "));
    }
}
