#![cfg(feature = "parallel")]

use greedy_gnomes::utils::{random_grid, RandomGridConfig};
use greedy_gnomes::{solve_exhaustive, Grid, Path, Step};
use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

/// Serial enumeration with an explicit counter, first strict improvement wins.
fn serial_reference(grid: &Grid) -> Path<'_> {
    let target = grid.rows() - 1;
    let mut best = Path::new(grid);
    for len in 1..grid.max_steps() {
        for index in 0..(1u64 << len) {
            let mut path = Path::new(grid);
            for bit in 0..len {
                let step = if (index >> bit) & 1 == 0 {
                    Step::Right
                } else {
                    Step::Down
                };
                if path.is_step_valid(step) {
                    path.add_step(step);
                }
            }
            if path.final_row() == target && path.total_gold() > best.total_gold() {
                best = path;
            }
        }
    }
    best
}

#[test]
fn matches_serial_order_across_chunks() {
    // 8x8 needs 2^14 sequences at the longest length, several chunks' worth.
    let config = RandomGridConfig {
        blocked_ratio: 0.15,
        max_reward: 3,
    };
    for seed in 0..4 {
        let grid = random_grid(&mut StdRng::seed_from_u64(seed), 8, 8, &config).unwrap();
        assert_eq!(solve_exhaustive(&grid), serial_reference(&grid));
    }
}

proptest! {
    #[test]
    fn matches_serial_on_small_grids(
        seed in any::<u64>(),
        rows in 1usize..=5,
        columns in 1usize..=5,
    ) {
        let grid = random_grid(
            &mut StdRng::seed_from_u64(seed),
            rows,
            columns,
            &RandomGridConfig::default(),
        )
        .unwrap();
        prop_assert_eq!(solve_exhaustive(&grid), serial_reference(&grid));
    }
}
