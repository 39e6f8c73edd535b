//! Exhaustive search over every step sequence.
//!
//! For each length `a` in `1..grid.max_steps()` we walk through all `2^a`
//! sequences of [`Step`]s, replay each one on a fresh [`Path`] and keep the
//! best path that ends in the last row. Steps that are invalid at the point
//! they are replayed are skipped, so a sequence that runs into a rock or an
//! edge yields a shorter path instead of being thrown away.
//!
//! Sequences are enumerated like a binary counter whose least significant
//! digit is the first step (`Right` = 0, `Down` = 1). Only a strictly better
//! path replaces the current best, so among equal-gold paths the first one in
//! this order wins.
//!
//! Running time is exponential in `rows + columns`. This solver is the
//! reference the dynamic program is checked against.

use crate::error::GnomesError;
use crate::grid::Grid;
use crate::path::{Path, Step};
use crate::traits::GnomesSolver;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Exclusive upper bound on [`Grid::max_steps`] for exhaustive search.
pub const MAX_STEPS_LIMIT: usize = 64;

/// Number of sequences evaluated per rayon task.
#[cfg(feature = "parallel")]
const CHUNK_LEN: u64 = 1 << 12;

/// Brute-force solver.
#[derive(Debug, Clone, Copy, Default)]
pub struct Exhaustive;

impl Exhaustive {
    /// Like [`GnomesSolver::solve`], but reports an oversized grid instead of
    /// panicking.
    ///
    /// # Errors
    /// Returns [`GnomesError::TooManySteps`] if `grid.max_steps()` is not
    /// below [`MAX_STEPS_LIMIT`].
    pub fn try_solve<'g>(&self, grid: &'g Grid) -> Result<Path<'g>, GnomesError> {
        check_exhaustive_fits(grid)?;
        Ok(search(grid))
    }
}

impl GnomesSolver for Exhaustive {
    fn name(&self) -> &'static str {
        "exhaustive"
    }

    fn solve<'g>(&self, grid: &'g Grid) -> Path<'g> {
        solve_exhaustive(grid)
    }
}

/// Check that `grid` is small enough for exhaustive search.
///
/// # Errors
/// Returns [`GnomesError::TooManySteps`] when `rows + columns - 1 >= 64`.
pub fn check_exhaustive_fits(grid: &Grid) -> Result<(), GnomesError> {
    let steps = grid.max_steps();
    if steps < MAX_STEPS_LIMIT {
        Ok(())
    } else {
        Err(GnomesError::TooManySteps {
            steps,
            limit: MAX_STEPS_LIMIT,
        })
    }
}

/// Solve `grid` by trying every step sequence.
///
/// # Panics
/// Panics if `grid.max_steps() >= 64`; use [`Exhaustive::try_solve`] or
/// [`check_exhaustive_fits`] to check first.
pub fn solve_exhaustive(grid: &Grid) -> Path<'_> {
    assert!(
        grid.max_steps() < MAX_STEPS_LIMIT,
        "exhaustive search needs rows + columns - 1 < {MAX_STEPS_LIMIT}, got {}",
        grid.max_steps()
    );
    search(grid)
}

/// Keep `best` unless `candidate` ends in `target_row` with strictly more gold.
#[inline]
fn keep_better<'g>(best: Path<'g>, candidate: Path<'g>, target_row: usize) -> Path<'g> {
    if candidate.final_row() == target_row && candidate.total_gold() > best.total_gold() {
        candidate
    } else {
        best
    }
}

#[cfg(not(feature = "parallel"))]
fn search(grid: &Grid) -> Path<'_> {
    #[cfg(feature = "tracing")]
    let span = tracing::info_span!(
        "exhaustive",
        rows = grid.rows(),
        columns = grid.columns()
    );
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let target_row = grid.rows() - 1;
    let mut best = Path::new(grid);

    for len in 1..grid.max_steps() {
        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("enumerate_length", len);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut seq = StepSequence::starting_at(len, 0);
        loop {
            best = keep_better(best, seq.replay(grid), target_row);
            if !seq.advance() {
                break;
            }
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(gold = best.total_gold(), steps = best.step_count(), "exhaustive done");
    best
}

#[cfg(feature = "parallel")]
fn search(grid: &Grid) -> Path<'_> {
    #[cfg(feature = "tracing")]
    let span = tracing::info_span!(
        "exhaustive_parallel",
        rows = grid.rows(),
        columns = grid.columns()
    );
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let target_row = grid.rows() - 1;

    // Chunks are reduced in enumeration order with the same strict rule as
    // the serial loop, so the first best path still wins.
    let best = (1..grid.max_steps())
        .into_par_iter()
        .flat_map_iter(|len| {
            let total = 1u64 << len;
            (0..total.div_ceil(CHUNK_LEN)).map(move |chunk| {
                let first = chunk * CHUNK_LEN;
                (len, first, CHUNK_LEN.min(total - first))
            })
        })
        .map(|(len, first, count)| {
            let mut best = Path::new(grid);
            let mut seq = StepSequence::starting_at(len, first);
            for _ in 0..count {
                best = keep_better(best, seq.replay(grid), target_row);
                seq.advance();
            }
            best
        })
        .reduce_with(|best, candidate| keep_better(best, candidate, target_row))
        .unwrap_or_else(|| Path::new(grid));

    #[cfg(feature = "tracing")]
    tracing::debug!(gold = best.total_gold(), steps = best.step_count(), "exhaustive done");
    best
}

/// A fixed-length step sequence that counts through all `2^len` variants.
#[derive(Debug, Clone, PartialEq, Eq)]
struct StepSequence {
    steps: Vec<Step>,
}

impl StepSequence {
    /// The `index`-th sequence of length `len`: bit `b` of `index` selects
    /// step `b` (0 = right, 1 = down).
    fn starting_at(len: usize, index: u64) -> Self {
        debug_assert!(len < MAX_STEPS_LIMIT);
        let steps = (0..len)
            .map(|b| {
                if (index >> b) & 1 == 0 {
                    Step::Right
                } else {
                    Step::Down
                }
            })
            .collect();
        Self { steps }
    }

    /// Move to the next sequence. Returns `false` after the last one, leaving
    /// the sequence wrapped around to all `Right`.
    fn advance(&mut self) -> bool {
        for step in &mut self.steps {
            match step {
                Step::Right => {
                    *step = Step::Down;
                    return true;
                }
                Step::Down => *step = Step::Right,
            }
        }
        false
    }

    /// Replay on a fresh path, skipping steps that are invalid when reached.
    fn replay<'g>(&self, grid: &'g Grid) -> Path<'g> {
        let mut path = Path::new(grid);
        for &step in &self.steps {
            if path.is_step_valid(step) {
                path.add_step(step);
            }
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::GridBuilder;

    #[test]
    fn sequence_counts_like_binary_lsb_first() {
        let mut seq = StepSequence::starting_at(2, 0);
        let mut seen = vec![seq.steps.clone()];
        while seq.advance() {
            seen.push(seq.steps.clone());
        }
        use Step::{Down as D, Right as R};
        assert_eq!(seen, vec![vec![R, R], vec![D, R], vec![R, D], vec![D, D]]);
        assert_eq!(seq.steps, vec![R, R]);
    }

    #[test]
    fn starting_at_matches_advancing() {
        let mut seq = StepSequence::starting_at(5, 0);
        for index in 1..32u64 {
            assert!(seq.advance());
            assert_eq!(seq, StepSequence::starting_at(5, index));
        }
        assert!(!seq.advance());
    }

    #[test]
    fn replay_skips_blocked_steps() {
        // 1 X
        // 2 3
        let g = GridBuilder::new(2, 2)
            .with_row(0, [1, 0])
            .with_blocked(0, 1)
            .with_row(1, [2, 3])
            .build()
            .unwrap();
        let seq = StepSequence {
            steps: vec![Step::Right, Step::Down, Step::Right],
        };
        let p = seq.replay(&g);
        assert_eq!(p.steps(), &[Step::Down, Step::Right]);
        assert_eq!(p.total_gold(), 6);
    }

    #[test]
    fn keeps_first_of_equal_paths() {
        // Both routes through a 2x2 grid of ones collect 3 gold; the counter
        // reaches "down, right" (index 1) before "right, down" (index 2).
        let g = GridBuilder::new(2, 2).with_row(0, [1, 1]).with_row(1, [1, 1]).build().unwrap();
        let best = solve_exhaustive(&g);
        assert_eq!(best.total_gold(), 3);
        assert_eq!(best.steps(), &[Step::Down, Step::Right]);
    }

    #[test]
    fn single_cell_grid_is_trivial() {
        let g = GridBuilder::new(1, 1).with_reward(0, 0, 4).build().unwrap();
        let best = solve_exhaustive(&g);
        assert_eq!(best.total_gold(), 4);
        assert_eq!(best.step_count(), 0);
    }

    #[test]
    fn oversized_grid_is_reported() {
        let g = GridBuilder::new(32, 33).build().unwrap();
        assert_eq!(
            Exhaustive.try_solve(&g),
            Err(GnomesError::TooManySteps {
                steps: 64,
                limit: 64
            })
        );
    }

    #[test]
    fn step_limit_is_exclusive() {
        // 63 steps is the largest accepted size; only checked, never solved.
        assert!(check_exhaustive_fits(&GridBuilder::new(32, 32).build().unwrap()).is_ok());
        assert!(check_exhaustive_fits(&GridBuilder::new(1, 63).build().unwrap()).is_ok());
        assert!(check_exhaustive_fits(&GridBuilder::new(1, 64).build().unwrap()).is_err());
        assert!(check_exhaustive_fits(&GridBuilder::new(33, 32).build().unwrap()).is_err());
    }

    #[test]
    fn try_solve_small_grid_matches_solve() {
        let g = GridBuilder::new(3, 4)
            .with_row(0, [1, 0, 2, 0])
            .with_row(1, [0, 3, 0, 1])
            .with_row(2, [2, 0, 0, 4])
            .build()
            .unwrap();
        assert_eq!(Exhaustive.try_solve(&g), Ok(solve_exhaustive(&g)));
    }

    #[test]
    #[should_panic(expected = "exhaustive search needs")]
    fn oversized_grid_panics() {
        let g = GridBuilder::new(40, 40).build().unwrap();
        let _ = solve_exhaustive(&g);
    }
}
