//! Assorted helpers: random grid generation.

use rand::Rng;

use crate::error::GnomesError;
use crate::grid::{Cell, Grid};

/// Parameters for [`random_grid`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomGridConfig {
    /// Probability that a cell other than the start is blocked, in `[0, 1]`.
    pub blocked_ratio: f64,
    /// Open cells get a reward drawn uniformly from `0..=max_reward`.
    pub max_reward: u32,
}

impl Default for RandomGridConfig {
    fn default() -> Self {
        Self {
            blocked_ratio: 0.2,
            max_reward: 9,
        }
    }
}

/// Draw a random grid. The start cell is always open.
///
/// # Errors
/// Returns [`GnomesError::EmptyGrid`] if either dimension is zero.
///
/// # Panics
/// Panics if `config.blocked_ratio` is outside `[0, 1]`.
pub fn random_grid<R: Rng + ?Sized>(
    rng: &mut R,
    rows: usize,
    columns: usize,
    config: &RandomGridConfig,
) -> Result<Grid, GnomesError> {
    if rows == 0 || columns == 0 {
        return Err(GnomesError::EmptyGrid { rows, columns });
    }
    let cells = (0..rows * columns)
        .map(|idx| {
            if idx > 0 && rng.gen_bool(config.blocked_ratio) {
                Cell::Blocked
            } else {
                Cell::Open(rng.gen_range(0..=config.max_reward))
            }
        })
        .collect();
    Grid::from_cells(rows, columns, cells)
}
