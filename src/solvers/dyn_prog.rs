//! Dynamic-programming solver.
//!
//! The best path ending at an open cell `(i, j)` is the better of
//! - the best path ending at `(i - 1, j)` extended by a step down, and
//! - the best path ending at `(i, j - 1)` extended by a step right.
//!
//! Filling a table of these paths in row-major order therefore visits every
//! dependency before it is needed. The answer is the richest entry of the
//! last row. The table has `rows × columns` entries, but each entry owns
//! its full step list of length `i + j`, so time and memory grow as
//! `O(rows × columns × (rows + columns))`.
//!
//! Cells that are blocked, or open but cut off from the start by rocks, have
//! no entry. Every stored path really ends at its own cell, so both
//! candidates for a cell always have the same number of steps and the
//! selection below always keeps the one with more gold.

use crate::grid::Grid;
use crate::path::{Path, Step};
use crate::traits::GnomesSolver;

/// Table-filling solver.
#[derive(Debug, Clone, Copy, Default)]
pub struct DynamicProgramming;

impl DynamicProgramming {
    /// Fill the table of best paths per cell.
    pub fn fill_table<'g>(&self, grid: &'g Grid) -> BestPathTable<'g> {
        fill_table(grid)
    }
}

impl GnomesSolver for DynamicProgramming {
    fn name(&self) -> &'static str {
        "dynamic_programming"
    }

    fn solve<'g>(&self, grid: &'g Grid) -> Path<'g> {
        solve_dynamic_programming(grid)
    }
}

/// Best known path into every cell of a grid.
#[derive(Debug, Clone)]
pub struct BestPathTable<'g> {
    grid: &'g Grid,
    entries: Vec<Vec<Option<Path<'g>>>>,
}

impl<'g> BestPathTable<'g> {
    /// Best path ending at `(row, col)`; `None` if the cell is blocked,
    /// unreachable or outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<&Path<'g>> {
        self.entries.get(row)?.get(col)?.as_ref()
    }

    /// Entries of the last row, left to right.
    pub fn last_row(&self) -> &[Option<Path<'g>>] {
        self.entries.last().map_or(&[][..], Vec::as_slice)
    }

    /// The richest path ending in the last row, or the trivial path when
    /// none collects more gold than the start cell alone.
    pub fn into_best(self) -> Path<'g> {
        let mut best = Path::new(self.grid);
        let mut entries = self.entries;
        let last = entries.pop().unwrap_or_default();
        for path in last.into_iter().flatten() {
            if path.total_gold() > best.total_gold() {
                best = path;
            }
        }
        best
    }
}

/// Solve `grid` by filling the per-cell table.
pub fn solve_dynamic_programming(grid: &Grid) -> Path<'_> {
    #[cfg(feature = "tracing")]
    let span = tracing::info_span!(
        "dynamic_programming",
        rows = grid.rows(),
        columns = grid.columns()
    );
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let best = fill_table(grid).into_best();

    #[cfg(feature = "tracing")]
    tracing::debug!(gold = best.total_gold(), steps = best.step_count(), "dynamic programming done");
    best
}

fn fill_table(grid: &Grid) -> BestPathTable<'_> {
    let rows = grid.rows();
    let columns = grid.columns();
    let mut entries: Vec<Vec<Option<Path<'_>>>> = vec![vec![None; columns]; rows];
    entries[0][0] = Some(Path::new(grid));

    for i in 0..rows {
        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("fill_row", row = i);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        for j in 0..columns {
            if (i, j) == (0, 0) || !grid.may_step(i, j) {
                continue;
            }
            let from_above = if i > 0 && grid.may_step(i - 1, j) {
                entries[i - 1][j].as_ref().and_then(|p| p.branch(Step::Down))
            } else {
                None
            };
            let from_left = if j > 0 && grid.may_step(i, j - 1) {
                entries[i][j - 1].as_ref().and_then(|p| p.branch(Step::Right))
            } else {
                None
            };
            entries[i][j] = match (from_above, from_left) {
                (Some(above), Some(left)) => Some(prefer(above, left)),
                (above, left) => above.or(left),
            };
        }
    }

    BestPathTable { grid, entries }
}

/// Pick between the two candidates for a cell.
///
/// Order: above if it has at least as much gold and that gold is positive;
/// left if it has strictly more gold; then the longer path; then above.
fn prefer<'g>(above: Path<'g>, left: Path<'g>) -> Path<'g> {
    let (gold_above, gold_left) = (above.total_gold(), left.total_gold());
    if gold_above >= gold_left && gold_above > 0 {
        above
    } else if gold_above < gold_left {
        left
    } else if above.step_count() < left.step_count() {
        left
    } else {
        above
    }
}
