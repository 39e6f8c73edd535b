//! Common interface of the path-search algorithms.
//!
//! Both solvers answer the same question: which monotone path from `(0, 0)`
//! into the last row collects the most gold? Implementing [`GnomesSolver`]
//! lets drivers, benchmarks and tests run them interchangeably.

use crate::grid::Grid;
use crate::path::Path;

/// A greedy-gnomes solver.
///
/// Contract for [`solve`](Self::solve):
/// - the returned path belongs to `grid` and only contains valid steps,
/// - if some path reaches the last row with more gold than the start cell
///   alone, the result ends in the last row and no such path collects more,
/// - otherwise the result is the trivial path `Path::new(grid)`,
/// - the grid is never modified and repeated calls give the same path.
pub trait GnomesSolver {
    /// Short identifier, used in logs and reports.
    fn name(&self) -> &'static str;

    /// Best path for `grid`.
    ///
    /// # Panics
    /// Implementations panic when `grid` violates their preconditions (for
    /// example a grid too large for exhaustive enumeration).
    fn solve<'g>(&self, grid: &'g Grid) -> Path<'g>;
}
