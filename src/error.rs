//! Error type for grid construction and checked solver entry points.
//!
//! The solvers themselves treat a malformed grid as a programming error and
//! panic. Everything that can be checked *before* calling them reports a
//! [`GnomesError`] instead.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GnomesError {
    /// A grid needs at least one row and one column.
    #[error("grid must be non-empty, got {rows}x{columns}")]
    EmptyGrid { rows: usize, columns: usize },

    /// Every row must have the same number of cells as the first one.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Paths start at (0, 0), so that cell must be open.
    #[error("start cell (0, 0) is blocked")]
    BlockedStart,

    /// A builder edit addressed a cell outside the grid.
    #[error("cell ({row}, {column}) is outside a {rows}x{columns} grid")]
    CellOutOfBounds {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },

    /// Exhaustive search encodes step sequences as binary choices and is
    /// limited to fewer than 64 of them.
    #[error("grid needs {steps} steps, exhaustive search supports fewer than {limit}")]
    TooManySteps { steps: usize, limit: usize },
}
