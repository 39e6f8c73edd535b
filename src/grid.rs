//! The grid the gnomes walk over.
//!
//! A [`Grid`] is an immutable `rows × columns` matrix of [`Cell`]s stored in
//! row-major order. Cells are either blocked (a rock) or open with a
//! non-negative gold reward. Construction validates the shape and the start
//! cell once, so every query afterwards is infallible.

use std::fmt;

use crate::error::GnomesError;

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Impassable.
    Blocked,
    /// Walkable, carrying this much gold.
    Open(u32),
}

impl Cell {
    #[inline]
    pub fn is_open(self) -> bool {
        matches!(self, Cell::Open(_))
    }

    /// Gold collected when stepping onto this cell; zero for blocked cells.
    #[inline]
    pub fn reward(self) -> u32 {
        match self {
            Cell::Open(gold) => gold,
            Cell::Blocked => 0,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Open(0)
    }
}

/// Immutable rectangular map of cells.
///
/// Invariants (checked at construction):
/// - `rows >= 1` and `columns >= 1`,
/// - the start cell `(0, 0)` is open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Build a grid from row vectors.
    ///
    /// # Errors
    /// Returns an error if there are no rows, the first row is empty, rows
    /// differ in length, or the start cell is blocked.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, GnomesError> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        if n_rows == 0 || n_cols == 0 {
            return Err(GnomesError::EmptyGrid {
                rows: n_rows,
                columns: n_cols,
            });
        }

        let mut cells = Vec::with_capacity(n_rows * n_cols);
        for (row, line) in rows.into_iter().enumerate() {
            if line.len() != n_cols {
                return Err(GnomesError::RaggedRow {
                    row,
                    expected: n_cols,
                    found: line.len(),
                });
            }
            cells.extend(line);
        }

        Self::from_cells(n_rows, n_cols, cells)
    }

    /// Build a grid from a flat row-major cell buffer.
    ///
    /// # Errors
    /// Returns an error if either dimension is zero, the buffer length does
    /// not match `rows * columns`, or the start cell is blocked.
    pub fn from_cells(rows: usize, columns: usize, cells: Vec<Cell>) -> Result<Self, GnomesError> {
        if rows == 0 || columns == 0 {
            return Err(GnomesError::EmptyGrid { rows, columns });
        }
        if cells.len() != rows * columns {
            // Report the first row that comes up short (or long).
            let row = (cells.len() / columns).min(rows - 1);
            return Err(GnomesError::RaggedRow {
                row,
                expected: columns,
                found: cells.len().saturating_sub(row * columns),
            });
        }
        if !cells[0].is_open() {
            return Err(GnomesError::BlockedStart);
        }
        Ok(Self {
            rows,
            columns,
            cells,
        })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of cells on the longest monotone path: `rows + columns - 1`.
    ///
    /// A full path from the top-left to the bottom-right corner takes one
    /// step fewer than this.
    #[inline]
    pub fn max_steps(&self) -> usize {
        self.rows + self.columns - 1
    }

    /// Cell at `(row, col)`, or `None` outside the grid.
    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.rows && col < self.columns {
            Some(self.cells[row * self.columns + col])
        } else {
            None
        }
    }

    /// True iff `(row, col)` lies inside the grid and is open.
    #[inline]
    pub fn may_step(&self, row: usize, col: usize) -> bool {
        self.cell(row, col).is_some_and(Cell::is_open)
    }

    /// Gold on `(row, col)`.
    ///
    /// Only meaningful when [`may_step`](Self::may_step) holds; blocked and
    /// out-of-range cells report zero.
    #[inline]
    pub fn reward(&self, row: usize, col: usize) -> u32 {
        self.cell(row, col).map_or(0, Cell::reward)
    }

    /// Cells of one row, left to right.
    ///
    /// # Panics
    /// Panics if `row >= self.rows()`.
    pub fn row(&self, row: usize) -> &[Cell] {
        assert!(row < self.rows, "row {row} out of range");
        let start = row * self.columns;
        &self.cells[start..start + self.columns]
    }
}

impl fmt::Display for Grid {
    /// One line per row; `X` marks a blocked cell, open cells show their gold.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for (col, cell) in self.row(row).iter().enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                match cell {
                    Cell::Blocked => f.write_str("X")?,
                    Cell::Open(gold) => write!(f, "{gold}")?,
                }
            }
            if row + 1 < self.rows {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
