use crate::error::GnomesError;
use crate::grid::{Cell, Grid};

/// Chained construction of a [`Grid`].
///
/// Every cell starts open with no gold. Edits are applied in order, so a
/// later edit of the same cell wins.
///
/// ```
/// use greedy_gnomes::{Cell, GridBuilder};
///
/// let grid = GridBuilder::new(2, 3)
///     .with_row(0, [1, 2, 3])
///     .with_blocked(1, 1)
///     .build()
///     .unwrap();
/// assert_eq!(grid.cell(1, 1), Some(Cell::Blocked));
/// assert_eq!(grid.reward(0, 2), 3);
/// ```
pub struct GridBuilder {
    rows: usize,
    columns: usize,
    edits: Vec<(usize, usize, Cell)>,
}

impl GridBuilder {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            edits: Vec::new(),
        }
    }

    pub fn with_cell(mut self, row: usize, column: usize, cell: Cell) -> Self {
        self.edits.push((row, column, cell));
        self
    }

    pub fn with_reward(self, row: usize, column: usize, gold: u32) -> Self {
        self.with_cell(row, column, Cell::Open(gold))
    }

    pub fn with_blocked(self, row: usize, column: usize) -> Self {
        self.with_cell(row, column, Cell::Blocked)
    }

    /// Set the rewards of a whole row, starting at column 0.
    pub fn with_row<I>(mut self, row: usize, rewards: I) -> Self
    where
        I: IntoIterator<Item = u32>,
    {
        for (column, gold) in rewards.into_iter().enumerate() {
            self.edits.push((row, column, Cell::Open(gold)));
        }
        self
    }

    /// Freeze the grid.
    ///
    /// # Errors
    /// Fails on zero dimensions, on an edit outside the grid, or when the
    /// start cell ends up blocked.
    pub fn build(self) -> Result<Grid, GnomesError> {
        if self.rows == 0 || self.columns == 0 {
            return Err(GnomesError::EmptyGrid {
                rows: self.rows,
                columns: self.columns,
            });
        }
        let mut cells = vec![Cell::default(); self.rows * self.columns];
        for (row, column, cell) in self.edits {
            if row >= self.rows || column >= self.columns {
                return Err(GnomesError::CellOutOfBounds {
                    row,
                    column,
                    rows: self.rows,
                    columns: self.columns,
                });
            }
            cells[row * self.columns + column] = cell;
        }
        Grid::from_cells(self.rows, self.columns, cells)
    }
}
