//! Rectangular extent of the placement grid.

use crate::cell::Cell;

/// Rows and columns added by a single growth pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Growth {
    /// Rows inserted above the previous top row.
    pub rows_above: u32,
    /// Rows appended below the previous bottom row.
    pub rows_below: u32,
    /// Columns inserted left of the previous first column.
    pub cols_left: u32,
    /// Columns appended right of the previous last column.
    pub cols_right: u32,
}

impl Growth {
    /// Total rows inserted.
    pub fn rows(&self) -> u32 {
        self.rows_above + self.rows_below
    }

    /// Total columns inserted.
    pub fn cols(&self) -> u32 {
        self.cols_left + self.cols_right
    }

    /// Returns `true` if nothing was inserted.
    pub fn is_empty(&self) -> bool {
        self.rows() == 0 && self.cols() == 0
    }
}

/// Inclusive row/column ranges covered by the grid.
///
/// Bounds only ever widen. An empty row or column at a boundary is
/// "inserted" by moving the corresponding bound outward by one.
///
/// # Examples
///
/// ```
/// use trilat_space::{Cell, GridBounds};
///
/// let mut b = GridBounds::around(Cell::ORIGIN);
/// assert_eq!((b.rows(), b.cols()), (1, 1));
///
/// let growth = b.grow_to_margin(Cell::ORIGIN);
/// assert_eq!((growth.rows(), growth.cols()), (2, 2));
/// assert_eq!(b.cell_count(), 9);
///
/// // Already has a margin: nothing to do.
/// assert!(b.grow_to_margin(Cell::ORIGIN).is_empty());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridBounds {
    min_row: i32,
    max_row: i32,
    min_col: i32,
    max_col: i32,
}

impl GridBounds {
    /// Bounds covering exactly one cell.
    pub fn around(cell: Cell) -> Self {
        Self {
            min_row: cell.row,
            max_row: cell.row,
            min_col: cell.col,
            max_col: cell.col,
        }
    }

    /// Top-left corner.
    pub fn min(&self) -> Cell {
        Cell::new(self.min_row, self.min_col)
    }

    /// Bottom-right corner.
    pub fn max(&self) -> Cell {
        Cell::new(self.max_row, self.max_col)
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        (self.max_row - self.min_row) as usize + 1
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        (self.max_col - self.min_col) as usize + 1
    }

    /// Number of cells in the rectangle, occupied or not.
    pub fn cell_count(&self) -> usize {
        self.rows() * self.cols()
    }

    /// Returns `true` if `cell` lies inside the rectangle.
    pub fn contains(&self, cell: Cell) -> bool {
        (self.min_row..=self.max_row).contains(&cell.row)
            && (self.min_col..=self.max_col).contains(&cell.col)
    }

    /// Widen until `centre` has at least one cell of margin on every side.
    ///
    /// Inserts one row or column at a time and re-checks after each, so the
    /// returned [`Growth`] counts individual insertions.
    pub fn grow_to_margin(&mut self, centre: Cell) -> Growth {
        let mut growth = Growth::default();
        while centre.row - 1 < self.min_row {
            self.min_row -= 1;
            growth.rows_above += 1;
        }
        while centre.row + 1 > self.max_row {
            self.max_row += 1;
            growth.rows_below += 1;
        }
        while centre.col - 1 < self.min_col {
            self.min_col -= 1;
            growth.cols_left += 1;
        }
        while centre.col + 1 > self.max_col {
            self.max_col += 1;
            growth.cols_right += 1;
        }
        growth
    }
}
