//! Grid cell coordinates.

use std::fmt;

/// A `(row, col)` position on the placement grid.
///
/// Rows grow downwards and columns grow rightwards. Coordinates are signed
/// so the grid can extend in every direction from the root's origin cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Row index.
    pub row: i32,
    /// Column index.
    pub col: i32,
}

impl Cell {
    /// Where the root is placed.
    pub const ORIGIN: Cell = Cell { row: 0, col: 0 };

    /// Create a cell.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The cell displaced by `(dr, dc)`.
    pub fn offset(self, dr: i32, dc: i32) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_and_display() {
        let c = Cell::ORIGIN.offset(-1, 2);
        assert_eq!(c, Cell::new(-1, 2));
        assert_eq!(c.to_string(), "(-1, 2)");
        assert_eq!(Cell::from((3, -4)), Cell::new(3, -4));
    }

    #[test]
    fn row_major_ordering() {
        assert!(Cell::new(0, 5) < Cell::new(1, -5));
        assert!(Cell::new(1, -5) < Cell::new(1, 0));
    }
}
