//! The two alternating orientations of the reflected-triangle tiling.

use crate::cell::Cell;

/// Neighbour offsets `(dr, dc)` of an apex-down vertex, in wiring order.
pub const APEX_DOWN_OFFSETS: [(i32, i32); 3] = [
    (1, 0),   // below
    (-1, -1), // upper left
    (-1, 1),  // upper right
];

/// Neighbour offsets `(dr, dc)` of an apex-up vertex, in wiring order.
pub const APEX_UP_OFFSETS: [(i32, i32); 3] = [
    (-1, 0), // above
    (1, 1),  // lower right
    (1, -1), // lower left
];

/// Which of the two neighbour rings a vertex uses.
///
/// Apex-up and apex-down vertices alternate across every edge: each ring is
/// the point reflection of the other, so an apex-up vertex's neighbours are
/// all apex-down and vice versa.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Neighbours above, lower right and lower left.
    ApexUp,
    /// Neighbours below, upper left and upper right.
    ApexDown,
}

impl Orientation {
    /// Decide the orientation of the vertex at `centre`.
    ///
    /// If any cell of the apex-down ring is occupied, the vertex is apex-down.
    /// Otherwise it is apex-up. A vertex with nothing placed around it (only
    /// ever the root) therefore starts apex-up; that choice fixes the
    /// handedness of the whole tiling.
    ///
    /// # Examples
    ///
    /// ```
    /// use trilat_space::{Cell, Orientation};
    ///
    /// let up = Orientation::classify(Cell::ORIGIN, |_| false);
    /// assert_eq!(up, Orientation::ApexUp);
    ///
    /// let below = Cell::new(1, 0);
    /// let down = Orientation::classify(Cell::ORIGIN, |c| c == below);
    /// assert_eq!(down, Orientation::ApexDown);
    /// ```
    pub fn classify(centre: Cell, is_occupied: impl Fn(Cell) -> bool) -> Self {
        let down_ring_populated = APEX_DOWN_OFFSETS
            .iter()
            .any(|&(dr, dc)| is_occupied(centre.offset(dr, dc)));
        if down_ring_populated {
            Self::ApexDown
        } else {
            Self::ApexUp
        }
    }

    /// Neighbour offsets in wiring order.
    pub fn offsets(self) -> [(i32, i32); 3] {
        match self {
            Self::ApexUp => APEX_UP_OFFSETS,
            Self::ApexDown => APEX_DOWN_OFFSETS,
        }
    }

    /// The three neighbour cells of a vertex at `centre`, in wiring order.
    pub fn neighbour_cells(self, centre: Cell) -> [Cell; 3] {
        self.offsets().map(|(dr, dc)| centre.offset(dr, dc))
    }

    /// The orientation of every neighbour.
    pub fn flipped(self) -> Self {
        match self {
            Self::ApexUp => Self::ApexDown,
            Self::ApexDown => Self::ApexUp,
        }
    }
}
