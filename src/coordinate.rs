//! Grid positions.

use core::fmt;

/// Offsets of the 3×3 block centred on a cell, the cell itself included.
const NEIGHBOURHOOD: [(i32, i32); 9] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 0),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A 0-based (row, column) position on a board.
///
/// Components are signed so that neighbour offsets and unchecked user input
/// can be represented; whether a coordinate lies on a board is decided by
/// [`Board::is_out_of_bounds`](crate::Board::is_out_of_bounds).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    row: i32,
    col: i32,
}

impl Coordinate {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub fn row(&self) -> i32 {
        self.row
    }

    pub fn col(&self) -> i32 {
        self.col
    }

    /// Coordinate shifted by (`d_row`, `d_col`), saturating at the `i32`
    /// limits. Saturated cells are off every board.
    pub fn offset(&self, d_row: i32, d_col: i32) -> Self {
        Self::new(self.row.saturating_add(d_row), self.col.saturating_add(d_col))
    }

    /// King-move distance: the larger of the row and column differences.
    pub fn chebyshev_distance(&self, other: &Coordinate) -> u32 {
        let dr = self.row.abs_diff(other.row);
        let dc = self.col.abs_diff(other.col);
        dr.max(dc)
    }

    /// The 3×3 block around this cell, including the cell. Cells may lie
    /// off the board; callers filter with a bounds check.
    pub fn neighbourhood(self) -> impl Iterator<Item = Coordinate> {
        NEIGHBOURHOOD
            .iter()
            .map(move |&(dr, dc)| self.offset(dr, dc))
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

/// Formats as 1-based "row col", the way players type moves.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.row + 1, self.col + 1)
    }
}
