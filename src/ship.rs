//! Ships: a bow, a length and an orientation, with remaining health.

use core::fmt;

use rand::distr::{Distribution, StandardUniform};
use rand::Rng;

use crate::common::{BoardError, PlacementError};
use crate::config::MAX_BOARD_SIZE;
use crate::coordinate::Coordinate;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Cells extend to the right of the bow (column increases).
    Horizontal,
    /// Cells extend below the bow (row increases).
    Vertical,
}

impl Orientation {
    /// (row, col) step from one ship cell to the next.
    fn step(&self) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }
}

/// Fair coin between the two orientations.
impl Distribution<Orientation> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Orientation {
        if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// A straight ship. Health starts at the length and drops by one for each
/// distinct cell hit; the board owning the ship does the bookkeeping.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    bow: Coordinate,
    length: usize,
    orientation: Orientation,
    health: usize,
}

impl Ship {
    /// Create an undamaged ship. Bounds are only known to a board, so the
    /// checks here are that the ship has at least one cell and is no longer
    /// than the side of the largest supported board.
    pub fn new(bow: Coordinate, length: usize, orientation: Orientation) -> Result<Self, BoardError> {
        if length == 0 {
            return Err(BoardError::InvalidShipPlacement(PlacementError::ZeroLength));
        }
        if length > MAX_BOARD_SIZE {
            return Err(BoardError::InvalidShipPlacement(PlacementError::TooLong {
                length,
                max: MAX_BOARD_SIZE,
            }));
        }
        Ok(Ship {
            bow,
            length,
            orientation,
            health: length,
        })
    }

    /// Cells covered by the ship, starting at the bow.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> {
        let bow = self.bow;
        let (dr, dc) = self.orientation.step();
        (0..self.length as i32).map(move |i| bow.offset(dr * i, dc * i))
    }

    /// True if `coord` is one of the ship's cells.
    pub fn is_hit_by(&self, coord: Coordinate) -> bool {
        self.cells().any(|c| c == coord)
    }

    /// Record one hit on an intact cell.
    pub(crate) fn register_hit(&mut self) {
        self.health = self.health.saturating_sub(1);
    }

    pub fn is_sunk(&self) -> bool {
        self.health == 0
    }

    pub fn bow(&self) -> Coordinate {
        self.bow
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Intact cells left.
    pub fn health(&self) -> usize {
        self.health
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ bow: ({}, {}), length: {}, orientation: {:?}, health: {} }}",
            self.bow.row(),
            self.bow.col(),
            self.length,
            self.orientation,
            self.health,
        )
    }
}
