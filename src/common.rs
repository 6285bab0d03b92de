//! Common types for sea battle: shot outcomes and board errors.

use core::fmt;

use crate::bitboard::BitBoardError;
use crate::coordinate::Coordinate;

/// Result of a shot that the board accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// Shot struck a ship that is still afloat.
    Hit,
    /// Shot struck open water.
    Miss,
    /// Shot struck the last intact cell of a ship.
    Destroyed,
}

impl ShotOutcome {
    /// Only a hit on a ship that survives earns the shooter another shot.
    pub fn grants_follow_up(&self) -> bool {
        matches!(self, ShotOutcome::Hit)
    }
}

/// Why a ship could not be put on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// Ships must be at least one cell long.
    ZeroLength,
    /// Ship is longer than any board side.
    TooLong { length: usize, max: usize },
    /// A ship cell lies outside the grid.
    OutOfBounds(Coordinate),
    /// A ship cell is taken by another ship or by its contour.
    CellOccupied(Coordinate),
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error (e.g., grid too large for storage).
    BitBoardError(BitBoardError),
    /// Board side must be at least one cell.
    InvalidSize,
    /// Shot aimed outside the grid.
    OutOfBounds(Coordinate),
    /// Shot aimed at a cell that was already shot or revealed.
    AlreadyTargeted(Coordinate),
    /// Ship cannot be placed there.
    InvalidShipPlacement(PlacementError),
    /// Random placement ran out of attempts for a single board.
    UnableToPlaceFleet { attempts: u32 },
    /// Every board generation attempt ran out of placement attempts.
    FleetGenerationFailed { boards: u32 },
}

impl BoardError {
    /// Errors that only mean "pick another target".
    pub fn is_retryable_shot(&self) -> bool {
        matches!(
            self,
            BoardError::OutOfBounds(_) | BoardError::AlreadyTargeted(_)
        )
    }
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoardError(err)
    }
}

impl From<PlacementError> for BoardError {
    fn from(err: PlacementError) -> Self {
        BoardError::InvalidShipPlacement(err)
    }
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::ZeroLength => write!(f, "Ship length must be at least 1"),
            PlacementError::TooLong { length, max } => {
                write!(f, "Ship length {} exceeds the maximum of {}", length, max)
            }
            PlacementError::OutOfBounds(c) => write!(f, "Ship cell {} is off the board", c),
            PlacementError::CellOccupied(c) => {
                write!(f, "Ship cell {} touches or overlaps another ship", c)
            }
        }
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            BoardError::InvalidSize => write!(f, "Board size must be at least 1"),
            BoardError::OutOfBounds(_) => write!(f, "You are trying to shoot off the board!"),
            BoardError::AlreadyTargeted(_) => write!(f, "You already shot at this cell"),
            BoardError::InvalidShipPlacement(e) => write!(f, "Invalid ship placement: {}", e),
            BoardError::UnableToPlaceFleet { attempts } => {
                write!(f, "Unable to place fleet after {} attempts", attempts)
            }
            BoardError::FleetGenerationFailed { boards } => {
                write!(f, "No valid board found after {} boards", boards)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PlacementError {}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
