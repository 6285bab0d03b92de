//! Random fleet placement.
//!
//! Ships go down longest first at uniformly random bows and orientations.
//! A rejected placement is simply resampled; a board that burns through its
//! attempt budget is thrown away and generation starts over on a fresh one.

use log::{debug, trace, warn};
use rand::Rng;

use crate::board::Board;
use crate::common::BoardError;
use crate::config::GameConfig;
use crate::coordinate::Coordinate;
use crate::ship::Ship;

/// Try to place the whole fleet on one fresh board.
///
/// Fails with [`BoardError::UnableToPlaceFleet`] once
/// `config.max_placement_attempts` placements have been tried; a partially
/// filled board is never returned.
pub fn try_random_board<R: Rng + ?Sized>(
    rng: &mut R,
    config: &GameConfig,
) -> Result<Board, BoardError> {
    let mut board = Board::new(config.board_size)?;
    let n = config.board_size as i32;
    let mut attempts = 0u32;
    for &length in config.fleet.iter() {
        loop {
            if attempts >= config.max_placement_attempts {
                debug!("gave up placing fleet after {} attempts", attempts);
                return Err(BoardError::UnableToPlaceFleet { attempts });
            }
            attempts += 1;
            let bow = Coordinate::new(rng.random_range(0..n), rng.random_range(0..n));
            let ship = Ship::new(bow, length, rng.random())?;
            match board.place_ship(ship) {
                Ok(()) => break,
                Err(BoardError::InvalidShipPlacement(reason)) => {
                    trace!("rejected {:?}: {}", ship, reason);
                }
                Err(e) => return Err(e),
            }
        }
    }
    board.reset_targeting();
    debug!("fleet placed after {} attempts", attempts);
    Ok(board)
}

/// Generate boards until one holds the whole fleet.
///
/// Gives up with [`BoardError::FleetGenerationFailed`] after
/// `config.max_board_attempts` boards, which only happens when the fleet
/// cannot fit on the grid.
pub fn random_board<R: Rng + ?Sized>(
    rng: &mut R,
    config: &GameConfig,
) -> Result<Board, BoardError> {
    for boards in 1..=config.max_board_attempts {
        match try_random_board(rng, config) {
            Ok(board) => return Ok(board),
            Err(BoardError::UnableToPlaceFleet { .. }) => {
                trace!("board {} abandoned, starting over", boards);
            }
            Err(e) => return Err(e),
        }
    }
    warn!(
        "no valid {}x{} board for fleet {:?} after {} boards",
        config.board_size, config.board_size, config.fleet, config.max_board_attempts
    );
    Err(BoardError::FleetGenerationFailed {
        boards: config.max_board_attempts,
    })
}
