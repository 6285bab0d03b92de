//! Commonly used types and utilities for ease of import.

pub use crate::{
    random_board, AiPlayer, Board, BoardError, Coordinate, Game, GameConfig, GameEvent,
    GameObserver, GamePhase, Orientation, Player, Ship, ShotOutcome, Side,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, rng_from_seed, HumanPlayer};
