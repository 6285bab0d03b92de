//! Turn sequencing between the user and the computer.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use log::{debug, info};
use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::{BoardError, ShotOutcome};
use crate::config::GameConfig;
use crate::coordinate::Coordinate;
use crate::fleet::random_board;
use crate::player::Player;

/// One of the two sides of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    User,
    Computer,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::User => Side::Computer,
            Side::Computer => Side::User,
        }
    }
}

/// Where the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    UserTurn,
    ComputerTurn,
    /// Terminal: the carried side won.
    Over(Side),
}

/// Things worth reporting while the game runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    TurnStarted { side: Side, turn: u32 },
    ShotFired { side: Side, target: Coordinate, outcome: ShotOutcome },
    /// The board refused the target; the same side picks again.
    ShotRejected { side: Side, target: Coordinate, reason: BoardError },
    GameOver { winner: Side },
}

/// Receiver of [`GameEvent`]s, e.g. a console reporter.
pub trait GameObserver {
    fn on_event(&mut self, event: &GameEvent);
}

/// Discards every event.
impl GameObserver for () {
    fn on_event(&mut self, _event: &GameEvent) {}
}

/// Records every event.
impl GameObserver for Vec<GameEvent> {
    fn on_event(&mut self, event: &GameEvent) {
        self.push(event.clone());
    }
}

/// Errors that stop the game loop.
#[derive(Debug)]
pub enum GameError {
    /// A player could not produce a target at all (e.g. input closed).
    Player(anyhow::Error),
    /// A board failed in a way no retry can fix.
    Board(BoardError),
    /// A move was requested after the game ended.
    GameOver(Side),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Player(e) => write!(f, "Player failed to move: {}", e),
            GameError::Board(e) => write!(f, "Board error: {}", e),
            GameError::GameOver(winner) => write!(f, "Game is already over ({:?} won)", winner),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

struct Participant {
    player: Box<dyn Player>,
    board: Board,
    shots: u32,
}

/// A user and a computer, each with a player and the board holding their
/// own fleet. Even turn numbers belong to the user, odd ones to the computer;
/// a hit that does not sink a ship keeps the turn number unchanged so the
/// same side shoots again.
pub struct Game {
    user: Participant,
    computer: Participant,
    turn: u32,
    winner: Option<Side>,
}

impl Game {
    /// Assemble a game from players and their already populated boards.
    pub fn new(
        user: Box<dyn Player>,
        user_board: Board,
        computer: Box<dyn Player>,
        computer_board: Board,
    ) -> Self {
        let mut game = Game {
            user: Participant {
                player: user,
                board: user_board,
                shots: 0,
            },
            computer: Participant {
                player: computer,
                board: computer_board,
                shots: 0,
            },
            turn: 0,
            winner: None,
        };
        game.winner = game.check_winner();
        game
    }

    /// Generate a random fleet for each side. The computer's board is hidden.
    pub fn setup(
        rng: &mut SmallRng,
        config: &GameConfig,
        user: Box<dyn Player>,
        computer: Box<dyn Player>,
    ) -> Result<Self, BoardError> {
        let user_board = random_board(rng, config)?;
        let mut computer_board = random_board(rng, config)?;
        computer_board.set_hidden(true);
        Ok(Self::new(user, user_board, computer, computer_board))
    }

    pub fn phase(&self) -> GamePhase {
        match self.winner {
            Some(side) => GamePhase::Over(side),
            None => match self.active_side() {
                Side::User => GamePhase::UserTurn,
                Side::Computer => GamePhase::ComputerTurn,
            },
        }
    }

    /// Side whose turn it is by turn parity.
    pub fn active_side(&self) -> Side {
        if self.turn % 2 == 0 {
            Side::User
        } else {
            Side::Computer
        }
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Board holding `side`'s own fleet.
    pub fn board(&self, side: Side) -> &Board {
        &self.participant(side).board
    }

    /// Shots `side` has landed on the enemy board, rejected targets excluded.
    pub fn shots(&self, side: Side) -> u32 {
        self.participant(side).shots
    }

    pub fn player_name(&self, side: Side) -> &str {
        self.participant(side).player.name()
    }

    fn participant(&self, side: Side) -> &Participant {
        match side {
            Side::User => &self.user,
            Side::Computer => &self.computer,
        }
    }

    /// The opponent of the first side whose fleet is gone. The computer's
    /// board is checked first.
    fn check_winner(&self) -> Option<Side> {
        [Side::Computer, Side::User]
            .into_iter()
            .find(|&side| self.board(side).is_defeated())
            .map(Side::opponent)
    }

    /// Play one turn for the active side and return the resulting phase.
    pub fn step(
        &mut self,
        rng: &mut SmallRng,
        observer: &mut dyn GameObserver,
    ) -> Result<GamePhase, GameError> {
        if let Some(winner) = self.winner {
            return Err(GameError::GameOver(winner));
        }
        let side = self.active_side();
        observer.on_event(&GameEvent::TurnStarted {
            side,
            turn: self.turn,
        });

        let (shooter, enemy) = match side {
            Side::User => (&mut self.user, &mut self.computer.board),
            Side::Computer => (&mut self.computer, &mut self.user.board),
        };
        let outcome = take_turn(side, shooter, enemy, rng, observer)?;

        if !outcome.grants_follow_up() {
            self.turn += 1;
        }

        self.winner = self.check_winner();
        if let Some(winner) = self.winner {
            info!("{:?} wins after {} turns", winner, self.turn);
            observer.on_event(&GameEvent::GameOver { winner });
        }
        Ok(self.phase())
    }

    /// Play until one fleet is destroyed and return the winner.
    pub fn run(
        &mut self,
        rng: &mut SmallRng,
        observer: &mut dyn GameObserver,
    ) -> Result<Side, GameError> {
        loop {
            if let Some(winner) = self.winner {
                return Ok(winner);
            }
            self.step(rng, observer)?;
        }
    }
}

/// Ask `shooter` for targets until `enemy` accepts one.
fn take_turn(
    side: Side,
    shooter: &mut Participant,
    enemy: &mut Board,
    rng: &mut SmallRng,
    observer: &mut dyn GameObserver,
) -> Result<ShotOutcome, GameError> {
    loop {
        let target = shooter
            .player
            .choose_target(rng, enemy)
            .map_err(GameError::Player)?;
        match enemy.shoot(target) {
            Ok(outcome) => {
                shooter.shots += 1;
                debug!(
                    "{} ({:?}) shot {} -> {:?}",
                    shooter.player.name(),
                    side,
                    target,
                    outcome
                );
                observer.on_event(&GameEvent::ShotFired {
                    side,
                    target,
                    outcome,
                });
                return Ok(outcome);
            }
            Err(reason) if reason.is_retryable_shot() => {
                debug!("{:?} target {} rejected: {}", side, target, reason);
                observer.on_event(&GameEvent::ShotRejected {
                    side,
                    target,
                    reason,
                });
            }
            Err(e) => return Err(GameError::Board(e)),
        }
    }
}
