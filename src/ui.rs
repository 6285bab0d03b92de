#![cfg(feature = "std")]
//! Terminal rendering of boards and game events.

use std::fmt::Write as _;
use std::string::String;

use crate::board::{BoardSnapshot, CellState};
use crate::common::ShotOutcome;
use crate::game::{Game, GameEvent, GameObserver, Side};

const SEPARATOR: &str = "--------------------";

/// Character drawn for a cell.
pub fn cell_symbol(state: CellState) -> char {
    match state {
        CellState::Empty => 'O',
        CellState::Ship => '■',
        CellState::Hit => 'X',
        CellState::Miss | CellState::Contour => '.',
    }
}

/// Render a board as a numbered grid:
///
/// ```text
///  | 1 | 2 | 3 |
/// 1 | O | X | . |
/// ```
pub fn render_board(snapshot: &BoardSnapshot) -> String {
    let w = snapshot.size.to_string().len();
    let mut out = String::new();
    let _ = write!(out, "{:w$} |", "", w = w);
    for c in 1..=snapshot.size {
        let _ = write!(out, " {:>w$} |", c, w = w);
    }
    for (r, row) in snapshot.cells.iter().enumerate() {
        let _ = write!(out, "\n{:>w$} |", r + 1, w = w);
        for &state in row {
            let _ = write!(out, " {:>w$} |", cell_symbol(state), w = w);
        }
    }
    out
}

/// Human-readable result of an accepted shot.
pub fn outcome_message(outcome: ShotOutcome) -> &'static str {
    match outcome {
        ShotOutcome::Hit => "Ship hit!",
        ShotOutcome::Miss => "Miss!",
        ShotOutcome::Destroyed => "Ship destroyed!",
    }
}

pub fn print_greeting() {
    println!("-------------------");
    println!("    Welcome to     ");
    println!("    sea battle     ");
    println!("-------------------");
    println!(" input format: x y ");
    println!(" x - row number    ");
    println!(" y - column number ");
}

/// Both boards, the user's first. The computer's board is drawn hidden
/// unless it was built visible.
pub fn print_game_view(game: &Game) {
    for (side, label) in [(Side::User, "User"), (Side::Computer, "Computer")] {
        println!("{}", SEPARATOR);
        println!("{} board ({}):", label, game.player_name(side));
        println!("{}", render_board(&game.board(side).snapshot()));
    }
}

/// Prints game events to stdout, naming each side after its player.
///
/// With a human side the reporter talks to that player directly ("Your
/// move!") and shows only their rejected targets; the computer's retries are
/// noise. Without one it narrates both sides alike.
pub struct ConsoleReporter {
    user: String,
    computer: String,
    human: Option<Side>,
}

impl ConsoleReporter {
    /// Reporter for a game where the user side is typed in by a person.
    pub fn interactive(game: &Game) -> Self {
        Self::with_human(game, Some(Side::User))
    }

    /// Reporter for a game between two computer players.
    pub fn spectator(game: &Game) -> Self {
        Self::with_human(game, None)
    }

    fn with_human(game: &Game, human: Option<Side>) -> Self {
        Self {
            user: game.player_name(Side::User).to_string(),
            computer: game.player_name(Side::Computer).to_string(),
            human,
        }
    }

    fn name(&self, side: Side) -> &str {
        match side {
            Side::User => &self.user,
            Side::Computer => &self.computer,
        }
    }

    fn is_human(&self, side: Side) -> bool {
        self.human == Some(side)
    }

    /// Lines printed for `event`.
    pub fn describe(&self, event: &GameEvent) -> Vec<String> {
        let mut lines = Vec::new();
        match event {
            GameEvent::TurnStarted { side, .. } => {
                lines.push(SEPARATOR.to_string());
                if self.is_human(*side) {
                    lines.push("Your move!".to_string());
                } else {
                    lines.push(format!("{}'s move!", self.name(*side)));
                }
            }
            GameEvent::ShotFired {
                side,
                target,
                outcome,
            } => {
                if !self.is_human(*side) {
                    lines.push(format!("{} fires at: {}", self.name(*side), target));
                }
                lines.push(outcome_message(*outcome).to_string());
            }
            GameEvent::ShotRejected { side, reason, .. } => {
                if self.is_human(*side) {
                    lines.push(reason.to_string());
                }
            }
            GameEvent::GameOver { winner } => {
                lines.push(SEPARATOR.to_string());
                if self.is_human(*winner) {
                    lines.push("You win!".to_string());
                } else {
                    lines.push(format!("{} wins!", self.name(*winner)));
                }
            }
        }
        lines
    }
}

impl GameObserver for ConsoleReporter {
    fn on_event(&mut self, event: &GameEvent) {
        for line in self.describe(event) {
            println!("{}", line);
        }
    }
}
