#![cfg(feature = "std")]

use std::fmt;
use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};
use std::string::String;

use rand::rngs::SmallRng;

use crate::board::Board;
use crate::coordinate::Coordinate;
use crate::player::Player;

/// Why a typed move was not understood.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Anything other than exactly two tokens.
    WrongCount(usize),
    /// A token that is not a non-negative integer.
    NotANumber(String),
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::WrongCount(_) => write!(f, "Enter two coordinates!"),
            MoveParseError::NotANumber(token) => write!(f, "Enter numbers! ('{}' is not one)", token),
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Parse a move typed as 1-based "row col" into a 0-based coordinate.
///
/// The result is not bounds-checked: `0 0` becomes `(-1, -1)` and is
/// rejected by the board like any other off-grid shot.
pub fn parse_move(line: &str) -> Result<Coordinate, MoveParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 2 {
        return Err(MoveParseError::WrongCount(tokens.len()));
    }
    let mut parsed = [0i32; 2];
    for (slot, token) in parsed.iter_mut().zip(tokens.iter()) {
        if !token.chars().all(|ch| ch.is_ascii_digit()) {
            return Err(MoveParseError::NotANumber(token.to_string()));
        }
        *slot = token
            .parse()
            .map_err(|_| MoveParseError::NotANumber(token.to_string()))?;
    }
    Ok(Coordinate::new(parsed[0] - 1, parsed[1] - 1))
}

/// Human player typing moves on a line-based input.
pub struct HumanPlayer<R, W> {
    name: String,
    input: R,
    output: W,
}

impl HumanPlayer<StdinLock<'static>, Stdout> {
    /// Player reading from stdin and prompting on stdout.
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            name: String::from("User"),
            input,
            output,
        }
    }

    /// Consume the player, returning its prompt output.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_target(&mut self, _rng: &mut SmallRng, _enemy: &Board) -> anyhow::Result<Coordinate> {
        loop {
            write!(self.output, "Your move: ")?;
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                anyhow::bail!("input closed before a move was entered");
            }
            match parse_move(&line) {
                Ok(coord) => return Ok(coord),
                Err(e) => writeln!(self.output, " {} ", e)?,
            }
        }
    }
}
