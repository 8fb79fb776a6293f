#![cfg(feature = "std")]

use std::fmt;
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use std::string::String;

use rand::rngs::SmallRng;

use crate::core::{Board, BoardError, Coordinate};

use super::MoveSource;

/// Defects in a typed move, caught before any coordinate is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Expected exactly two tokens, found this many.
    WrongTokenCount(usize),
    /// A token was not a non-negative whole number.
    NotANumber(String),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::WrongTokenCount(n) => {
                write!(f, "Enter 2 coordinates (row and column), got {}", n)
            }
            InputError::NotANumber(token) => write!(f, "'{}' is not a number", token),
        }
    }
}

impl std::error::Error for InputError {}

/// Parse `"<row> <col>"` (1-indexed) into a 0-indexed coordinate.
///
/// Only the shape of the input is checked here. Off-board values such as
/// `0 0` or `9 9` parse fine and are refused later by the board.
pub fn parse_target(line: &str) -> Result<Coordinate, InputError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [row, col] = tokens[..] else {
        return Err(InputError::WrongTokenCount(tokens.len()));
    };
    Ok(Coordinate::new(parse_axis(row)? - 1, parse_axis(col)? - 1))
}

fn parse_axis(token: &str) -> Result<i32, InputError> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::NotANumber(token.to_string()));
    }
    // digits only, so the only failure left is overflow: treat as far off-board
    Ok(token.parse::<i32>().unwrap_or(i32::MAX))
}

/// Move-source that prompts a person for coordinates.
pub struct ConsoleMoveSource<R, W> {
    input: R,
    output: W,
}

impl ConsoleMoveSource<StdinLock<'static>, Stdout> {
    /// Read moves from the process's stdin and prompt on stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleMoveSource<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the output sink, mainly to inspect what was printed.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Prompt until a well-formed line arrives.
    fn read_target(&mut self) -> anyhow::Result<Coordinate> {
        loop {
            write!(self.output, "Your move: ")?;
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(anyhow::anyhow!("input closed before a move was entered"));
            }
            match parse_target(&line) {
                Ok(target) => return Ok(target),
                Err(e) => {
                    log::debug!("malformed move {:?}: {}", line.trim(), e);
                    writeln!(self.output, "✗ {}", e)?;
                }
            }
        }
    }
}

impl<const N: usize, R: BufRead, W: Write> MoveSource<N> for ConsoleMoveSource<R, W> {
    fn next_target(
        &mut self,
        _opponent: &Board<N>,
        _rng: &mut SmallRng,
    ) -> anyhow::Result<Coordinate> {
        self.read_target()
    }

    fn target_rejected(&mut self, _target: Coordinate, err: &BoardError) {
        let msg = match err {
            BoardError::OutOfBounds(_) => {
                std::format!("✗ That is off the board. Rows and columns run from 1 to {}.", N)
            }
            BoardError::AlreadyTargeted(_) => {
                "✗ You have already fired at those coordinates.".to_string()
            }
            other => std::format!("✗ {}", other),
        };
        // a broken prompt sink is surfaced by the next read_target
        let _ = writeln!(self.output, "{}", msg);
    }

    fn is_interactive(&self) -> bool {
        true
    }
}
