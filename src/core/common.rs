//! Common types for the board core: board errors and shot outcomes.

use core::fmt;

use super::bitboard::BitBoardError;
use super::coordinate::Coordinate;

/// Result of a resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// Shot hit a vessel that still has health left.
    Hit,
    /// Shot found open water. Control passes to the opponent.
    Miss,
    /// Shot took the last point of a vessel's health, carrying its name.
    Destroyed(&'static str),
}

impl ShotOutcome {
    /// `true` when the shooter keeps the move.
    pub fn keeps_turn(&self) -> bool {
        !matches!(self, ShotOutcome::Miss)
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate lies outside the grid.
    OutOfBounds(Coordinate),
    /// Vessel cell collides with an occupied or buffer cell.
    Overlap(Coordinate),
    /// Cell was already shot at or is known to be empty.
    AlreadyTargeted(Coordinate),
    /// Vessel length is zero or too long to lay out on a grid.
    InvalidLength,
    /// The fleet could not be placed even after restarting the board.
    UnableToPlaceFleet { restarts: usize },
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        match err {
            BitBoardError::IndexOutOfBounds { row, col } => BoardError::OutOfBounds(Coordinate::new(
                i32::try_from(row).unwrap_or(i32::MAX),
                i32::try_from(col).unwrap_or(i32::MAX),
            )),
        }
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds(c) => write!(f, "Coordinate ({}) is off the board", c),
            BoardError::Overlap(c) => {
                write!(f, "Vessel at ({}) overlaps or touches another vessel", c)
            }
            BoardError::AlreadyTargeted(c) => write!(f, "Cell ({}) was already targeted", c),
            BoardError::InvalidLength => {
                write!(f, "Vessel length must be between 1 and {}", i32::MAX)
            }
            BoardError::UnableToPlaceFleet { restarts } => {
                write!(f, "Unable to place fleet after {} board restarts", restarts)
            }
        }
    }
}

impl core::error::Error for BoardError {}
