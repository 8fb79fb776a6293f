//! Core naval combat engine (no_std compatible)
//!
//! This module contains the pure board logic: coordinates, vessels, placement
//! and shot resolution. It depends only on num-traits, rand and the `log`
//! facade, and needs nothing beyond `alloc`.

pub mod bitboard;
pub mod board;
pub mod common;
pub mod config;
pub mod coordinate;
pub mod fleet;
pub mod ship;

// Re-export commonly used types
pub use bitboard::{BitBoard, BitBoardError};
pub use board::{Board, Cell, StandardBoard};
pub use common::{BoardError, ShotOutcome};
pub use config::*;
pub use coordinate::Coordinate;
pub use fleet::{random_board, random_board_with, random_candidate, try_place_fleet};
pub use ship::{Orientation, ShipType, Vessel};
