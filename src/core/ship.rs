//! Vessel definitions: orientation, ship types and placed vessels.

use core::fmt;

use rand::Rng;

use super::common::BoardError;
use super::coordinate::Coordinate;

/// Orientation of a vessel on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Cells extend along the row (increasing column).
    Horizontal,
    /// Cells extend down the column (increasing row).
    Vertical,
}

impl Orientation {
    /// Pick either orientation with equal probability.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }

    fn step(self) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// A linear run of cells anchored at its bow, with a health counter.
#[derive(Clone, PartialEq, Eq)]
pub struct Vessel {
    ship_type: ShipType,
    bow: Coordinate,
    orientation: Orientation,
    span: i32,
    health: usize,
}

impl Vessel {
    /// Build a vessel of `ship_type` starting at `bow`. The vessel is not
    /// checked against any grid here; the board does that on placement.
    pub fn new(
        ship_type: ShipType,
        bow: Coordinate,
        orientation: Orientation,
    ) -> Result<Self, BoardError> {
        let span = match i32::try_from(ship_type.length()) {
            Ok(span) if span > 0 => span,
            _ => return Err(BoardError::InvalidLength),
        };
        Ok(Vessel {
            ship_type,
            bow,
            orientation,
            span,
            health: ship_type.length(),
        })
    }

    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    pub fn bow(&self) -> Coordinate {
        self.bow
    }

    pub fn length(&self) -> usize {
        self.ship_type.length()
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Cells not yet hit.
    pub fn remaining_health(&self) -> usize {
        self.health
    }

    pub fn is_destroyed(&self) -> bool {
        self.health == 0
    }

    /// The `length` contiguous cells starting at the bow.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        let (dr, dc) = self.orientation.step();
        let bow = self.bow;
        (0..self.span).map(move |i| bow.offset(dr * i, dc * i))
    }

    pub fn contains(&self, c: Coordinate) -> bool {
        self.cells().any(|cell| cell == c)
    }

    /// Take one point of damage. Returns `true` if this destroyed the vessel.
    pub(crate) fn register_hit(&mut self) -> bool {
        self.health = self.health.saturating_sub(1);
        self.health == 0
    }
}

impl fmt::Debug for Vessel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Vessel {{ name: \"{}\", bow: ({}, {}), orientation: {:?}, health: {}/{} }}",
            self.ship_type.name(),
            self.bow.row,
            self.bow.col,
            self.orientation,
            self.health,
            self.length(),
        )
    }
}
