//! Board state: vessel placement, shot resolution and the rendered cell grid.

use alloc::vec::Vec;
use core::fmt;

use super::bitboard::BitBoard;
use super::common::{BoardError, ShotOutcome};
use super::config::BOARD_SIZE;
use super::coordinate::Coordinate;
use super::ship::Vessel;

type BB<const N: usize> = BitBoard<u128, N>;

/// What the renderer shows for a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied,
    Hit,
    Miss,
}

/// An `N×N` board owning one side's fleet.
///
/// Two bitboards track what is forbidden: `reserved` holds vessel cells and
/// their one-cell buffer and is consulted only by placement; `blocked` holds
/// every cell shot at plus the revealed ring around destroyed vessels and is
/// consulted only by shooting.
#[derive(Clone)]
pub struct Board<const N: usize> {
    hidden: bool,
    vessels: Vec<Vessel>,
    reserved: BB<N>,
    blocked: BB<N>,
    destroyed: usize,
    cells: [[Cell; N]; N],
}

/// Board of the standard game size.
pub type StandardBoard = Board<BOARD_SIZE>;

impl<const N: usize> Board<N> {
    /// Create an empty board with no vessels.
    pub fn new() -> Self {
        Board {
            hidden: false,
            vessels: Vec::new(),
            reserved: BB::<N>::new(),
            blocked: BB::<N>::new(),
            destroyed: 0,
            cells: [[Cell::Empty; N]; N],
        }
    }

    /// Grid dimension.
    pub const fn size(&self) -> usize {
        N
    }

    /// Whether the renderer should conceal vessels on this board.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    pub fn vessel_count(&self) -> usize {
        self.vessels.len()
    }

    /// Number of vessels whose health reached zero.
    pub fn destroyed_count(&self) -> usize {
        self.destroyed
    }

    /// `true` once every placed vessel is destroyed.
    pub fn all_destroyed(&self) -> bool {
        !self.vessels.is_empty() && self.destroyed == self.vessels.len()
    }

    /// Rendered cell grid, row-major.
    pub fn cells(&self) -> &[[Cell; N]; N] {
        &self.cells
    }

    /// Rendered state of a single cell, `None` off the grid.
    pub fn cell(&self, c: Coordinate) -> Option<Cell> {
        self.index(c).ok().map(|(r, col)| self.cells[r][col])
    }

    pub fn contains(&self, c: Coordinate) -> bool {
        self.index(c).is_ok()
    }

    /// `true` when a shot at `c` would be accepted.
    pub fn can_target(&self, c: Coordinate) -> bool {
        match self.index(c) {
            Ok((r, col)) => !self.blocked.get(r, col).unwrap_or(true),
            Err(_) => false,
        }
    }

    /// Number of cells that can still be shot at.
    pub fn open_cells(&self) -> usize {
        N * N - self.blocked.count_ones()
    }

    /// Place a vessel, reserving its cells and their eight-neighbour buffer.
    pub fn place_vessel(&mut self, vessel: Vessel) -> Result<(), BoardError> {
        for c in vessel.cells() {
            let (r, col) = self.index(c)?;
            if self.reserved.get(r, col)? {
                return Err(BoardError::Overlap(c));
            }
        }
        for c in vessel.cells() {
            let (r, col) = self.index(c)?;
            self.cells[r][col] = Cell::Occupied;
            self.reserved.set(r, col)?;
        }
        for c in vessel.cells() {
            for n in c.neighbours() {
                if let Ok((r, col)) = self.index(n) {
                    self.reserved.set(r, col)?;
                }
            }
        }
        log::debug!("placed {:?}", vessel);
        self.vessels.push(vessel);
        Ok(())
    }

    /// Resolve a shot at `target`.
    pub fn shoot(&mut self, target: Coordinate) -> Result<ShotOutcome, BoardError> {
        let (r, col) = self.index(target)?;
        if self.blocked.get(r, col)? {
            return Err(BoardError::AlreadyTargeted(target));
        }
        self.blocked.set(r, col)?;

        let Some(i) = self.vessels.iter().position(|v| v.contains(target)) else {
            self.cells[r][col] = Cell::Miss;
            log::debug!("shot at ({}) missed", target);
            return Ok(ShotOutcome::Miss);
        };

        self.cells[r][col] = Cell::Hit;
        if !self.vessels[i].register_hit() {
            log::debug!("shot at ({}) hit", target);
            return Ok(ShotOutcome::Hit);
        }

        self.destroyed += 1;
        let name = self.vessels[i].ship_type().name();
        self.reveal_surroundings(i)?;
        log::debug!("shot at ({}) destroyed the {}", target, name);
        Ok(ShotOutcome::Destroyed(name))
    }

    /// Mark the buffer ring of a destroyed vessel as known water.
    fn reveal_surroundings(&mut self, vessel: usize) -> Result<(), BoardError> {
        let ring: Vec<Coordinate> = self.vessels[vessel]
            .cells()
            .flat_map(Coordinate::neighbours)
            .collect();
        for c in ring {
            let Ok((r, col)) = self.index(c) else {
                continue;
            };
            if !self.blocked.get(r, col)? {
                self.blocked.set(r, col)?;
                self.cells[r][col] = Cell::Miss;
            }
        }
        Ok(())
    }

    fn index(&self, c: Coordinate) -> Result<(usize, usize), BoardError> {
        match (usize::try_from(c.row), usize::try_from(c.col)) {
            (Ok(r), Ok(col)) if r < N && col < N => Ok((r, col)),
            _ => Err(BoardError::OutOfBounds(c)),
        }
    }
}

impl<const N: usize> Default for Board<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Debug for Board<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  hidden: {},\n  destroyed: {}/{},\n  reserved: {:?},\n  blocked: {:?},\n  vessels: {:?}\n}}",
            self.hidden,
            self.destroyed,
            self.vessels.len(),
            self.reserved,
            self.blocked,
            self.vessels
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ship::{Orientation, ShipType};

    #[test]
    fn destroying_a_vessel_reveals_its_buffer() {
        let mut board = Board::<6>::new();
        let boat = ShipType::new("Patrol boat", 1);
        board
            .place_vessel(Vessel::new(boat, Coordinate::new(0, 0), Orientation::Horizontal).unwrap())
            .unwrap();

        assert_eq!(board.shoot(Coordinate::new(0, 0)), Ok(ShotOutcome::Destroyed("Patrol boat")));
        for c in [(0, 1), (1, 0), (1, 1)] {
            let c = Coordinate::from(c);
            assert_eq!(board.cell(c), Some(Cell::Miss));
            assert!(!board.can_target(c));
        }
        assert_eq!(board.open_cells(), 36 - 4);
    }

    #[test]
    fn index_rejects_negative_and_large() {
        let board = Board::<6>::new();
        assert!(board.index(Coordinate::new(-1, 0)).is_err());
        assert!(board.index(Coordinate::new(0, 6)).is_err());
        assert_eq!(board.index(Coordinate::new(5, 5)), Ok((5, 5)));
    }
}
