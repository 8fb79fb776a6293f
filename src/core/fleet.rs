//! Randomized fleet placement with bounded retries and whole-board restarts.

use rand::Rng;

use super::board::Board;
use super::common::BoardError;
use super::config::{MAX_BOARD_RESTARTS, MAX_PLACEMENT_ATTEMPTS};
use super::coordinate::Coordinate;
use super::ship::{Orientation, ShipType, Vessel};

/// Draw a random candidate vessel of `ship_type`. The bow is uniform over the
/// grid, so long vessels may run off the edge; the board rejects those.
pub fn random_candidate<R: Rng + ?Sized>(
    rng: &mut R,
    size: usize,
    ship_type: ShipType,
) -> Result<Vessel, BoardError> {
    let size = size as i32;
    let bow = Coordinate::new(rng.random_range(0..size), rng.random_range(0..size));
    Vessel::new(ship_type, bow, Orientation::random(rng))
}

/// Try to place every ship of `fleet` on a fresh board.
///
/// At most `max_attempts` placements are tried across the whole fleet.
/// Returns `None` when the budget runs out; the caller should discard and
/// start again from an empty board.
pub fn try_place_fleet<const N: usize, R: Rng + ?Sized>(
    rng: &mut R,
    fleet: &[ShipType],
    max_attempts: usize,
) -> Result<Option<Board<N>>, BoardError> {
    let mut board = Board::<N>::new();
    let mut attempts = 0;
    for &ship_type in fleet {
        loop {
            attempts += 1;
            if attempts > max_attempts {
                log::debug!("fleet placement exhausted {} attempts", max_attempts);
                return Ok(None);
            }
            let vessel = random_candidate(rng, N, ship_type)?;
            match board.place_vessel(vessel) {
                Ok(()) => break,
                Err(BoardError::Overlap(_) | BoardError::OutOfBounds(_)) => continue,
                Err(e) => return Err(e),
            }
        }
    }
    log::debug!("fleet of {} placed after {} attempts", fleet.len(), attempts);
    Ok(Some(board))
}

/// Build a board holding `fleet`, restarting from an empty board whenever a
/// placement round runs out of attempts.
pub fn random_board<const N: usize, R: Rng + ?Sized>(
    rng: &mut R,
    fleet: &[ShipType],
) -> Result<Board<N>, BoardError> {
    random_board_with(rng, fleet, MAX_PLACEMENT_ATTEMPTS, MAX_BOARD_RESTARTS)
}

/// Like [`random_board`] with explicit budgets: `max_attempts` placements per
/// round and at most `max_restarts` rounds.
pub fn random_board_with<const N: usize, R: Rng + ?Sized>(
    rng: &mut R,
    fleet: &[ShipType],
    max_attempts: usize,
    max_restarts: usize,
) -> Result<Board<N>, BoardError> {
    for restart in 0..max_restarts {
        if let Some(board) = try_place_fleet(rng, fleet, max_attempts)? {
            if restart > 0 {
                log::debug!("board completed after {} restarts", restart);
            }
            return Ok(board);
        }
    }
    log::warn!("giving up on fleet placement after {} restarts", max_restarts);
    Err(BoardError::UnableToPlaceFleet {
        restarts: max_restarts,
    })
}
