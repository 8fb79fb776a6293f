//! Move-sources and combatants
//!
//! A [`MoveSource`] produces one target coordinate per call:
//! - RandomMoveSource: uniform random open cell on the opponent board
//! - ConsoleMoveSource: two 1-indexed numbers read from a line of text
//!
//! A [`Combatant`] pairs a side's own board with its move-source and keeps
//! asking for targets until one resolves against the opponent board.

use alloc::boxed::Box;
use alloc::string::String;

use rand::rngs::SmallRng;

use crate::core::{Board, BoardError, Coordinate, ShotOutcome};

/// Capability implemented by everything that can pick a target.
pub trait MoveSource<const N: usize> {
    /// Choose the next target on `opponent`. An error means the source can no
    /// longer produce moves (for example its input was closed).
    fn next_target(
        &mut self,
        opponent: &Board<N>,
        rng: &mut SmallRng,
    ) -> anyhow::Result<Coordinate>;

    /// Inform the source that its last target was refused by the board.
    fn target_rejected(&mut self, _target: Coordinate, _err: &BoardError) {}

    /// Whether the source is driven by a person, used for display only.
    fn is_interactive(&self) -> bool {
        false
    }
}

/// A resolved shot together with the number of refused targets before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shot {
    pub target: Coordinate,
    pub outcome: ShotOutcome,
    pub rejected: usize,
}

/// One side of the match: its own board and where its moves come from.
pub struct Combatant<const N: usize> {
    name: String,
    board: Board<N>,
    source: Box<dyn MoveSource<N>>,
}

impl<const N: usize> Combatant<N> {
    pub fn new(name: impl Into<String>, board: Board<N>, source: Box<dyn MoveSource<N>>) -> Self {
        Self {
            name: name.into(),
            board,
            source,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// This combatant's own fleet.
    pub fn board(&self) -> &Board<N> {
        &self.board
    }

    pub(crate) fn board_mut(&mut self) -> &mut Board<N> {
        &mut self.board
    }

    pub fn is_interactive(&self) -> bool {
        self.source.is_interactive()
    }

    /// Fire at `opponent` until a target is accepted. Refused targets are
    /// reported back to the move-source and never end the turn.
    pub fn take_shot(
        &mut self,
        opponent: &mut Board<N>,
        rng: &mut SmallRng,
    ) -> anyhow::Result<Shot> {
        let mut rejected = 0;
        loop {
            let target = self.source.next_target(opponent, rng)?;
            match opponent.shoot(target) {
                Ok(outcome) => {
                    return Ok(Shot {
                        target,
                        outcome,
                        rejected,
                    })
                }
                Err(err) => {
                    log::info!("{}: target ({}) refused: {}", self.name, target, err);
                    rejected += 1;
                    self.source.target_rejected(target, &err);
                }
            }
        }
    }
}

// Re-export implementations
pub mod ai;
pub use ai::RandomMoveSource;

#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub use cli::{parse_target, ConsoleMoveSource, InputError};
