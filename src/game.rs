//! Turn coordination between two combatants.

use rand::rngs::SmallRng;

use crate::core::{Coordinate, ShotOutcome};
use crate::player::Combatant;

/// Which combatant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Player1,
    Player2,
}

impl Side {
    pub fn other(self) -> Self {
        match self {
            Side::Player1 => Side::Player2,
            Side::Player2 => Side::Player1,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::Player1 => 0,
            Side::Player2 => 1,
        }
    }
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    AwaitingMove(Side),
    Won(Side),
}

/// What happened during one call to [`Game::play_turn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub mover: Side,
    pub target: Coordinate,
    pub outcome: ShotOutcome,
    /// Targets refused by the opponent board before this one was accepted.
    pub rejected: usize,
    /// Status after the shot.
    pub status: GameStatus,
}

/// Alternates shots between two combatants until one fleet is gone.
///
/// A miss hands the move to the other side; a hit or a kill keeps it.
pub struct Game<const N: usize> {
    combatants: [Combatant<N>; 2],
    status: GameStatus,
}

impl<const N: usize> Game<N> {
    /// Player 1 moves first.
    pub fn new(player1: Combatant<N>, player2: Combatant<N>) -> Self {
        Self {
            combatants: [player1, player2],
            status: GameStatus::AwaitingMove(Side::Player1),
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn combatant(&self, side: Side) -> &Combatant<N> {
        &self.combatants[side.index()]
    }

    /// Winner, once the game is over.
    pub fn winner(&self) -> Option<Side> {
        match self.status {
            GameStatus::Won(side) => Some(side),
            GameStatus::AwaitingMove(_) => None,
        }
    }

    /// Let the side to move fire one accepted shot.
    pub fn play_turn(&mut self, rng: &mut SmallRng) -> anyhow::Result<TurnReport> {
        let mover = match self.status {
            GameStatus::AwaitingMove(side) => side,
            GameStatus::Won(side) => {
                return Err(anyhow::anyhow!("game already won by {:?}", side));
            }
        };

        let (first, second) = self.combatants.split_at_mut(1);
        let (shooter, target) = match mover {
            Side::Player1 => (&mut first[0], &mut second[0]),
            Side::Player2 => (&mut second[0], &mut first[0]),
        };
        let shot = shooter.take_shot(target.board_mut(), rng)?;

        self.status = match self.fleet_destroyed() {
            Some(winner) => {
                log::info!("{} wins", self.combatant(winner).name());
                GameStatus::Won(winner)
            }
            None if shot.outcome.keeps_turn() => GameStatus::AwaitingMove(mover),
            None => GameStatus::AwaitingMove(mover.other()),
        };

        Ok(TurnReport {
            mover,
            target: shot.target,
            outcome: shot.outcome,
            rejected: shot.rejected,
            status: self.status,
        })
    }

    /// Play until a side wins, calling `on_turn` after every accepted shot.
    pub fn run<F>(&mut self, rng: &mut SmallRng, mut on_turn: F) -> anyhow::Result<Side>
    where
        F: FnMut(&Self, &TurnReport),
    {
        loop {
            let report = self.play_turn(rng)?;
            on_turn(self, &report);
            if let GameStatus::Won(side) = report.status {
                return Ok(side);
            }
        }
    }

    /// Side whose opponent has lost every vessel.
    fn fleet_destroyed(&self) -> Option<Side> {
        if self.combatant(Side::Player2).board().all_destroyed() {
            Some(Side::Player1)
        } else if self.combatant(Side::Player1).board().all_destroyed() {
            Some(Side::Player2)
        } else {
            None
        }
    }
}
