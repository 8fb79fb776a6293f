use rand::rngs::SmallRng;
use rand::Rng;

use crate::core::{Board, Coordinate};

use super::MoveSource;

/// Automated opponent that fires at uniformly random cells.
///
/// Cells the opponent board would refuse are redrawn here, so this source
/// never hands the coordinator an invalid move.
pub struct RandomMoveSource;

impl RandomMoveSource {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RandomMoveSource {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> MoveSource<N> for RandomMoveSource {
    fn next_target(
        &mut self,
        opponent: &Board<N>,
        rng: &mut SmallRng,
    ) -> anyhow::Result<Coordinate> {
        if opponent.open_cells() == 0 {
            return Err(anyhow::anyhow!("no open cells left to target"));
        }
        let size = N as i32;
        loop {
            let target = Coordinate::new(rng.random_range(0..size), rng.random_range(0..size));
            if opponent.can_target(target) {
                return Ok(target);
            }
            log::trace!("redrawing blocked target ({})", target);
        }
    }
}
