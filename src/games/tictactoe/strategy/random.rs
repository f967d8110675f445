//! Easy tier: any empty cell, uniformly.

use super::Strategy;
use crate::games::tictactoe::{Board, Coordinate, Mark};
use rand::RngCore;
use rand::seq::IndexedRandom;
use tracing::instrument;

/// Picks a uniformly random empty cell. No look-ahead.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomStrategy;

impl RandomStrategy {
    /// Uniform choice among the empty cells of `board`.
    pub(super) fn pick(board: &Board, rng: &mut dyn RngCore) -> Option<Coordinate> {
        board.empty_cells().choose(rng).copied()
    }
}

impl Strategy for RandomStrategy {
    #[instrument(skip(self, board, rng))]
    fn choose(&self, board: &Board, _mark: Mark, rng: &mut dyn RngCore) -> Option<Coordinate> {
        Self::pick(board, rng)
    }
}
