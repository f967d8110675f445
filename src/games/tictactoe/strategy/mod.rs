//! Automated opponent strategies.
//!
//! Each [`Difficulty`] tier maps to a [`Strategy`]. Strategies are pure
//! functions of the board and the mark they play for; any randomness comes
//! from the caller-supplied generator, so seeded runs are reproducible.

mod greedy;
mod minimax;
mod random;

pub use greedy::GreedyStrategy;
pub use minimax::MinimaxStrategy;
pub use random::RandomStrategy;

use super::{Board, Coordinate, Mark};
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// Picks a cell for the automated opponent.
pub trait Strategy {
    /// Chooses an empty cell for `mark` to play, or `None` if the board is full.
    fn choose(&self, board: &Board, mark: Mark, rng: &mut dyn RngCore) -> Option<Coordinate>;
}

/// Automated opponent strength.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniformly random empty cell.
    #[default]
    Easy,
    /// Takes a win, else blocks, else random.
    Intermediate,
    /// Exhaustive look-ahead; never loses.
    Impossible,
}

impl Difficulty {
    /// Strategy for this tier.
    pub fn strategy(self) -> &'static dyn Strategy {
        match self {
            Difficulty::Easy => &RandomStrategy,
            Difficulty::Intermediate => &GreedyStrategy,
            Difficulty::Impossible => &MinimaxStrategy,
        }
    }
}
