//! Single winner invariant: both marks can never own a line.

use super::super::GameState;
use super::super::rules::winning_marks;
use super::Invariant;

/// Invariant: at most one mark holds a completed line.
///
/// The engine re-evaluates after every placement and refuses moves on a
/// won board, so a second winning line can only appear on a corrupt board.
pub struct SingleWinnerInvariant;

impl Invariant<GameState> for SingleWinnerInvariant {
    fn holds(state: &GameState) -> bool {
        winning_marks(state.board()).len() <= 1
    }

    fn description() -> &'static str {
        "At most one mark has three in a row"
    }
}
