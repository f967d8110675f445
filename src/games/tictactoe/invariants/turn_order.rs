//! Turn order invariant: the side to move follows from the mark counts.

use super::super::{GameState, Mark};
use super::Invariant;

/// Invariant: X is to move exactly when both sides have placed the same
/// number of marks.
///
/// The turn flips after every accepted move, including the one that ends
/// the game, so this holds for terminal states too.
pub struct TurnOrderInvariant;

impl Invariant<GameState> for TurnOrderInvariant {
    fn holds(state: &GameState) -> bool {
        let board = state.board();
        let expected = if board.count(Mark::X) == board.count(Mark::O) {
            Mark::X
        } else {
            Mark::O
        };
        state.turn() == expected
    }

    fn description() -> &'static str {
        "Sides alternate (X, O, X, O, ...)"
    }
}
