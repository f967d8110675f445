//! Result invariant: the stored result is what the board says.

use super::super::GameState;
use super::super::rules::evaluate;
use super::Invariant;

/// Invariant: `GameState::result` equals [`evaluate`] of its board.
pub struct ResultDerivedInvariant;

impl Invariant<GameState> for ResultDerivedInvariant {
    fn holds(state: &GameState) -> bool {
        state.result() == evaluate(state.board())
    }

    fn description() -> &'static str {
        "Result is derived from the board"
    }
}
