//! Balanced marks invariant: X leads O by zero or one.

use super::super::{GameState, Mark};
use super::Invariant;
use tracing::warn;

/// Invariant: X always moves first and sides alternate, so the X count
/// equals the O count or exceeds it by exactly one.
pub struct BalancedMarksInvariant;

impl Invariant<GameState> for BalancedMarksInvariant {
    fn holds(state: &GameState) -> bool {
        let x_count = state.board().count(Mark::X);
        let o_count = state.board().count(Mark::O);
        let valid = x_count == o_count || x_count == o_count + 1;
        if !valid {
            warn!(x_count, o_count, "Mark balance violated");
        }
        valid
    }

    fn description() -> &'static str {
        "X count equals O count or leads by one"
    }
}
