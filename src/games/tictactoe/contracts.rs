//! Contract-based validation for tic-tac-toe.
//!
//! Contracts define correctness through preconditions and postconditions:
//! `{P(state, coord)} place {Q(before, after)}`.

use super::action::IllegalMoveError;
use super::invariants::check_state;
use super::{Coordinate, GameState};
use tracing::{instrument, warn};

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), IllegalMoveError>;

    /// Checks postconditions after applying the action.
    ///
    /// Returns the descriptions of any violated invariants.
    fn post(before: &S, after: &S) -> Result<(), Vec<String>>;
}

/// Precondition: the game must still be in progress.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects moves on a won or drawn game.
    #[instrument(skip(state))]
    pub fn check(state: &GameState) -> Result<(), IllegalMoveError> {
        if state.result().is_terminal() {
            Err(IllegalMoveError::GameOver(state.result()))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the addressed cell must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects moves on occupied cells.
    #[instrument(skip(state))]
    pub fn check(coord: &Coordinate, state: &GameState) -> Result<(), IllegalMoveError> {
        if state.board().is_legal(*coord) {
            Ok(())
        } else {
            Err(IllegalMoveError::CellOccupied(*coord))
        }
    }
}

/// Contract for placing the side-to-move's mark.
///
/// Preconditions:
/// - Game is in progress
/// - Cell is empty
///
/// Postconditions:
/// - Exactly one more mark on the board
/// - All [`TicTacToeInvariants`](super::invariants::TicTacToeInvariants) hold
pub struct MoveContract;

impl Contract<GameState, Coordinate> for MoveContract {
    fn pre(state: &GameState, coord: &Coordinate) -> Result<(), IllegalMoveError> {
        GameNotOver::check(state)?;
        CellIsEmpty::check(coord, state)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), Vec<String>> {
        let mut failures: Vec<String> = check_state(after)
            .err()
            .unwrap_or_default()
            .into_iter()
            .map(|v| v.description)
            .collect();

        let placed = before
            .board()
            .empty_cells()
            .len()
            .saturating_sub(after.board().empty_cells().len());
        if placed != 1 {
            failures.push(format!("Expected one new mark, found {}", placed));
        }

        if failures.is_empty() {
            Ok(())
        } else {
            warn!(?failures, "Move postcondition failed");
            Err(failures)
        }
    }
}
