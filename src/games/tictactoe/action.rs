//! Move rejection.
//!
//! An illegal move is always reported to the caller. The engine never
//! overwrites a cell or plays past the end of a game.

use super::position::Coordinate;
use super::types::GameResult;

/// Error returned when a move cannot be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IllegalMoveError {
    /// The addressed cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Coordinate),

    /// The game has already ended.
    #[display("Game is already over ({})", _0)]
    GameOver(GameResult),
}

impl std::error::Error for IllegalMoveError {}
