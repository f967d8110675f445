//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Rules are kept apart from board
//! storage so the engine, the strategies and the invariants all judge
//! positions the same way.

pub mod draw;
pub mod win;

pub use draw::detect_draw;
pub use win::{LINES, detect_winner, winning_marks};

use super::{Board, GameResult};

/// Derives the result of a board.
///
/// The winner check runs first: a full board whose last move completed a
/// line is a win, not a draw.
pub fn evaluate(board: &Board) -> GameResult {
    if let Some(mark) = detect_winner(board) {
        GameResult::Win(mark)
    } else if detect_draw(board) {
        GameResult::Draw
    } else {
        GameResult::InProgress
    }
}
