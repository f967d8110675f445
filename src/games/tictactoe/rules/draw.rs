//! Draw detection logic for tic-tac-toe.

use super::super::Board;
use super::win::detect_winner;

/// True iff every cell is occupied and nobody has a line.
pub fn detect_draw(board: &Board) -> bool {
    board.is_full() && detect_winner(board).is_none()
}
