//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Coordinate, Mark};

const fn c(row: usize, col: usize) -> Coordinate {
    Coordinate::ALL[row * 3 + col]
}

/// The 8 winning lines: rows, columns, diagonals.
pub const LINES: [[Coordinate; 3]; 8] = [
    // Rows
    [c(0, 0), c(0, 1), c(0, 2)],
    [c(1, 0), c(1, 1), c(1, 2)],
    [c(2, 0), c(2, 1), c(2, 2)],
    // Columns
    [c(0, 0), c(1, 0), c(2, 0)],
    [c(0, 1), c(1, 1), c(2, 1)],
    [c(0, 2), c(1, 2), c(2, 2)],
    // Diagonals
    [c(0, 0), c(1, 1), c(2, 2)],
    [c(0, 2), c(1, 1), c(2, 0)],
];

/// Returns the mark holding all three cells of `line`, if any.
fn line_owner(board: &Board, [a, b, c]: [Coordinate; 3]) -> Option<Mark> {
    match board.get(a) {
        Cell::Occupied(mark) if board.get(b) == board.get(a) && board.get(c) == board.get(a) => {
            Some(mark)
        }
        _ => None,
    }
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if all three cells of any line hold that mark,
/// `None` otherwise.
pub fn detect_winner(board: &Board) -> Option<Mark> {
    LINES.iter().find_map(|&line| line_owner(board, line))
}

/// Every mark that owns a completed line, X first.
///
/// Legal play yields at most one; more than one means the board was
/// built by hand or the engine is broken.
pub fn winning_marks(board: &Board) -> Vec<Mark> {
    [Mark::X, Mark::O]
        .into_iter()
        .filter(|&mark| {
            LINES
                .iter()
                .any(|&line| line_owner(board, line) == Some(mark))
        })
        .collect()
}
