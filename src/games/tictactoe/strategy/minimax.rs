//! Impossible tier: exhaustive minimax.
//!
//! The tree is at most 9 plies deep, so every continuation is searched to
//! the end without pruning or caching.

use super::Strategy;
use crate::games::tictactoe::rules::evaluate;
use crate::games::tictactoe::{Board, Coordinate, GameResult, Mark};
use rand::RngCore;
use tracing::{debug, instrument};

/// Score of a won game before the depth penalty.
const WIN: i32 = 10;

/// Searches the full game tree and plays the best move for its mark.
///
/// Outcomes rank Win > Draw > Loss. Among wins a shorter path scores
/// higher, among losses a longer one does. Equal scores go to the first
/// cell in row-major order.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimaxStrategy;

impl MinimaxStrategy {
    /// Value of `board` for `me`, with `to_move` about to play.
    fn score(board: &Board, me: Mark, to_move: Mark, depth: i32) -> i32 {
        match evaluate(board) {
            GameResult::Win(mark) if mark == me => WIN - depth,
            GameResult::Win(_) => depth - WIN,
            GameResult::Draw => 0,
            GameResult::InProgress => {
                let scores = board.empty_cells().into_iter().filter_map(|coord| {
                    board
                        .place(coord, to_move)
                        .ok()
                        .map(|next| Self::score(&next, me, to_move.opponent(), depth + 1))
                });
                if to_move == me {
                    scores.max().unwrap_or(0)
                } else {
                    scores.min().unwrap_or(0)
                }
            }
        }
    }

    /// Best cell for `mark` with its score, ties to the earliest cell.
    pub fn best_move(board: &Board, mark: Mark) -> Option<(Coordinate, i32)> {
        let mut best: Option<(Coordinate, i32)> = None;
        for coord in board.empty_cells() {
            let Ok(next) = board.place(coord, mark) else {
                continue;
            };
            let score = Self::score(&next, mark, mark.opponent(), 1);
            if best.is_none_or(|(_, top)| score > top) {
                best = Some((coord, score));
            }
        }
        best
    }
}

impl Strategy for MinimaxStrategy {
    #[instrument(skip(self, board, _rng))]
    fn choose(&self, board: &Board, mark: Mark, _rng: &mut dyn RngCore) -> Option<Coordinate> {
        let (coord, score) = Self::best_move(board, mark)?;
        debug!(%coord, score, "Minimax choice");
        Some(coord)
    }
}
