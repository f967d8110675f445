//! Intermediate tier: one-ply greedy.

use super::Strategy;
use super::random::RandomStrategy;
use crate::games::tictactoe::rules::detect_winner;
use crate::games::tictactoe::{Board, Coordinate, Mark};
use rand::RngCore;
use tracing::{debug, instrument};

/// Wins if it can, blocks if it must, otherwise plays randomly.
///
/// Both scans run in row-major order and take the first match, so the
/// choice is deterministic whenever a win or block exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyStrategy;

/// First empty cell (row-major) where `mark` would complete a line.
pub fn winning_cell(board: &Board, mark: Mark) -> Option<Coordinate> {
    board.empty_cells().into_iter().find(|&coord| {
        board
            .place(coord, mark)
            .is_ok_and(|next| detect_winner(&next) == Some(mark))
    })
}

impl Strategy for GreedyStrategy {
    #[instrument(skip(self, board, rng))]
    fn choose(&self, board: &Board, mark: Mark, rng: &mut dyn RngCore) -> Option<Coordinate> {
        if let Some(coord) = winning_cell(board, mark) {
            debug!(%coord, "Taking the win");
            return Some(coord);
        }
        if let Some(coord) = winning_cell(board, mark.opponent()) {
            debug!(%coord, "Blocking");
            return Some(coord);
        }
        RandomStrategy::pick(board, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Cell;
    use Cell::{Empty as E, Occupied as P};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const X: Cell = P(Mark::X);
    const O: Cell = P(Mark::O);

    #[test]
    fn test_prefers_win_over_block() {
        // X X _ / O _ _ / _ _ _ with X to play.
        let board = Board::from_rows([[X, X, E], [O, E, E], [E, E, E]]);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            GreedyStrategy.choose(&board, Mark::X, &mut rng),
            Coordinate::new(0, 2)
        );
    }

    #[test]
    fn test_blocks_opponent_line() {
        // O O _ / X _ _ / _ _ _ with X to play.
        let board = Board::from_rows([[O, O, E], [X, E, E], [E, E, E]]);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            GreedyStrategy.choose(&board, Mark::X, &mut rng),
            Coordinate::new(0, 2)
        );
    }

    #[test]
    fn test_win_beats_block_even_when_block_comes_first() {
        // O threatens (0,2); X can win at (1,2).
        let board = Board::from_rows([[O, O, E], [X, X, E], [E, E, E]]);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            GreedyStrategy.choose(&board, Mark::X, &mut rng),
            Coordinate::new(1, 2)
        );
    }

    #[test]
    fn test_first_threat_row_major() {
        // O threatens both (0,2) and (2,0); the earlier cell is blocked.
        let board = Board::from_rows([[O, O, E], [O, X, E], [E, E, X]]);
        assert_eq!(winning_cell(&board, Mark::O), Coordinate::new(0, 2));
    }
}
