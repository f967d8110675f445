//! Move engine: the turn state machine.
//!
//! Every transition is a pure function from one [`GameState`] to the next.
//! The engine keeps nothing between calls; the caller owns the current
//! state and feeds it back in.

use super::action::IllegalMoveError;
use super::contracts::{Contract, MoveContract};
use super::rules::evaluate;
use super::strategy::{Difficulty, Strategy};
use super::{Coordinate, GameState};
use rand::RngCore;
use tracing::{debug, error, instrument, warn};

impl GameState {
    /// Places the side-to-move's mark at `coord` and returns the next state.
    ///
    /// The result is re-derived from the new board and the turn passes to
    /// the other mark, even when this move ends the game.
    ///
    /// # Errors
    ///
    /// - [`IllegalMoveError::GameOver`] if the game has already ended
    /// - [`IllegalMoveError::CellOccupied`] if the cell holds a mark
    ///
    /// On error `self` is untouched, so the caller can simply retry.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn apply_player_move(&self, coord: Coordinate) -> Result<GameState, IllegalMoveError> {
        MoveContract::pre(self, &coord).inspect_err(|err| warn!(%err, "Move rejected"))?;

        let board = self.board.place(coord, self.turn)?;
        let next = GameState {
            board,
            turn: self.turn.opponent(),
            result: evaluate(&board),
        };

        if cfg!(debug_assertions)
            && let Err(failures) = MoveContract::post(self, &next)
        {
            panic!("Move engine broke its postcondition: {}", failures.join("; "));
        }

        debug!(%coord, result = ?next.result, "Move applied");
        Ok(next)
    }

    /// Lets the automated opponent move for the side to move.
    ///
    /// The cell is picked by the strategy behind `difficulty`, drawing any
    /// randomness from `rng`. Returns `self` unchanged when the game is
    /// over or the board is full; this is a no-op, never an error.
    #[instrument(skip(self, rng), fields(turn = %self.turn))]
    pub fn apply_automated_move(&self, difficulty: Difficulty, rng: &mut dyn RngCore) -> GameState {
        debug!(%difficulty, "Automated opponent to move");
        self.apply_strategy_move(difficulty.strategy(), rng)
    }

    /// Plays the cell `strategy` picks.
    ///
    /// A strategy that offers no legal cell on a live board is a defect:
    /// debug builds panic, release builds log it and take the first empty
    /// cell so the game still advances.
    pub(super) fn apply_strategy_move(&self, strategy: &dyn Strategy, rng: &mut dyn RngCore) -> GameState {
        if self.result.is_terminal() || self.board.is_full() {
            debug!(result = ?self.result, "No automated move to make");
            return *self;
        }

        let picked = strategy
            .choose(&self.board, self.turn, rng)
            .filter(|&coord| self.board.is_legal(coord));
        let coord = match picked {
            Some(coord) => coord,
            None => {
                if cfg!(debug_assertions) {
                    panic!("Strategy offered no legal cell on a live board:\n{}", self.board);
                }
                error!(board = %self.board, "Strategy offered no legal cell, taking first empty");
                match self.board.empty_cells().first() {
                    Some(&coord) => coord,
                    None => return *self,
                }
            }
        };
        debug!(%coord, "Automated opponent chose cell");

        match self.apply_player_move(coord) {
            Ok(next) => next,
            Err(err) => unreachable!("Live game rejected empty cell {}: {}", coord, err),
        }
    }
}
