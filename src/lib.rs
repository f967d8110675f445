//! Strictly Tic-Tac-Toe - a pure tic-tac-toe engine
//!
//! The engine is a set of pure state transitions: the caller holds a
//! [`GameState`], hands it to the engine with a move, and gets the next
//! state back. Nothing is shared or mutated, so any number of games can
//! run side by side.
//!
//! # Architecture
//!
//! - **Board model**: [`Board`], [`Coordinate`] and the [`rules`]
//! - **Move engine**: [`GameState::apply_player_move`] and
//!   [`GameState::apply_automated_move`] with three [`Difficulty`] tiers
//! - **Session**: [`MatchSetup`] / [`Match`] for multi-round play
//! - **Console**: a line-oriented terminal front end
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{Coordinate, Difficulty, GameResult, GameState, Mark};
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(1);
//! let state = GameState::new()
//!     .apply_player_move(Coordinate::new(0, 0).unwrap())
//!     .unwrap()
//!     .apply_automated_move(Difficulty::Impossible, &mut rng);
//!
//! assert_eq!(state.turn(), Mark::X);
//! assert_eq!(state.result(), GameResult::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod games;
mod session;

pub mod console;

// Crate-level exports - Configuration
pub use config::{Config, ConfigError};

// Crate-level exports - Session management
pub use session::{Match, MatchSetup, PlayerCount, PlayerType};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, Cell, CellIsEmpty, Contract, Coordinate, Difficulty, GameNotOver, GameResult,
    GameState, GreedyStrategy, IllegalMoveError, Mark, MinimaxStrategy, MoveContract,
    RandomStrategy, Strategy, invariants, rules, strategy,
};
