//! Tic-tac-toe game engine.
//!
//! - [`Board`] and the [`rules`] answer questions about a position.
//! - [`GameState`] moves forward through
//!   [`apply_player_move`](GameState::apply_player_move) and
//!   [`apply_automated_move`](GameState::apply_automated_move).
//! - [`strategy`] holds the automated opponent tiers.

mod action;
mod contracts;
mod engine;
mod position;
mod types;

pub mod invariants;
pub mod rules;
pub mod strategy;

pub use action::IllegalMoveError;
pub use contracts::{CellIsEmpty, Contract, GameNotOver, MoveContract};
pub use position::Coordinate;
pub use strategy::{Difficulty, GreedyStrategy, MinimaxStrategy, RandomStrategy, Strategy};
pub use types::{Board, Cell, GameResult, GameState, Mark};
