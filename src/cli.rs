//! Command-line interface for strictly_tictactoe.

use clap::Parser;
use std::path::PathBuf;
use strictly_tictactoe::{Difficulty, Mark};

/// Strictly Tic-Tac-Toe - play in the terminal against a friend or the machine
#[derive(Parser, Debug)]
#[command(name = "strictly_tictactoe")]
#[command(about = "Terminal tic-tac-toe with an unbeatable opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML file with session defaults
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of human players (1 or 2)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub players: Option<u8>,

    /// Automated opponent tier: easy, intermediate or impossible
    #[arg(short, long)]
    pub difficulty: Option<Difficulty>,

    /// Side the human plays in a one-player game (x or o)
    #[arg(short, long)]
    pub mark: Option<Mark>,

    /// Seed for reproducible automated play
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log engine decisions at debug level
    #[arg(short, long)]
    pub verbose: bool,
}
