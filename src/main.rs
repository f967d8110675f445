//! Strictly Tic-Tac-Toe - terminal front end.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use rand::SeedableRng;
use rand::rngs::StdRng;
use strictly_tictactoe::{Config, console};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);
    run(cli)
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[instrument(skip_all)]
fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Loading {}", path.display()))?,
        None => Config::default(),
    }
    .with_overrides(cli.players, cli.difficulty, cli.mark, cli.seed);

    let mut rng = match config.seed() {
        Some(seed) => StdRng::seed_from_u64(*seed),
        None => StdRng::from_os_rng(),
    };

    let mut game = config.match_setup()?.resolve(&mut rng);
    info!(automated = ?game.automated_mark(), "Starting session");

    let stdin = std::io::stdin();
    let results = console::run(&mut game, &mut rng, stdin.lock(), std::io::stdout())?;
    info!(rounds = results.len(), "Goodbye");
    Ok(())
}
