//! Match configuration loaded from TOML.

use crate::games::tictactoe::{Difficulty, Mark};
use crate::session::{MatchSetup, PlayerCount};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Defaults for a terminal session.
///
/// ```toml
/// players = 1
/// difficulty = "impossible"
/// human_mark = "X"
/// seed = 42
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Config {
    /// Number of human players (1 or 2).
    #[serde(default = "default_players")]
    players: u8,

    /// Automated opponent tier.
    #[serde(default)]
    difficulty: Difficulty,

    /// Side the human plays in one-player matches.
    #[serde(default)]
    human_mark: Option<Mark>,

    /// Seed for the automated opponent's random source.
    #[serde(default)]
    seed: Option<u64>,
}

#[instrument]
fn default_players() -> u8 {
    1
}

impl Config {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.player_count()?;

        info!(players = config.players, difficulty = %config.difficulty, "Config loaded");
        Ok(config)
    }

    /// Overrides fields with the values given on the command line.
    pub fn with_overrides(
        mut self,
        players: Option<u8>,
        difficulty: Option<Difficulty>,
        human_mark: Option<Mark>,
        seed: Option<u64>,
    ) -> Self {
        self.players = players.unwrap_or(self.players);
        self.difficulty = difficulty.unwrap_or(self.difficulty);
        self.human_mark = human_mark.or(self.human_mark);
        self.seed = seed.or(self.seed);
        self
    }

    /// Validated player count.
    pub fn player_count(&self) -> Result<PlayerCount, ConfigError> {
        PlayerCount::try_from(self.players).map_err(ConfigError::new)
    }

    /// Builds the match setup described by this config.
    #[instrument(skip(self))]
    pub fn match_setup(&self) -> Result<MatchSetup, ConfigError> {
        Ok(MatchSetup::new(self.player_count()?, self.difficulty, self.human_mark))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            players: default_players(),
            difficulty: Difficulty::default(),
            human_mark: None,
            seed: None,
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
