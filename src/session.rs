//! Match setup and orchestration.
//!
//! A [`MatchSetup`] records the choices made before play starts; resolving
//! it against a random source fixes which side, if any, the automated
//! opponent plays. The resulting [`Match`] owns the current
//! [`GameState`] and swaps it for the engine's next value on every move.

use crate::games::tictactoe::{Coordinate, Difficulty, GameState, IllegalMoveError, Mark};
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// How many humans are at the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PlayerCount {
    /// One human against the automated opponent.
    #[default]
    One,
    /// Two humans sharing the keyboard.
    Two,
}

impl TryFrom<u8> for PlayerCount {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(PlayerCount::One),
            2 => Ok(PlayerCount::Two),
            other => Err(format!("Player count must be 1 or 2, got {}", other)),
        }
    }
}

/// Who is behind a mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerType {
    /// Human player at the terminal.
    Human,
    /// Automated opponent.
    Automated,
}

/// Choices made before a match begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSetup {
    players: PlayerCount,
    difficulty: Difficulty,
    human_mark: Option<Mark>,
}

impl MatchSetup {
    /// Creates a setup. `human_mark` pins the human's side in one-player
    /// matches; it is ignored for two players.
    pub fn new(players: PlayerCount, difficulty: Difficulty, human_mark: Option<Mark>) -> Self {
        Self {
            players,
            difficulty,
            human_mark,
        }
    }

    /// Number of human players.
    pub fn players(&self) -> PlayerCount {
        self.players
    }

    /// Automated opponent tier.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Decides the automated side and starts the first round.
    ///
    /// With one player the automated opponent takes O on Impossible, so
    /// the human moves first; on easier tiers it takes X or O at random.
    /// A pinned `human_mark` overrides both rules.
    #[instrument(skip(rng))]
    pub fn resolve(self, rng: &mut dyn RngCore) -> Match {
        let automated = self.automated_side(rng);
        info!(?automated, difficulty = %self.difficulty, "Match resolved");
        Match {
            setup: self,
            automated,
            state: GameState::new(),
            round: 1,
        }
    }

    /// Mark the automated opponent plays this round, if any.
    fn automated_side(&self, rng: &mut dyn RngCore) -> Option<Mark> {
        match (self.players, self.human_mark) {
            (PlayerCount::Two, _) => None,
            (PlayerCount::One, Some(human)) => Some(human.opponent()),
            (PlayerCount::One, None) if self.difficulty == Difficulty::Impossible => Some(Mark::O),
            (PlayerCount::One, None) => Some(if rng.random_bool(0.5) { Mark::X } else { Mark::O }),
        }
    }
}

impl Default for MatchSetup {
    fn default() -> Self {
        Self::new(PlayerCount::One, Difficulty::default(), None)
    }
}

/// A running match: setup, automated side and the current game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    setup: MatchSetup,
    automated: Option<Mark>,
    state: GameState,
    round: u32,
}

impl Match {
    /// Current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The setup this match was resolved from.
    pub fn setup(&self) -> &MatchSetup {
        &self.setup
    }

    /// Mark played by the automated opponent, if there is one.
    pub fn automated_mark(&self) -> Option<Mark> {
        self.automated
    }

    /// 1-based round counter; rounds share nothing but the setup.
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Who plays `mark` in this match.
    pub fn player_type(&self, mark: Mark) -> PlayerType {
        if self.automated == Some(mark) {
            PlayerType::Automated
        } else {
            PlayerType::Human
        }
    }

    /// True when the game is live and the automated side is to move.
    pub fn is_automated_turn(&self) -> bool {
        !self.state.result().is_terminal() && self.automated == Some(self.state.turn())
    }

    /// Plays a human move for the side to move.
    ///
    /// # Errors
    ///
    /// Propagates [`IllegalMoveError`] from the engine; the match is
    /// unchanged in that case.
    #[instrument(skip(self), fields(round = self.round))]
    pub fn play_human(&mut self, coord: Coordinate) -> Result<&GameState, IllegalMoveError> {
        self.state = self.state.apply_player_move(coord)?;
        Ok(&self.state)
    }

    /// Lets the automated opponent move if it is its turn; otherwise a no-op.
    #[instrument(skip(self, rng), fields(round = self.round))]
    pub fn play_automated(&mut self, rng: &mut dyn RngCore) -> &GameState {
        if self.is_automated_turn() {
            self.state = self.state.apply_automated_move(self.setup.difficulty, rng);
        } else {
            debug!("Not the automated side's turn");
        }
        &self.state
    }

    /// Starts a fresh round with the same setup.
    ///
    /// The automated side is decided again, so on tiers that pick it at
    /// random the human may swap marks between rounds.
    #[instrument(skip(self, rng))]
    pub fn restart(&mut self, rng: &mut dyn RngCore) {
        self.round += 1;
        self.automated = self.setup.automated_side(rng);
        self.state = GameState::new();
        info!(round = self.round, automated = ?self.automated, "New round");
    }
}
