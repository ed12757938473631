//! Game configuration loaded from TOML.

use crate::games::tictactoe::Player;
use crate::games::tictactoe::search::MAX_DEPTH;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// Settings for a game session and its terminal front end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Plies the opponent searches ahead.
    #[serde(default = "default_search_depth")]
    search_depth: u8,

    /// Player the human controls; player one moves first.
    #[serde(default = "default_human_player")]
    human_player: Player,

    /// File the terminal UI logs to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_search_depth() -> u8 {
    5
}

fn default_human_player() -> Player {
    Player::One
}

fn default_log_file() -> PathBuf {
    PathBuf::from("strictly_tictactoe.log")
}

impl GameConfig {
    /// Creates a configuration, clamping the depth to the board size.
    #[instrument]
    pub fn new(search_depth: u8, human_player: Player) -> Self {
        Self {
            search_depth: clamp_depth(search_depth),
            human_player,
            log_file: default_log_file(),
        }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let mut config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.search_depth = clamp_depth(config.search_depth);

        info!(
            search_depth = config.search_depth,
            human_player = %config.human_player,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Overrides the search depth.
    pub fn with_search_depth(mut self, search_depth: u8) -> Self {
        self.search_depth = clamp_depth(search_depth);
        self
    }

    /// Overrides the human's player.
    pub fn with_human_player(mut self, human_player: Player) -> Self {
        self.human_player = human_player;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            search_depth: default_search_depth(),
            human_player: default_human_player(),
            log_file: default_log_file(),
        }
    }
}

fn clamp_depth(depth: u8) -> u8 {
    if depth > MAX_DEPTH {
        warn!(depth, max = MAX_DEPTH, "Search depth clamped");
        MAX_DEPTH
    } else {
        depth
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
