//! Rules configuration.

use crate::PlayerMarker;
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Tunable rule options.
///
/// The default reproduces the classic engine: x moves first and moves on a
/// decided game are processed like any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
#[setters(prefix = "with_")]
pub struct RulesConfig {
    /// Player who moves first in a new game.
    #[serde(default = "default_first_player")]
    first_player: PlayerMarker,

    /// Reject every move once the game has a winner or is tied.
    #[serde(default)]
    lock_finished_games: bool,
}

fn default_first_player() -> PlayerMarker {
    PlayerMarker::X
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            first_player: default_first_player(),
            lock_finished_games: false,
        }
    }
}

impl RulesConfig {
    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|source| ConfigError::Parse { source })?;
        debug!(?config, "Parsed rules config");
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content =
            std::fs::read_to_string(path.as_ref()).map_err(|source| ConfigError::Read {
                path: path.as_ref().to_path_buf(),
                source,
            })?;

        let config = Self::from_toml_str(&content)?;
        info!(
            first_player = %config.first_player,
            lock_finished_games = config.lock_finished_games,
            "Config loaded successfully"
        );
        Ok(config)
    }
}

/// Configuration error.
#[derive(Debug, Display, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[display("Failed to read config file {}: {}", path.display(), source)]
    Read {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The file is not valid rules configuration.
    #[display("Failed to parse config: {}", source)]
    Parse {
        /// Underlying TOML error.
        source: toml::de::Error,
    },
}
