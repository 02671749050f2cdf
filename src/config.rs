use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::game::{Board, BoardConfig, Player};

/// Player names shown in the header and the final result.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub player_a: String,
    pub player_b: String,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            player_a: Player::A.label().to_string(),
            player_b: Player::B.label().to_string(),
        }
    }
}

impl PlayersConfig {
    pub fn name(&self, player: Player) -> &str {
        match player {
            Player::A => &self.player_a,
            Player::B => &self.player_b,
        }
    }
}

/// Where log output goes. Nothing is logged when `file` is unset, since the
/// terminal is owned by the game screen.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LogConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            file: None,
            level: "info".to_string(),
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub players: PlayersConfig,
    pub log: LogConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.board.validate()?;
        if !self.board.is_winnable() {
            return Err(ConfigError::Validation(format!(
                "board.run_length ({}) must be <= max(board.height, board.width) ({})",
                self.board.run_length,
                self.board.height.max(self.board.width)
            )));
        }

        if self.players.player_a.trim().is_empty() || self.players.player_b.trim().is_empty() {
            return Err(ConfigError::Validation(
                "player names must not be empty".into(),
            ));
        }
        if self.players.player_a == self.players.player_b {
            return Err(ConfigError::Validation(
                "players.player_a and players.player_b must differ".into(),
            ));
        }

        if self.log.level.parse::<tracing::Level>().is_err() {
            return Err(ConfigError::Validation(format!(
                "log.level '{}' is not one of trace, debug, info, warn, error",
                self.log.level
            )));
        }

        Ok(())
    }

    /// Build an empty board with the configured dimensions.
    pub fn new_board(&self) -> Result<Board, ConfigError> {
        Ok(Board::new(self.board)?)
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
