//! TOML configuration for training and match play

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Validation(String),
}

/// Q-learning training schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    /// Number of self-play episodes.
    pub episodes: u32,
    /// Learning rate.
    pub alpha: f64,
    /// Discount factor.
    pub gamma: f64,
    /// Exploration rate at episode zero.
    pub epsilon_start: f64,
    /// Exploration floor.
    pub epsilon_min: f64,
    /// Multiplicative decay applied after every episode.
    pub epsilon_decay: f64,
    /// Search depth of the minimax training opponent.
    pub opponent_depth: u8,
    /// Evaluate and checkpoint every N episodes (0 disables both).
    pub eval_every: u32,
    /// Games per evaluation.
    pub eval_games: u32,
    /// Where checkpoints and metrics are written.
    pub checkpoint_dir: PathBuf,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            episodes: 25_000,
            alpha: 0.1,
            gamma: 0.99,
            epsilon_start: 1.0,
            epsilon_min: 0.1,
            epsilon_decay: 0.99975,
            opponent_depth: 2,
            eval_every: 1500,
            eval_games: 500,
            checkpoint_dir: PathBuf::from("saved_models"),
        }
    }
}

/// Settings for agent-vs-agent matches.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchSettings {
    /// Number of games to play.
    pub games: u32,
    /// Search depth for minimax participants.
    pub depth: u8,
    /// Maximum plies per game before scoring it a draw.
    pub max_plies: u32,
    /// Whether to alternate colors each game.
    pub alternate_colors: bool,
    /// Print progress during the match.
    pub verbose: bool,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            games: 100,
            depth: 2,
            max_plies: 200,
            alternate_colors: true,
            verbose: true,
        }
    }
}

/// Top-level configuration, loadable from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub training: TrainingConfig,
    #[serde(rename = "match")]
    pub match_play: MatchSettings,
}

impl ArenaConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: ArenaConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!(
                "Warning: config file '{}' not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.training;
        if t.episodes == 0 {
            return Err(ConfigError::Validation(
                "training.episodes must be > 0".into(),
            ));
        }
        if t.alpha <= 0.0 || t.alpha > 1.0 {
            return Err(ConfigError::Validation(
                "training.alpha must be in (0, 1]".into(),
            ));
        }
        if !(0.0..=1.0).contains(&t.gamma) {
            return Err(ConfigError::Validation(
                "training.gamma must be in [0, 1]".into(),
            ));
        }
        if !(0.0..=1.0).contains(&t.epsilon_start) || !(0.0..=1.0).contains(&t.epsilon_min) {
            return Err(ConfigError::Validation(
                "training epsilons must be in [0, 1]".into(),
            ));
        }
        if t.epsilon_min > t.epsilon_start {
            return Err(ConfigError::Validation(
                "training.epsilon_min must be <= training.epsilon_start".into(),
            ));
        }
        if t.epsilon_decay <= 0.0 || t.epsilon_decay > 1.0 {
            return Err(ConfigError::Validation(
                "training.epsilon_decay must be in (0, 1]".into(),
            ));
        }
        if t.opponent_depth == 0 {
            return Err(ConfigError::Validation(
                "training.opponent_depth must be >= 1".into(),
            ));
        }
        if t.eval_every > 0 && t.eval_games == 0 {
            return Err(ConfigError::Validation(
                "training.eval_games must be > 0 when evaluation is enabled".into(),
            ));
        }

        let m = &self.match_play;
        if m.games == 0 {
            return Err(ConfigError::Validation("match.games must be > 0".into()));
        }
        if m.max_plies == 0 {
            return Err(ConfigError::Validation(
                "match.max_plies must be > 0".into(),
            ));
        }
        Ok(())
    }
}
