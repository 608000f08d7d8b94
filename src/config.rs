//! Runtime configuration, read from an optional TOML file.
//!
//! Every field has a default, so an empty file (or no file) yields the
//! stock timings.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ArcadeError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArcadeConfig {
    pub frame: FrameConfig,
    pub shooter: ShooterTuning,
    pub snake: SnakeTuning,
    pub jump: JumpTuning,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

/// Simulation pacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    /// Length of one simulation tick.
    pub tick_ms: u64,
    /// Most ticks run in a single catch-up burst after a stall.
    pub max_catch_up: u32,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            tick_ms: 30,
            max_catch_up: 5,
        }
    }
}

/// Shooter cadences and rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShooterTuning {
    pub shoot_cooldown_ms: u64,
    pub spawn_interval_ms: u64,
    pub enemy_fire_interval_ms: u64,
    pub boss_fire_interval_ms: u64,
    pub boss_move_interval_ms: u64,
    pub pause_debounce_ms: u64,
    pub game_over_banner_ms: u64,
    pub starting_lives: u32,
    /// Score that summons the boss.
    pub boss_trigger_score: u32,
    /// Score from which spawned enemies may shoot.
    pub shooter_unlock_score: u32,
}

impl Default for ShooterTuning {
    fn default() -> Self {
        Self {
            shoot_cooldown_ms: 250,
            spawn_interval_ms: 1000,
            enemy_fire_interval_ms: 1500,
            boss_fire_interval_ms: 1200,
            boss_move_interval_ms: 100,
            pause_debounce_ms: 300,
            game_over_banner_ms: 1500,
            starting_lives: 3,
            boss_trigger_score: 10,
            shooter_unlock_score: 5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnakeTuning {
    pub move_interval_ms: u64,
    /// Holding down this long toggles pause.
    pub pause_hold_ms: u64,
    /// Holding up + right this long leaves the game.
    pub exit_hold_ms: u64,
    pub game_over_banner_ms: u64,
}

impl Default for SnakeTuning {
    fn default() -> Self {
        Self {
            move_interval_ms: 120,
            pause_hold_ms: 1000,
            exit_hold_ms: 1000,
            game_over_banner_ms: 1500,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JumpTuning {
    pub game_over_banner_ms: u64,
}

impl Default for JumpTuning {
    fn default() -> Self {
        Self {
            game_over_banner_ms: 1500,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Where high scores live.  Defaults to `$HOME/.oled_arcade_scores.toml`.
    pub scores_path: Option<PathBuf>,
}

impl StorageConfig {
    pub fn scores_path(&self) -> PathBuf {
        self.scores_path.clone().unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".oled_arcade_scores.toml")
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `env_logger` filter used when `RUST_LOG` is unset.
    pub level: String,
    /// Log destination.  Defaults to `oled_arcade.log` in the temp dir so
    /// log lines never land on the game screen.
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl LoggingConfig {
    pub fn file(&self) -> PathBuf {
        self.file
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("oled_arcade.log"))
    }
}

impl ArcadeConfig {
    pub fn load(path: &Path) -> Result<Self, ArcadeError> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text, path)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ArcadeError> {
        Self::parse(text, Path::new("<inline>"))
    }

    fn parse(text: &str, path: &Path) -> Result<Self, ArcadeError> {
        let config: ArcadeConfig =
            toml::from_str(text).map_err(|source| ArcadeError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ArcadeError> {
        if self.frame.tick_ms == 0 {
            return Err(ArcadeError::InvalidConfig(
                "frame.tick_ms must be positive".to_string(),
            ));
        }
        if self.shooter.starting_lives == 0 {
            return Err(ArcadeError::InvalidConfig(
                "shooter.starting_lives must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
