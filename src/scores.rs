//! Best results, persisted as a small TOML file.

use std::fs;
use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::ArcadeError;
use crate::menu::GameKind;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighScores {
    /// Furthest shooter stage reached.
    pub shooter_stage: u32,
    /// Best shooter score (score resets with each new stage).
    pub shooter_score: u32,
    pub snake: u32,
    pub jump: u32,
}

impl HighScores {
    /// Missing or unreadable files yield empty scores.
    pub fn load(path: &Path) -> Self {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Self::default(),
            Err(e) => {
                warn!("cannot read scores from {}: {e}", path.display());
                return Self::default();
            }
        };
        toml::from_str(&text).unwrap_or_else(|e| {
            warn!("ignoring corrupt scores file {}: {e}", path.display());
            Self::default()
        })
    }

    pub fn save(&self, path: &Path) -> Result<(), ArcadeError> {
        let text = toml::to_string(self)?;
        fs::write(path, text)?;
        info!("saved high scores to {}", path.display());
        Ok(())
    }

    pub fn best(&self, game: GameKind) -> Option<u32> {
        match game {
            GameKind::Shooter => Some(self.shooter_stage),
            GameKind::Snake => Some(self.snake),
            GameKind::Jump => Some(self.jump),
            GameKind::ButtonTest => None,
        }
    }

    /// Returns `true` when `value` beats the stored shooter score.
    pub fn record_shooter_score(&mut self, value: u32) -> bool {
        if value > self.shooter_score {
            self.shooter_score = value;
            true
        } else {
            false
        }
    }

    /// Returns `true` when `value` beats the stored best.
    pub fn record(&mut self, game: GameKind, value: u32) -> bool {
        let slot = match game {
            GameKind::Shooter => &mut self.shooter_stage,
            GameKind::Snake => &mut self.snake,
            GameKind::Jump => &mut self.jump,
            GameKind::ButtonTest => return false,
        };
        if value > *slot {
            *slot = value;
            true
        } else {
            false
        }
    }
}
