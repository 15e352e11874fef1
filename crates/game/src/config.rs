//! Session configuration loaded from TOML

use std::path::{Path, PathBuf};

use grid_core::{Difficulty, GridError, DEFAULT_BOARD_SIZE, MIN_BOARD_SIZE};
use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};

/// Chance that an easy-tier move skips the search and plays a random cell.
pub const DEFAULT_EASY_RANDOM_CHANCE: f64 = 0.5;

/// Game configuration. Every field is optional in the file.
///
/// ```toml
/// board_size = 4
/// difficulty = "hard"
/// easy_random_chance = 0.5
/// seed = 1234
/// stats_path = "node_counts.json"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub board_size: usize,
    /// Unknown labels load as medium
    pub difficulty: Difficulty,
    pub easy_random_chance: f64,
    /// Seeds the session RNG and the random engine; entropy when absent
    pub seed: Option<u64>,
    /// Where search statistics are written on save
    pub stats_path: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            difficulty: Difficulty::default(),
            easy_random_chance: DEFAULT_EASY_RANDOM_CHANCE,
            seed: None,
            stats_path: None,
        }
    }
}

impl GameConfig {
    /// Reads and validates a TOML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| GameError::io("read config", path, e))?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: GameConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.board_size < MIN_BOARD_SIZE {
            return Err(GridError::InvalidSize {
                size: self.board_size,
            }
            .into());
        }
        if !(0.0..=1.0).contains(&self.easy_random_chance) {
            return Err(GameError::InvalidRandomChance {
                value: self.easy_random_chance,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
