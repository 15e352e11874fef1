//! Error types for the game session

use std::path::PathBuf;

use grid_core::GridError;
use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GameError {
    #[error(transparent)]
    Grid(#[from] GridError),

    #[error("failed to {operation} {}: {source}", .path.display())]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("easy_random_chance {value} must be within 0.0..=1.0")]
    InvalidRandomChance { value: f64 },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl GameError {
    pub(crate) fn io(
        operation: &'static str,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        GameError::Io {
            operation,
            path: path.into(),
            source,
        }
    }
}

/// Convenience type alias for Results using the session's error type
pub type Result<T> = std::result::Result<T, GameError>;
