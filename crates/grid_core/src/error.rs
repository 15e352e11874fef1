//! Error types for board construction and move validation

use std::fmt;

use thiserror::Error;

use crate::types::MIN_BOARD_SIZE;

/// Why a move was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveRejection {
    Occupied,
    GameOver,
    OutOfBounds,
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveRejection::Occupied => write!(f, "cell is already occupied"),
            MoveRejection::GameOver => write!(f, "game already over"),
            MoveRejection::OutOfBounds => write!(f, "cell is outside the board"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GridError {
    #[error("invalid move at ({row}, {col}): {reason}")]
    InvalidMove {
        row: usize,
        col: usize,
        reason: MoveRejection,
    },

    #[error("board size {size} is too small (minimum {})", MIN_BOARD_SIZE)]
    InvalidSize { size: usize },

    #[error("row {row} has {got} cells, expected {expected}")]
    DimensionMismatch {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("invalid character '{character}' at ({row}, {col})")]
    InvalidCell {
        character: char,
        row: usize,
        col: usize,
    },
}

impl GridError {
    pub fn is_invalid_move(&self) -> bool {
        matches!(self, GridError::InvalidMove { .. })
    }
}

pub type Result<T> = std::result::Result<T, GridError>;
