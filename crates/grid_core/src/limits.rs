//! Search limits shared by every engine implementation.
//!
//! There is no clock here: a search always runs to its depth limit. The limits
//! only say how deep to look and which evaluator table applies.

use crate::types::Difficulty;

/// How far an engine should search and with which scoring table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Maximum search depth in plies, never below 1
    pub depth: u8,
    /// Difficulty whose evaluator table is in effect
    pub difficulty: Difficulty,
}

impl SearchLimits {
    /// Limits with an explicit depth. A depth of 0 is raised to 1.
    pub fn new(depth: u8, difficulty: Difficulty) -> Self {
        Self {
            depth: depth.max(1),
            difficulty,
        }
    }

    /// Limits derived from the difficulty's own depth mapping.
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        Self::new(difficulty.depth(), difficulty)
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::for_difficulty(Difficulty::default())
    }
}

#[cfg(test)]
#[path = "limits_tests.rs"]
mod limits_tests;
