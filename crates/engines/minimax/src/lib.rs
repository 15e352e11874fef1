//! Minimax Grid Engine
//!
//! Iterative-deepening minimax with alpha-beta pruning over a mutable board, scored
//! by a line-counting evaluator whose table depends on the difficulty.

mod eval;
mod search;

use grid_core::{Board, Engine, SearchLimits, SearchResult};
use tracing::debug;

/// Engine behind the Medium and Hard tiers and the searching half of Easy.
///
/// This engine uses:
/// - Minimax with alpha-beta pruning, children in row-major order
/// - Iterative deepening with early exit on a forced win or loss
/// - Per-difficulty line evaluation
#[derive(Debug, Clone, Default)]
pub struct MinimaxEngine {
    /// Node counter for the last search
    nodes: u64,
}

impl MinimaxEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }

    /// Nodes visited by the most recent search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

impl Engine for MinimaxEngine {
    fn search(&mut self, board: &mut Board, limits: &SearchLimits) -> SearchResult {
        self.nodes = 0;

        let outcome =
            search::iterative_deepening(board, limits.depth, limits.difficulty, &mut self.nodes);

        debug!(
            difficulty = %limits.difficulty,
            max_depth = limits.depth,
            depth_reached = outcome.depth_reached,
            nodes = self.nodes,
            "minimax search finished"
        );

        SearchResult {
            best_move: outcome.best.map(|(mv, _)| mv),
            score: outcome.best.map(|(_, s)| s).unwrap_or(0),
            depth: outcome.depth_reached,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

// Re-export for direct use if needed
pub use eval::{evaluate, ScoreTable, WIN_SCORE};
pub use search::{iterative_deepening, minimax, DeepeningOutcome, NEG_INF, POS_INF};
