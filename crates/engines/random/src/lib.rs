//! Random Move Grid Engine
//!
//! Picks uniformly among the empty cells without looking ahead. The easy tier
//! hands roughly half of its moves to this engine, and it doubles as a baseline
//! opponent in tests.

use grid_core::{Board, Engine, Move, SearchLimits, SearchResult};
use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::SeedableRng;
use tracing::trace;


/// An engine that plays a uniformly random empty cell.
///
/// No evaluation happens, so every result reports zero nodes and a zero score.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible engine for tests and seeded sessions.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniform choice among the board's empty cells.
    pub fn pick(&mut self, board: &Board) -> Option<Move> {
        board.empty_cells().choose(&mut self.rng)
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, board: &mut Board, _limits: &SearchLimits) -> SearchResult {
        let best_move = self.pick(board);
        trace!(?best_move, "random pick");

        SearchResult {
            best_move,
            score: 0,
            depth: 0,
            nodes: 0,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }
}
