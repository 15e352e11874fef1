pub mod board;
pub mod error;
pub mod limits;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::*;
pub use limits::*;
pub use types::*;

// =============================================================================
// Engine trait: implemented by the minimax and random engines
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// The chosen move (None if the board has no empty cell)
    pub best_move: Option<Move>,
    /// Evaluation of the chosen move from the engine's perspective
    pub score: i32,
    /// Deepest search depth completed
    pub depth: u8,
    /// Number of search-tree nodes visited, for statistics only
    pub nodes: u64,
}

impl SearchResult {
    /// Result for a board with nothing left to play.
    pub fn no_move() -> Self {
        Self {
            best_move: None,
            score: 0,
            depth: 0,
            nodes: 0,
        }
    }
}

/// Trait that every move-selecting engine implements.
///
/// Engines may mutate the board during lookahead but must hand it back exactly as
/// they received it.
pub trait Engine: Send {
    /// Search the board with the given limits.
    ///
    /// # Arguments
    /// * `board` - The board to analyze, restored before returning
    /// * `limits` - Search depth and evaluator difficulty
    ///
    /// # Returns
    /// SearchResult containing the chosen move, score, and statistics
    fn search(&mut self, board: &mut Board, limits: &SearchLimits) -> SearchResult;

    /// Returns the engine's name for logs and reports
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
