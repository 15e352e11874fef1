//! Game session: board, search statistics and the computer opponent
//!
//! All calls are synchronous and must not overlap. The minimax engine borrows the
//! board mutably for the whole search and restores it before returning.

use grid_core::{
    Board, Difficulty, Engine, Mark, Move, Outcome, SearchLimits, SearchResult, AI_MARK,
    HUMAN_MARK,
};
use minimax_engine::MinimaxEngine;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use random_engine::RandomEngine;
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::error::Result;
use crate::stats::SearchStats;

/// One game against the computer.
#[derive(Debug)]
pub struct Game {
    board: Board,
    stats: SearchStats,
    /// Label the driver currently has selected for the computer's moves
    difficulty: Difficulty,
    minimax: MinimaxEngine,
    random: RandomEngine,
    rng: StdRng,
    easy_random_chance: f64,
}

impl Default for Game {
    fn default() -> Self {
        Self::assemble(Board::default(), &GameConfig::default())
    }
}

impl Game {
    pub fn new(config: &GameConfig) -> Result<Self> {
        config.validate()?;
        let board = Board::new(config.board_size)?;
        Ok(Self::assemble(board, config))
    }

    fn assemble(board: Board, config: &GameConfig) -> Self {
        let (rng, random) = match config.seed {
            Some(seed) => (
                StdRng::seed_from_u64(seed),
                RandomEngine::with_seed(seed.wrapping_add(1)),
            ),
            None => (StdRng::from_entropy(), RandomEngine::new()),
        };

        Self {
            board,
            stats: SearchStats::new(),
            difficulty: config.difficulty,
            minimax: MinimaxEngine::new(),
            random,
            rng,
            easy_random_chance: config.easy_random_chance,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    pub fn outcome(&self) -> Outcome {
        self.board.outcome()
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    /// Runs the board's outcome detector for `mark`, logging the transition into
    /// a terminal state.
    pub fn detect_outcome(&mut self, mark: Mark) -> Outcome {
        let was_ended = self.board.is_ended();
        let outcome = self.board.detect_outcome(mark);
        if !was_ended && outcome.is_terminal() {
            info!(%outcome, moves = self.board.moves_made(), "game over");
        }
        outcome
    }

    /// Places the human mark and checks whether it ended the game.
    pub fn human_move(&mut self, mv: Move) -> Result<Outcome> {
        self.board.place(mv, HUMAN_MARK)?;
        info!(%mv, "human move");
        Ok(self.detect_outcome(HUMAN_MARK))
    }

    /// Chooses and places the computer's move without running the outcome
    /// detector.
    ///
    /// Does nothing when the game is over or the board is full. On Easy a coin
    /// flip may replace the search with a random empty cell, which records zero
    /// nodes. Every move made appends one entry to the search statistics.
    pub fn select_move(&mut self, difficulty: Difficulty) -> Result<Option<Move>> {
        if self.board.is_ended() || self.board.is_full() {
            debug!(outcome = %self.board.outcome(), "no move to select");
            return Ok(None);
        }

        let limits = SearchLimits::for_difficulty(difficulty);
        let result: SearchResult =
            if difficulty == Difficulty::Easy && self.rng.gen_bool(self.easy_random_chance) {
                self.random.search(&mut self.board, &limits)
            } else {
                self.minimax.search(&mut self.board, &limits)
            };
        self.stats.record(result.nodes);

        if let Some(mv) = result.best_move {
            self.board.place(mv, AI_MARK)?;
            info!(
                %mv,
                %difficulty,
                nodes = result.nodes,
                score = result.score,
                depth = result.depth,
                "computer move"
            );
        }
        Ok(result.best_move)
    }

    /// Plays the computer's move at the current difficulty and checks the outcome.
    pub fn ai_move(&mut self) -> Result<Outcome> {
        self.select_move(self.difficulty)?;
        Ok(self.detect_outcome(AI_MARK))
    }

    /// Starts over on an empty board, `size` defaulting to the current one.
    ///
    /// Search statistics are cleared. On an invalid size nothing changes.
    pub fn reset(&mut self, size: Option<usize>) -> Result<()> {
        let size = size.unwrap_or(self.board.size());
        let board = Board::new(size)?;

        self.board = board;
        self.stats.clear();
        self.minimax.new_game();
        self.random.new_game();

        info!(size, "game reset");
        Ok(())
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
