//! Line-based static evaluation from the AI's (maximizing) perspective

use grid_core::{Board, Difficulty, AI_MARK};

/// Score of a completed line. Only exact matches of this magnitude stop
/// iterative deepening early.
pub const WIN_SCORE: i32 = 1000;

/// Per-difficulty line scores.
///
/// Easy deliberately values its own threats (+20) more than it fears the
/// opponent's (-10), which makes it a weaker defender.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreTable {
    /// Line fully held by the AI; the negation is used for the opponent
    pub win: i32,
    /// AI holds all but one cell and the last one is empty
    pub near_win: i32,
    /// Opponent holds all but one cell and the last one is empty
    pub near_loss: i32,
}

const EASY_TABLE: ScoreTable = ScoreTable {
    win: WIN_SCORE,
    near_win: 20,
    near_loss: -10,
};

const STANDARD_TABLE: ScoreTable = ScoreTable {
    win: WIN_SCORE,
    near_win: 50,
    near_loss: -50,
};

impl ScoreTable {
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => EASY_TABLE,
            Difficulty::Medium | Difficulty::Hard => STANDARD_TABLE,
        }
    }
}

/// Sums the contribution of every row, column and main diagonal.
pub fn evaluate(board: &Board, table: &ScoreTable) -> i32 {
    let size = board.size();
    let cells = board.cells();

    let mut score = 0i32;
    for line in board.lines() {
        let (mut ai, mut opponent) = (0usize, 0usize);
        for &i in line {
            match cells[i] {
                Some(mark) if mark == AI_MARK => ai += 1,
                Some(_) => opponent += 1,
                None => {}
            }
        }
        let empty = size - ai - opponent;

        score += if ai == size {
            table.win
        } else if opponent == size {
            -table.win
        } else if ai == size - 1 && empty == 1 {
            table.near_win
        } else if opponent == size - 1 && empty == 1 {
            table.near_loss
        } else {
            0
        };
    }
    score
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
