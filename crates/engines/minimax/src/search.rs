//! Minimax with alpha-beta pruning and iterative deepening

use grid_core::{Board, Difficulty, Move, AI_MARK, HUMAN_MARK};
use tracing::debug;

use crate::eval::{evaluate, ScoreTable, WIN_SCORE};

/// Window bounds standing in for -inf/+inf. Far outside any evaluator sum.
pub const NEG_INF: i32 = i32::MIN / 2;
pub const POS_INF: i32 = i32::MAX / 2;

/// Result of an iterative-deepening sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeepeningOutcome {
    /// Best root move and its score (None if the board has no empty cell)
    pub best: Option<(Move, i32)>,
    /// Last depth whose sweep completed
    pub depth_reached: u8,
}

/// Depth-bounded minimax with alpha-beta pruning.
///
/// Children are tried in row-major order, so the first move reaching the best
/// score wins ties. Every call counts as one node, including those made just
/// before a cutoff. The board is returned exactly as it was received.
///
/// A node is a leaf at depth 0 or when the board's outcome is latched. A node
/// with no empty cell left returns its starting bound: `NEG_INF` when
/// maximizing, `POS_INF` when minimizing.
pub fn minimax(
    board: &mut Board,
    depth: u8,
    maximizing: bool,
    mut alpha: i32,
    mut beta: i32,
    table: &ScoreTable,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;

    if depth == 0 || board.is_ended() {
        return evaluate(board, table);
    }

    let mark = if maximizing { AI_MARK } else { HUMAN_MARK };
    let mut best = if maximizing { NEG_INF } else { POS_INF };
    let size = board.size();

    'cells: for row in 0..size {
        for col in 0..size {
            let mv = Move::new(row, col);
            if !board.is_empty_at(mv) {
                continue;
            }

            let score = {
                let mut child = board.occupy(mv, mark);
                minimax(&mut child, depth - 1, !maximizing, alpha, beta, table, nodes)
            };

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }

            if alpha >= beta {
                break 'cells; // Cutoff
            }
        }
    }

    best
}

/// Searches depths `1..=max_depth`, scoring each AI move by the opponent's best
/// reply.
///
/// The running best is shared across depths and only replaced on a strictly
/// greater score, so a shallower choice survives ties at deeper levels. Stops
/// early once the best score is exactly a win or a loss.
///
/// # Arguments
/// * `board` - Board to search, restored before returning
/// * `max_depth` - Deepest level to try
/// * `difficulty` - Selects the evaluator table
/// * `nodes` - Node counter accumulated across every depth
pub fn iterative_deepening(
    board: &mut Board,
    max_depth: u8,
    difficulty: Difficulty,
    nodes: &mut u64,
) -> DeepeningOutcome {
    let table = ScoreTable::for_difficulty(difficulty);
    let mut best: Option<(Move, i32)> = None;
    let mut best_score = NEG_INF;
    let mut depth_reached = 0;

    if board.is_full() {
        return DeepeningOutcome {
            best,
            depth_reached,
        };
    }

    let size = board.size();
    for depth in 1..=max_depth {
        for row in 0..size {
            for col in 0..size {
                let mv = Move::new(row, col);
                if !board.is_empty_at(mv) {
                    continue;
                }

                let score = {
                    let mut child = board.occupy(mv, AI_MARK);
                    minimax(&mut child, depth, false, NEG_INF, POS_INF, &table, nodes)
                };

                if score > best_score {
                    best_score = score;
                    best = Some((mv, score));
                }
            }
        }

        depth_reached = depth;
        debug!(
            depth,
            best_score,
            best_move = ?best.map(|(mv, _)| mv),
            nodes = *nodes,
            "completed deepening pass"
        );

        if best_score.abs() == WIN_SCORE {
            break; // Decisive line found
        }
    }

    DeepeningOutcome {
        best,
        depth_reached,
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
