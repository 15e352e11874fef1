//! Randomized checks of the search against an unpruned reference
//!
//! Positions are generated from fixed seeds and fanned out with rayon.

use grid_core::{Board, Difficulty, Mark, Move, AI_MARK, HUMAN_MARK};
use minimax_engine::{evaluate, iterative_deepening, minimax, ScoreTable, NEG_INF, POS_INF};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

const POSITIONS: u64 = 96;

fn reference_minimax(board: &mut Board, depth: u8, maximizing: bool, table: &ScoreTable) -> i32 {
    if depth == 0 || board.is_ended() {
        return evaluate(board, table);
    }
    let mark = if maximizing { AI_MARK } else { HUMAN_MARK };
    let mut best = if maximizing { NEG_INF } else { POS_INF };
    let moves: Vec<Move> = board.empty_cells().collect();
    for mv in moves {
        let score = {
            let mut child = board.occupy(mv, mark);
            reference_minimax(&mut child, depth - 1, !maximizing, table)
        };
        best = if maximizing { best.max(score) } else { best.min(score) };
    }
    best
}

/// Random position with alternating marks and enough open cells to search.
fn random_position(seed: u64) -> (Board, u8, Difficulty) {
    let mut rng = StdRng::seed_from_u64(seed);
    let size = if rng.gen_bool(0.5) { 3 } else { 4 };
    let mut board = Board::new(size).unwrap();

    let mut cells: Vec<Move> = board.empty_cells().collect();
    cells.shuffle(&mut rng);

    let min_empty = if size == 3 { 2 } else { 7 };
    let placed = rng.gen_range(0..=cells.len() - min_empty);
    let mut mark = Mark::X;
    for &mv in cells.iter().take(placed) {
        board.place(mv, mark).unwrap();
        mark = mark.other();
    }

    let depth = rng.gen_range(1..=3);
    let difficulty = Difficulty::ALL[rng.gen_range(0..3)];
    (board, depth, difficulty)
}

#[test]
fn test_pruned_scores_match_reference() {
    (0..POSITIONS).into_par_iter().for_each(|seed| {
        let (mut board, depth, difficulty) = random_position(seed);
        let table = ScoreTable::for_difficulty(difficulty);
        for maximizing in [true, false] {
            let before = board.clone();
            let mut nodes = 0;
            let pruned = minimax(
                &mut board, depth, maximizing, NEG_INF, POS_INF, &table, &mut nodes,
            );
            assert_eq!(board, before, "seed {seed}: board not restored");

            let expected = reference_minimax(&mut board, depth, maximizing, &table);
            assert_eq!(pruned, expected, "seed {seed}:\n{board}");
        }
    });
}

#[test]
fn test_deeper_search_never_scores_below_depth_one() {
    (0..POSITIONS).into_par_iter().for_each(|seed| {
        let (mut board, depth, difficulty) = random_position(seed);
        let mut nodes = 0;

        let shallow = iterative_deepening(&mut board, 1, difficulty, &mut nodes);
        let deep = iterative_deepening(&mut board, depth.max(2), difficulty, &mut nodes);

        let (Some((_, shallow_score)), Some((_, deep_score))) = (shallow.best, deep.best) else {
            panic!("seed {seed}: open board produced no move");
        };
        assert!(deep_score >= shallow_score, "seed {seed}:\n{board}");
    });
}

#[test]
fn test_chosen_move_is_an_empty_cell() {
    (0..POSITIONS).into_par_iter().for_each(|seed| {
        let (mut board, depth, difficulty) = random_position(seed);
        let mut nodes = 0;
        let outcome = iterative_deepening(&mut board, depth, difficulty, &mut nodes);
        let (mv, _) = outcome.best.expect("open board has a move");
        assert!(board.is_empty_at(mv), "seed {seed}: {mv} is taken");
        assert!(nodes > 0);
    });
}
