//! Search benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example search_bench -p minimax_engine -- [difficulty] [size]
//!
//! Examples:
//!   # Default: every difficulty on empty 3x3, 4x4 and 5x5 boards
//!   cargo run --release --example search_bench -p minimax_engine
//!
//!   # Hard on an empty 4x4 board only
//!   cargo run --release --example search_bench -p minimax_engine -- hard 4

use grid_core::{Board, Difficulty, Engine, SearchLimits};
use minimax_engine::MinimaxEngine;
use std::env;
use std::time::Instant;

const SIZES: [usize; 3] = [3, 4, 5];

fn main() {
    let args: Vec<String> = env::args().collect();

    let difficulty = args.get(1).map(|s| Difficulty::from_label(s));
    let size = args.get(2).and_then(|s| s.parse::<usize>().ok());

    match (difficulty, size) {
        (Some(d), Some(n)) => run_single(d, n),
        (Some(d), None) => SIZES.iter().for_each(|&n| run_single(d, n)),
        _ => {
            for d in Difficulty::ALL {
                for n in SIZES {
                    run_single(d, n);
                }
            }
        }
    }
}

fn run_single(difficulty: Difficulty, size: usize) {
    let mut board = match Board::new(size) {
        Ok(board) => board,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };
    let mut engine = MinimaxEngine::new();
    let limits = SearchLimits::for_difficulty(difficulty);

    let start = Instant::now();
    let result = engine.search(&mut board, &limits);
    let elapsed = start.elapsed();

    let nps = if elapsed.as_secs_f64() > 0.0 {
        result.nodes as f64 / elapsed.as_secs_f64()
    } else {
        0.0
    };

    println!(
        "{:<6} {}x{}  depth {}/{}  nodes {:>10}  time {:>8.3}s  nps {:>12.0}  move {:?}",
        difficulty.label(),
        size,
        size,
        result.depth,
        limits.depth,
        result.nodes,
        elapsed.as_secs_f64(),
        nps,
        result.best_move
    );
}
