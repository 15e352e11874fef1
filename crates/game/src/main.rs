//! Terminal driver
//!
//! Reads commands from stdin, plays the human's moves and answers with the
//! computer's. Logs go to stderr; the board goes to stdout.

use grid_core::{Difficulty, Move, Outcome};
use grid_game::{Game, GameConfig};
use std::env;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("Grid Game: N x N tic-tac-toe against a minimax opponent");
    println!();
    println!("Usage:");
    println!("  grid-game [--config FILE] [--size N] [--difficulty LEVEL] [--seed S]");
    println!();
    println!("Commands:");
    println!("  move <row> <col>     - place your mark (X), the computer answers with O");
    println!("  difficulty <level>   - easy, medium or hard (anything else plays as medium)");
    println!("  reset [size]         - start over, keeping the size unless given");
    println!("  show                 - print the board");
    println!("  stats                - node counts for every computer move so far");
    println!("  save [file]          - write node counts as JSON");
    println!("  help                 - this text");
    println!("  quit                 - leave");
}

fn parse_difficulty(label: &str) -> Difficulty {
    Difficulty::parse_label(label).unwrap_or_else(|| {
        warn!(label, "unknown difficulty, using medium");
        Difficulty::Medium
    })
}

/// Parses command-line flags on top of the config file.
fn parse_args(args: &[String]) -> Result<Option<GameConfig>, String> {
    let mut config_path: Option<PathBuf> = None;
    let mut size: Option<usize> = None;
    let mut difficulty: Option<Difficulty> = None;
    let mut seed: Option<u64> = None;

    let mut i = 0;
    while i < args.len() {
        let value = args.get(i + 1);
        match (args[i].as_str(), value) {
            ("--config" | "-c", Some(v)) => config_path = Some(PathBuf::from(v)),
            ("--size" | "-s", Some(v)) => {
                size = Some(v.parse().map_err(|_| format!("invalid size: {v}"))?)
            }
            ("--difficulty" | "-d", Some(v)) => difficulty = Some(parse_difficulty(v)),
            ("--seed", Some(v)) => seed = Some(v.parse().map_err(|_| format!("invalid seed: {v}"))?),
            ("--help" | "-h", _) => return Ok(None),
            (flag, _) => return Err(format!("unknown or incomplete argument: {flag}")),
        }
        i += 2;
    }

    let mut config = match config_path {
        Some(path) => GameConfig::load(&path).map_err(|e| e.to_string())?,
        None => GameConfig::default(),
    };
    if let Some(size) = size {
        config.board_size = size;
    }
    if let Some(difficulty) = difficulty {
        config.difficulty = difficulty;
    }
    if seed.is_some() {
        config.seed = seed;
    }
    Ok(Some(config))
}

fn print_board(game: &Game) {
    print!("{}", game.board());
    match game.outcome() {
        Outcome::InProgress => {}
        Outcome::Won(mark) => println!("Game over: {mark} wins!"),
        Outcome::Draw => println!("Game over: it's a draw!"),
    }
}

fn save_stats(game: &Game, path: &Path) {
    match game.stats().save(path) {
        Ok(()) => println!("Saved {} entries to {}", game.stats().len(), path.display()),
        Err(e) => error!("{e}"),
    }
}

fn play_move(game: &mut Game, args: &[&str]) {
    let coords: Option<(usize, usize)> = match args {
        [r, c] => r.parse().ok().zip(c.parse().ok()),
        _ => None,
    };
    let Some((row, col)) = coords else {
        println!("usage: move <row> <col>");
        return;
    };

    match game.human_move(Move::new(row, col)) {
        Ok(Outcome::InProgress) => {
            if let Err(e) = game.ai_move() {
                error!("computer move failed: {e}");
            }
        }
        Ok(_) => {}
        Err(e) => {
            warn!("{e}");
            println!("Rejected: {e}");
            return;
        }
    }
    print_board(game);
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let config = match parse_args(&args) {
        Ok(Some(config)) => config,
        Ok(None) => {
            print_usage();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("Error: {e}");
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    let mut game = match Game::new(&config) {
        Ok(game) => game,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!(
        "{0}x{0} board, difficulty {1}. Type 'help' for commands.",
        game.board().size(),
        game.difficulty()
    );
    print_board(&game);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some((&command, rest)) = parts.split_first() else {
            continue;
        };

        match command {
            "move" | "m" => play_move(&mut game, rest),
            "difficulty" | "d" => match rest.first() {
                Some(label) => {
                    game.set_difficulty(parse_difficulty(label));
                    println!("Difficulty: {}", game.difficulty());
                }
                None => println!("Difficulty: {}", game.difficulty()),
            },
            "reset" | "r" => {
                let size = match rest.first().map(|s| s.parse::<usize>()) {
                    Some(Ok(n)) => Some(n),
                    Some(Err(_)) => {
                        println!("usage: reset [size]");
                        continue;
                    }
                    None => None,
                };
                match game.reset(size) {
                    Ok(()) => print_board(&game),
                    Err(e) => println!("Rejected: {e}"),
                }
            }
            "show" => print_board(&game),
            "stats" => {
                if game.stats().is_empty() {
                    println!("No AI moves have been made yet to analyze.");
                } else {
                    print!("{}", game.stats().generate_report());
                }
            }
            "save" => match rest.first().map(PathBuf::from).or_else(|| config.stats_path.clone()) {
                Some(path) => save_stats(&game, &path),
                None => println!("usage: save <file> (or set stats_path in the config)"),
            },
            "help" => print_usage(),
            "quit" | "q" => break,
            other => println!("Unknown command: {other}"),
        }
        stdout.flush().ok();
    }

    if let Some(path) = &config.stats_path {
        if !game.stats().is_empty() {
            save_stats(&game, path);
        }
    }
    ExitCode::SUCCESS
}
