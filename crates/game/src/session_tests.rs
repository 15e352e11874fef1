use super::*;
use crate::error::GameError;
use grid_core::{GridError, MoveRejection};

fn seeded(difficulty: Difficulty, easy_random_chance: f64) -> Game {
    let config = GameConfig {
        difficulty,
        easy_random_chance,
        seed: Some(11),
        ..Default::default()
    };
    Game::new(&config).unwrap()
}

fn with_board(mut game: Game, rows: &[&str]) -> Game {
    game.board = Board::from_rows(rows).unwrap();
    game
}

#[test]
fn test_human_move_places_and_detects() {
    let mut game = Game::default();
    let outcome = game.human_move(Move::new(1, 1)).unwrap();
    assert_eq!(outcome, Outcome::InProgress);
    assert_eq!(game.board().cell(Move::new(1, 1)), Some(HUMAN_MARK));
}

#[test]
fn test_human_move_on_occupied_cell_rejected() {
    let mut game = Game::default();
    game.human_move(Move::new(0, 0)).unwrap();
    let before = game.board().clone();

    let err = game.human_move(Move::new(0, 0)).unwrap_err();
    assert!(matches!(
        err,
        GameError::Grid(GridError::InvalidMove {
            reason: MoveRejection::Occupied,
            ..
        })
    ));
    assert_eq!(game.board(), &before);
}

#[test]
fn test_human_win_is_detected() {
    let mut game = with_board(
        seeded(Difficulty::Medium, 0.5),
        &["XXX.", "OO..", "O...", "...."],
    );
    assert_eq!(
        game.human_move(Move::new(0, 3)).unwrap(),
        Outcome::Won(HUMAN_MARK)
    );
    assert_eq!(game.select_move(Difficulty::Hard).unwrap(), None);
    assert!(game.stats().is_empty());
}

#[test]
fn test_select_move_completes_row_on_every_difficulty() {
    for difficulty in Difficulty::ALL {
        let mut game = with_board(
            seeded(difficulty, 0.0),
            &["OOO.", "X...", ".X..", "X..."],
        );
        let mv = game.select_move(difficulty).unwrap();
        assert_eq!(mv, Some(Move::new(0, 3)));
        assert_eq!(game.board().cell(Move::new(0, 3)), Some(AI_MARK));
        // The outcome detector is left to the caller.
        assert_eq!(game.outcome(), Outcome::InProgress);
        assert_eq!(game.detect_outcome(AI_MARK), Outcome::Won(AI_MARK));
    }
}

#[test]
fn test_ai_move_detects_outcome() {
    let mut game = with_board(
        seeded(Difficulty::Hard, 0.5),
        &["OOO.", "X...", ".X..", "X..."],
    );
    assert_eq!(game.ai_move().unwrap(), Outcome::Won(AI_MARK));
    assert_eq!(game.stats().len(), 1);
}

#[test]
fn test_select_move_is_noop_when_ended() {
    let mut game = with_board(seeded(Difficulty::Hard, 0.5), &["OOO", "XX.", "X.."]);
    game.detect_outcome(AI_MARK);
    let before = game.board().clone();

    assert_eq!(game.select_move(Difficulty::Hard).unwrap(), None);
    assert_eq!(game.board(), &before);
    assert!(game.stats().is_empty());
}

#[test]
fn test_random_path_records_zero_nodes() {
    let mut game = seeded(Difficulty::Easy, 1.0);
    let mv = game.select_move(Difficulty::Easy).unwrap();
    assert!(mv.is_some());
    assert_eq!(game.stats().node_counts(), &[0]);
}

#[test]
fn test_search_path_records_nodes() {
    let mut game = seeded(Difficulty::Easy, 0.0);
    game.select_move(Difficulty::Easy).unwrap();
    assert_eq!(game.stats().node_counts(), &[16 * 16]);
}

#[test]
fn test_random_chance_only_applies_to_easy() {
    let mut game = seeded(Difficulty::Medium, 1.0);
    game.select_move(Difficulty::Medium).unwrap();
    assert!(game.stats().node_counts()[0] > 0);
}

#[test]
fn test_reset_clears_board_and_stats() {
    let mut game = seeded(Difficulty::Medium, 0.5);
    game.human_move(Move::new(0, 0)).unwrap();
    game.ai_move().unwrap();
    assert_eq!(game.stats().len(), 1);

    game.reset(None).unwrap();
    assert_eq!(game.board().size(), 4);
    assert_eq!(game.board().moves_made(), 0);
    assert!(game.stats().is_empty());

    game.reset(Some(3)).unwrap();
    assert_eq!(game.board().size(), 3);
}

#[test]
fn test_reset_with_bad_size_changes_nothing() {
    let mut game = seeded(Difficulty::Medium, 0.5);
    game.human_move(Move::new(2, 2)).unwrap();
    game.ai_move().unwrap();
    let board = game.board().clone();

    let err = game.reset(Some(2)).unwrap_err();
    assert!(matches!(err, GameError::Grid(GridError::InvalidSize { size: 2 })));
    assert_eq!(game.board(), &board);
    assert_eq!(game.stats().len(), 1);
}

#[test]
fn test_invalid_config_rejected() {
    let config = GameConfig {
        board_size: 1,
        ..Default::default()
    };
    assert!(Game::new(&config).is_err());
}
