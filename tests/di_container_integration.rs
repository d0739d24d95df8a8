//! Integration tests for dependency injection.
//!
//! These tests use in-memory repositories so that whole sessions, including
//! the save at the end, run without touching the disk.

mod common;

use std::path::Path;

use common::{app_with_store, config, play_lowest_move_game};
use rote::{
    Error, GameResult, Hexapawn, MoveMemory, Placement, TicTacToe,
    adapters::InMemoryRepository,
    app::App,
};

#[test]
fn test_session_saves_to_injected_repository() {
    let (app, repo) = app_with_store("ttt", "000010000:3|100000000:5", 42);

    let mut controller = app.open_session(TicTacToe, &config("ttt")).unwrap();
    controller.player_move(Placement(5)).unwrap();
    controller.computer_move().unwrap();
    controller.player_move(Placement(1)).unwrap();
    controller.computer_move().unwrap();
    assert_eq!(
        controller.evaluate_and_maybe_prune(rote::Side::Computer),
        GameResult::PlayerWin
    );
    controller.end_session().unwrap();

    assert_eq!(repo.text(Path::new("ttt")).as_deref(), Some("100000000:5"));
}

#[test]
fn test_deterministic_play_with_seed() {
    let seeded_app = App::for_testing()
        .with_repository(InMemoryRepository::new())
        .build();
    seeded_app.seed_store(&Hexapawn, &config("hp")).unwrap();
    let text = {
        let memory: MoveMemory<rote::Step> = seeded_app.load_memory(&config("hp")).unwrap();
        rote::FlatCodec::encode(&memory)
    };

    let run = || {
        let (app, _) = app_with_store("hp", &text, 7);
        let mut controller = app.open_session(Hexapawn, &config("hp")).unwrap();
        let results: Vec<GameResult> = (0..10)
            .map(|_| {
                let result = play_lowest_move_game(&mut controller);
                controller.play_again().unwrap();
                result
            })
            .collect();
        (results, controller.memory().clone())
    };

    assert_eq!(run(), run());
}

#[test]
fn test_missing_store_is_a_hard_error() {
    let app = App::for_testing()
        .with_repository(InMemoryRepository::new())
        .build();
    let result = app.open_session(TicTacToe, &config("ttt"));
    assert!(matches!(result, Err(Error::EmptyInput { .. })));
}

#[test]
fn test_malformed_store_is_a_hard_error() {
    let (app, _) = app_with_store("ttt", "000010000:3|000010000:7", 1);
    let result = app.open_session(TicTacToe, &config("ttt"));
    assert!(matches!(result, Err(Error::DuplicateKey { .. })));

    let (app, _) = app_with_store("hp", "222100011:", 1);
    let result = app.open_session(Hexapawn, &config("hp"));
    assert!(matches!(result, Err(Error::MalformedRecord { .. })));
}
