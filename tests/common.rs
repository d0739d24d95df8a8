//! Common test utilities for the rote test suite.
//!
//! Helpers for building apps over in-memory stores and for driving a
//! controller with a fixed player strategy.

#![allow(dead_code)]

use std::path::Path;

use rote::{
    Board, BoardKey, GameController, GameResult, MoveMemory, Phase, RuleModule, Side,
    adapters::InMemoryRepository,
    app::{App, SessionConfig},
};

pub fn key(s: &str) -> BoardKey {
    BoardKey::parse(s).expect("valid board key")
}

/// App over a fresh in-memory store holding `text` at `name`.
pub fn app_with_store(name: &str, text: &str, seed: u64) -> (App, InMemoryRepository) {
    let repo = InMemoryRepository::new();
    repo.insert_text(Path::new(name), text);
    let app = App::for_testing()
        .with_repository(repo.clone())
        .with_default_seed(seed)
        .build();
    (app, repo)
}

pub fn config(name: &str) -> SessionConfig {
    SessionConfig::new(name)
}

/// Play one game where the player always takes its lowest legal move.
///
/// Returns the result of the game.
pub fn play_lowest_move_game<R: RuleModule>(controller: &mut GameController<R>) -> GameResult {
    loop {
        match controller.phase() {
            Phase::AwaitingPlayerMove => {
                let moves = controller
                    .rules()
                    .legal_moves(controller.board(), Side::Player);
                let mv = *moves.first().expect("player to move has a legal move");
                controller.player_move(mv).expect("legal move is accepted");
            }
            Phase::AwaitingComputerMove => {
                controller.computer_move().expect("computer is to move");
            }
            Phase::GameOver(result) => return result,
        }
    }
}

/// Whether the lowest-move player can still win from `board` (player to
/// move) along some sequence of stored computer replies.
///
/// A position with nothing stored counts as a win, since the computer
/// concedes there. Once this is false from the initial board, no further game
/// against that player can prune anything.
pub fn lowest_move_player_can_win<R: RuleModule>(
    rules: &R,
    memory: &MoveMemory<R::Move>,
    board: &Board,
) -> bool {
    let Some(&mv) = rules.legal_moves(board, Side::Player).first() else {
        return false;
    };
    let mut after_player = *board;
    rules
        .validate_and_apply_player_move(&mut after_player, mv)
        .expect("legal move is accepted");
    match rules.evaluate(&after_player, Side::Player) {
        GameResult::PlayerWin => return true,
        GameResult::InProgress => {}
        _ => return false,
    }

    let Some(replies) = memory.moves(&after_player.key()) else {
        return true;
    };
    replies.iter().any(|&reply| {
        let mut after_computer = after_player;
        rules.apply_computer_move(&mut after_computer, reply);
        match rules.evaluate(&after_computer, Side::Computer) {
            GameResult::InProgress => lowest_move_player_can_win(rules, memory, &after_computer),
            result => result == GameResult::PlayerWin,
        }
    })
}
