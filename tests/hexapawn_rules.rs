//! Hexapawn adjudication through the controller.

mod common;

use common::key;
use rote::{
    Board, ComputerTurn, FlatCodec, GameController, GameResult, Hexapawn, MoveError, MoveMemory,
    Phase, RuleModule, Side, Step,
};

fn board(s: &str) -> Board {
    Board::from_key(&key(s))
}

#[test]
fn test_captures_do_not_wrap_across_edges() {
    let mut b = board("002100000");
    assert_eq!(
        Hexapawn.validate_and_apply_player_move(&mut b, Step::new(4, 3)),
        Err(MoveError::IllegalTransition)
    );

    let mut b = board("200001000");
    assert_eq!(
        Hexapawn.validate_and_apply_player_move(&mut b, Step::new(6, 1)),
        Err(MoveError::IllegalTransition)
    );
    assert_eq!(b, board("200001000"));

    // Computer pawns are never offered a wrapping capture either.
    let moves = Hexapawn.legal_moves(&board("002100000"), Side::Computer);
    assert_eq!(moves, vec![Step::new(3, 6)]);
}

#[test]
fn test_zero_mobility_ends_the_game() {
    // 2 . .
    // 1 . .
    // . . .    both pawns are blocked
    let b = board("200100000");
    assert_eq!(Hexapawn.evaluate(&b, Side::Player), GameResult::PlayerWin);
    assert_eq!(Hexapawn.evaluate(&b, Side::Computer), GameResult::ComputerWin);
}

#[test]
fn test_player_left_without_moves_loses() {
    let memory: MoveMemory<Step> = FlatCodec::decode("222100011:2-4|202100001:3-6").unwrap();
    let before = memory.clone();
    let mut controller = GameController::new(Hexapawn, memory, Some(0));

    controller.player_move(Step::new(7, 4)).unwrap();
    assert_eq!(
        controller.computer_move().unwrap(),
        ComputerTurn::Played(Step::new(2, 4))
    );
    controller.player_move(Step::new(8, 4)).unwrap();
    assert_eq!(controller.board().key(), key("202100001"));
    assert_eq!(controller.phase(), Phase::AwaitingComputerMove);

    // 2 . 2
    // 1 . 2
    // . . 1    neither player pawn can move
    controller.computer_move().unwrap();
    assert_eq!(controller.phase(), Phase::GameOver(GameResult::ComputerWin));
    assert_eq!(controller.memory(), &before);
}
