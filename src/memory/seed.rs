//! Construction of a fresh, untrained move memory

use std::collections::HashSet;

use super::move_memory::MoveMemory;
use crate::{
    Result,
    game::{BoardKey, RuleModule, Side},
};

/// Build the memory an untrained engine starts from.
///
/// Walks every position reachable from the variant's initial layout with the
/// player moving first, and records each non-terminal position where the
/// computer is to move together with all of its legal moves, in ascending
/// order. Positions where the computer has no legal move are left out.
///
/// # Errors
///
/// Returns an error if the rule module reports a legal player move that it
/// then rejects, or produces an inconsistent entry.
pub fn seed_memory<R: RuleModule>(rules: &R) -> Result<MoveMemory<R::Move>> {
    let mut entries = Vec::new();
    let mut seen_player = HashSet::new();
    let mut seen_computer: HashSet<BoardKey> = HashSet::new();
    let mut to_explore = vec![rules.initial_board()];

    while let Some(board) = to_explore.pop() {
        if !seen_player.insert(board.key()) {
            continue;
        }

        for player_move in rules.legal_moves(&board, Side::Player) {
            let mut after_player = board;
            rules.validate_and_apply_player_move(&mut after_player, player_move)?;
            if rules.evaluate(&after_player, Side::Player).is_over() {
                continue;
            }

            let key = after_player.key();
            if !seen_computer.insert(key.clone()) {
                continue;
            }

            let responses = rules.legal_moves(&after_player, Side::Computer);
            for &response in &responses {
                let mut after_computer = after_player;
                rules.apply_computer_move(&mut after_computer, response);
                if !rules.evaluate(&after_computer, Side::Computer).is_over() {
                    to_explore.push(after_computer);
                }
            }
            if !responses.is_empty() {
                entries.push((key, responses));
            }
        }
    }

    log::debug!(
        "seeded {} memory with {} positions",
        rules.name(),
        entries.len()
    );
    MoveMemory::from_entries(entries)
}
