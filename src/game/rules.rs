//! Rule module abstraction shared by every game variant

use std::{fmt, hash::Hash, str::FromStr};

use serde::{Deserialize, Serialize, de::DeserializeOwned};

use super::board::{Board, Side};
use crate::error::{MoveError, ParseMoveError};

/// Outcome of a position, recomputed after every half-move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    InProgress,
    PlayerWin,
    ComputerWin,
    Draw,
}

impl GameResult {
    /// The result where `side` has won
    pub fn win_for(side: Side) -> Self {
        match side {
            Side::Player => GameResult::PlayerWin,
            Side::Computer => GameResult::ComputerWin,
        }
    }

    pub fn is_over(self) -> bool {
        self != GameResult::InProgress
    }
}

/// A variant-specific move value.
///
/// Moves are written in their persisted notation by `Display` and read back
/// by `FromStr`, which only accepts cell numbers on the board.
pub trait GameMove:
    Copy
    + Eq
    + Ord
    + Hash
    + fmt::Debug
    + fmt::Display
    + FromStr<Err = ParseMoveError>
    + Serialize
    + DeserializeOwned
    + Send
    + Sync
    + 'static
{
}

/// Legality and adjudication policy of one game variant.
///
/// The controller, move memory and stores are written once against this
/// trait; each variant only supplies its rule table.
pub trait RuleModule {
    type Move: GameMove;

    /// Human-readable variant name
    fn name(&self) -> &'static str;

    /// The starting layout
    fn initial_board(&self) -> Board;

    /// Check a human move and apply it in place.
    ///
    /// # Errors
    ///
    /// Returns a classified [`MoveError`] and leaves the board untouched when the
    /// move is not legal.
    fn validate_and_apply_player_move(
        &self,
        board: &mut Board,
        mv: Self::Move,
    ) -> Result<(), MoveError>;

    /// Apply a move taken from memory without re-validating it
    fn apply_computer_move(&self, board: &mut Board, mv: Self::Move);

    /// Adjudicate the board after `last_mover` completed a half-move
    fn evaluate(&self, board: &Board, last_mover: Side) -> GameResult;

    /// Every legal move for `side`, in ascending order
    fn legal_moves(&self, board: &Board, side: Side) -> Vec<Self::Move>;
}
