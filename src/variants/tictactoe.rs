//! Tic-tac-toe: marks are placed on empty cells, three in a row wins

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    error::{MoveError, ParseMoveError},
    game::{Board, CELLS, Cell, GameMove, GameResult, LineAnalyzer, RuleModule, Side},
};

/// A mark placed on a 1-based cell number
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize")]
pub struct Placement(pub usize);

impl Placement {
    pub fn cell(self) -> usize {
        self.0
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

const PLACEMENT_NOTATION: &str = "a cell number from 1 to 9";

impl FromStr for Placement {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n = s.parse::<usize>().map_err(|_| ParseMoveError {
            notation: s.to_string(),
            expected: PLACEMENT_NOTATION,
        })?;
        Placement::try_from(n)
    }
}

impl TryFrom<usize> for Placement {
    type Error = ParseMoveError;

    fn try_from(n: usize) -> Result<Self, Self::Error> {
        if (1..=CELLS).contains(&n) {
            Ok(Placement(n))
        } else {
            Err(ParseMoveError {
                notation: n.to_string(),
                expected: PLACEMENT_NOTATION,
            })
        }
    }
}

impl GameMove for Placement {}

/// Rule module for tic-tac-toe
#[derive(Debug, Clone, Copy, Default)]
pub struct TicTacToe;

impl RuleModule for TicTacToe {
    type Move = Placement;

    fn name(&self) -> &'static str {
        "Tic-tac-toe"
    }

    fn initial_board(&self) -> Board {
        Board::empty()
    }

    fn validate_and_apply_player_move(
        &self,
        board: &mut Board,
        mv: Placement,
    ) -> Result<(), MoveError> {
        match board.at(mv.cell()) {
            None => Err(MoveError::OutOfRange),
            Some(Cell::Empty) => {
                board.set(mv.cell(), Cell::Player);
                Ok(())
            }
            Some(_) => Err(MoveError::IllegalTransition),
        }
    }

    fn apply_computer_move(&self, board: &mut Board, mv: Placement) {
        board.set(mv.cell(), Cell::Computer);
    }

    fn evaluate(&self, board: &Board, _last_mover: Side) -> GameResult {
        if let Some(winner) = LineAnalyzer::winner(board.cells()) {
            GameResult::win_for(winner)
        } else if board.is_full() {
            GameResult::Draw
        } else {
            GameResult::InProgress
        }
    }

    fn legal_moves(&self, board: &Board, _side: Side) -> Vec<Placement> {
        board
            .positions(Cell::Empty)
            .into_iter()
            .map(Placement)
            .collect()
    }
}
