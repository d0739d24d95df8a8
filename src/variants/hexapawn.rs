//! Hexapawn: three pawns a side on a 3x3 board.
//!
//! The player's pawns start on the bottom row and move up; the computer's
//! start on the top row and move down. A pawn steps straight forward onto an
//! empty cell or captures diagonally forward. A side wins by reaching the far
//! row, or when the opponent is left without a legal move.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    error::{MoveError, ParseMoveError},
    game::{
        Board, CELLS, Cell, GameMove, GameResult, RuleModule, SIDE_LEN, Side,
        board::{col_of, number_at, row_of},
    },
};

/// A pawn moving from one 1-based cell number to another
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawStep")]
pub struct Step {
    pub from: usize,
    pub to: usize,
}

/// Unchecked wire form of [`Step`]
#[derive(Deserialize)]
struct RawStep {
    from: usize,
    to: usize,
}

impl Step {
    pub fn new(from: usize, to: usize) -> Self {
        Step { from, to }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

impl FromStr for Step {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cell = |part: &str| {
            part.parse::<usize>()
                .ok()
                .filter(|n| (1..=CELLS).contains(n))
        };

        s.split_once('-')
            .and_then(|(from, to)| Some(Step::new(cell(from)?, cell(to)?)))
            .ok_or_else(|| ParseMoveError {
                notation: s.to_string(),
                expected: STEP_NOTATION,
            })
    }
}

const STEP_NOTATION: &str = "ORIGIN-DEST with cell numbers from 1 to 9";

impl TryFrom<RawStep> for Step {
    type Error = ParseMoveError;

    fn try_from(raw: RawStep) -> Result<Self, Self::Error> {
        let on_board = |n: usize| (1..=CELLS).contains(&n);
        if on_board(raw.from) && on_board(raw.to) {
            Ok(Step::new(raw.from, raw.to))
        } else {
            Err(ParseMoveError {
                notation: format!("{}-{}", raw.from, raw.to),
                expected: STEP_NOTATION,
            })
        }
    }
}

impl GameMove for Step {}

/// Rule module for hexapawn
#[derive(Debug, Clone, Copy, Default)]
pub struct Hexapawn;

impl Hexapawn {
    /// Row a side is trying to reach
    fn goal_row(side: Side) -> usize {
        match side {
            Side::Player => 0,
            Side::Computer => SIDE_LEN - 1,
        }
    }

    /// Row directly ahead of `row` for `side`, if it is on the board
    fn row_ahead(side: Side, row: usize) -> Option<usize> {
        match side {
            Side::Player => row.checked_sub(1),
            Side::Computer => Some(row + 1).filter(|&r| r < SIDE_LEN),
        }
    }

    /// Check a step for `side` against the board.
    ///
    /// Rows and columns are compared explicitly, so a capture never wraps
    /// from one edge of the board to the other.
    fn check(board: &Board, side: Side, step: Step) -> Result<(), MoveError> {
        let (Some(origin), Some(dest)) = (board.at(step.from), board.at(step.to)) else {
            return Err(MoveError::OutOfRange);
        };
        if origin != side.mark() {
            return Err(MoveError::NoPieceAtOrigin);
        }
        if Self::row_ahead(side, row_of(step.from)) != Some(row_of(step.to)) {
            return Err(MoveError::IllegalTransition);
        }

        let from_col = col_of(step.from);
        let to_col = col_of(step.to);
        let forward = to_col == from_col && dest == Cell::Empty;
        let capture = from_col.abs_diff(to_col) == 1 && dest == side.opponent().mark();

        if forward || capture {
            Ok(())
        } else {
            Err(MoveError::IllegalTransition)
        }
    }

    fn apply(board: &mut Board, side: Side, step: Step) {
        board.set(step.from, Cell::Empty);
        board.set(step.to, side.mark());
    }
}

impl RuleModule for Hexapawn {
    type Move = Step;

    fn name(&self) -> &'static str {
        "Hexapawn"
    }

    fn initial_board(&self) -> Board {
        use Cell::{Computer as C, Empty as E, Player as P};
        Board::from_cells([C, C, C, E, E, E, P, P, P])
    }

    fn validate_and_apply_player_move(
        &self,
        board: &mut Board,
        mv: Step,
    ) -> Result<(), MoveError> {
        Self::check(board, Side::Player, mv)?;
        Self::apply(board, Side::Player, mv);
        Ok(())
    }

    fn apply_computer_move(&self, board: &mut Board, mv: Step) {
        Self::apply(board, Side::Computer, mv);
    }

    fn evaluate(&self, board: &Board, last_mover: Side) -> GameResult {
        for side in [Side::Player, Side::Computer] {
            let goal = Self::goal_row(side);
            if (0..SIDE_LEN).any(|col| board.at(number_at(goal, col)) == Some(side.mark())) {
                return GameResult::win_for(side);
            }
        }

        // Only the side about to move is checked; nobody loses proactively.
        if self.legal_moves(board, last_mover.opponent()).is_empty() {
            return GameResult::win_for(last_mover);
        }

        GameResult::InProgress
    }

    fn legal_moves(&self, board: &Board, side: Side) -> Vec<Step> {
        let mut moves = Vec::new();
        for from in board.positions(side.mark()) {
            let Some(row) = Self::row_ahead(side, row_of(from)) else {
                continue;
            };
            let col = col_of(from);
            for to_col in col.saturating_sub(1)..=(col + 1).min(SIDE_LEN - 1) {
                let step = Step::new(from, number_at(row, to_col));
                if Self::check(board, side, step).is_ok() {
                    moves.push(step);
                }
            }
        }
        moves.sort();
        moves
    }
}
