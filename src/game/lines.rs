//! Winning line analysis for the 3x3 board

use super::board::{CELLS, Cell, Side};

/// Winning line indices on the 3x3 board (0-based)
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Utility for analyzing winning lines
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Check if a side has three marks in a row
    pub fn has_won(cells: &[Cell; CELLS], side: Side) -> bool {
        let target = side.mark();
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&idx| cells[idx] == target))
    }

    /// The side holding a complete line, checking the player first
    pub fn winner(cells: &[Cell; CELLS]) -> Option<Side> {
        [Side::Player, Side::Computer]
            .into_iter()
            .find(|&side| Self::has_won(cells, side))
    }
}
