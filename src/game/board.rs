//! Board state representation and basic operations

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Number of cells on the board
pub const CELLS: usize = 9;

/// Number of rows (and columns) on the square board
pub const SIDE_LEN: usize = 3;

/// A cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Player,
    Computer,
}

impl Cell {
    /// Digit used for this cell in a board key
    pub fn to_digit(self) -> char {
        match self {
            Cell::Empty => '0',
            Cell::Player => '1',
            Cell::Computer => '2',
        }
    }

    pub fn from_digit(c: char) -> Option<Cell> {
        match c {
            '0' => Some(Cell::Empty),
            '1' => Some(Cell::Player),
            '2' => Some(Cell::Computer),
            _ => None,
        }
    }

    /// The side owning this cell, if any
    pub fn owner(self) -> Option<Side> {
        match self {
            Cell::Player => Some(Side::Player),
            Cell::Computer => Some(Side::Computer),
            Cell::Empty => None,
        }
    }
}

/// One of the two participants of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Player,
    Computer,
}

impl Side {
    /// Get the opposing side
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Computer,
            Side::Computer => Side::Player,
        }
    }

    /// The mark this side leaves on the board
    pub fn mark(self) -> Cell {
        match self {
            Side::Player => Cell::Player,
            Side::Computer => Cell::Computer,
        }
    }
}

/// Zero-based row of a 1-based cell number
pub fn row_of(number: usize) -> usize {
    (number - 1) / SIDE_LEN
}

/// Zero-based column of a 1-based cell number
pub fn col_of(number: usize) -> usize {
    (number - 1) % SIDE_LEN
}

/// 1-based cell number at a zero-based row and column
pub fn number_at(row: usize, col: usize) -> usize {
    row * SIDE_LEN + col + 1
}

/// Fixed-size board of nine cells.
///
/// Cells are addressed by their 1-based number, row-major:
///
/// ```text
/// 1 2 3
/// 4 5 6
/// 7 8 9
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELLS],
}

impl Board {
    /// Create a board with every cell empty
    pub fn empty() -> Self {
        Self::from_cells([Cell::Empty; CELLS])
    }

    pub fn from_cells(cells: [Cell; CELLS]) -> Self {
        Board { cells }
    }

    /// Rebuild the board a key was taken from
    pub fn from_key(key: &BoardKey) -> Self {
        let mut cells = [Cell::Empty; CELLS];
        // BoardKey guarantees nine valid digits
        for (cell, c) in cells.iter_mut().zip(key.as_str().chars()) {
            *cell = Cell::from_digit(c).unwrap_or(Cell::Empty);
        }
        Board { cells }
    }

    pub fn cells(&self) -> &[Cell; CELLS] {
        &self.cells
    }

    /// Get the cell with the given 1-based number, or `None` when it is off the board
    pub fn at(&self, number: usize) -> Option<Cell> {
        number
            .checked_sub(1)
            .and_then(|idx| self.cells.get(idx))
            .copied()
    }

    /// Overwrite the cell with the given 1-based number.
    ///
    /// Numbers outside the board are ignored.
    pub fn set(&mut self, number: usize, cell: Cell) {
        if let Some(slot) = number
            .checked_sub(1)
            .and_then(|idx| self.cells.get_mut(idx))
        {
            *slot = cell;
        }
    }

    /// 1-based numbers of every cell holding `cell`
    pub fn positions(&self, cell: Cell) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c == cell)
            .map(|(i, _)| i + 1)
            .collect()
    }

    /// Check if no empty cell remains
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Get the canonical key for this board
    pub fn key(&self) -> BoardKey {
        BoardKey(self.cells.iter().map(|&c| c.to_digit()).collect())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_digit())?;
            if (i + 1).is_multiple_of(SIDE_LEN) && i < CELLS - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Nine-digit encoding of a board, used as the move memory lookup key.
///
/// Each cell is rendered as `0` (empty), `1` (player) or `2` (computer),
/// e.g. `"222000111"` for the opening hexapawn position.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BoardKey(String);

impl BoardKey {
    /// Parse and validate a board key.
    ///
    /// # Errors
    ///
    /// Returns an error unless the key is exactly nine characters from `0`, `1` and `2`.
    pub fn parse(s: &str) -> Result<Self, crate::Error> {
        let invalid = |reason: String| crate::Error::InvalidBoardKey {
            key: s.to_string(),
            reason,
        };

        let len = s.chars().count();
        if len != CELLS {
            return Err(invalid(format!("expected {CELLS} cells, got {len}")));
        }
        if let Some((position, c)) = s
            .chars()
            .enumerate()
            .find(|&(_, c)| Cell::from_digit(c).is_none())
        {
            return Err(invalid(format!(
                "character '{c}' at position {} is not 0, 1 or 2",
                position + 1
            )));
        }

        Ok(BoardKey(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for BoardKey {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for BoardKey {
    type Error = crate::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<BoardKey> for String {
    fn from(key: BoardKey) -> Self {
        key.0
    }
}

impl AsRef<str> for BoardKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BoardKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
