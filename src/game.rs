//! Board model and the rule module abstraction

pub mod board;
pub mod lines;
pub mod rules;

pub use board::{Board, BoardKey, CELLS, Cell, SIDE_LEN, Side};
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use rules::{GameMove, GameResult, RuleModule};
