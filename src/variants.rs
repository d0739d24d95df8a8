//! Game variants built on the shared rule module abstraction

pub mod hexapawn;
pub mod tictactoe;

use std::path::PathBuf;

use clap::ValueEnum;

use crate::app::StoreFormat;

pub use hexapawn::{Hexapawn, Step};
pub use tictactoe::{Placement, TicTacToe};

/// Selectable game variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Variant {
    /// 3x3 pawn race with diagonal captures
    #[value(alias = "hp")]
    Hexapawn,
    /// Noughts and crosses
    #[value(name = "tictactoe", alias = "ttt")]
    TicTacToe,
}

impl Variant {
    /// File the move memory is kept in when no path is given
    pub fn default_memory_file(self) -> &'static str {
        match self {
            Variant::Hexapawn => "hp_ai_file.txt",
            Variant::TicTacToe => "ttt_ai_file.txt",
        }
    }

    /// Default store path for `format`
    pub fn default_memory_path(self, format: StoreFormat) -> PathBuf {
        let path = PathBuf::from(self.default_memory_file());
        match format {
            StoreFormat::Flat => path,
            StoreFormat::MsgPack => path.with_extension("msgpack"),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Variant::Hexapawn => "hexapawn",
            Variant::TicTacToe => "tictactoe",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_memory_paths() {
        assert_eq!(
            Variant::Hexapawn.default_memory_path(StoreFormat::Flat),
            PathBuf::from("hp_ai_file.txt")
        );
        assert_eq!(
            Variant::TicTacToe.default_memory_path(StoreFormat::MsgPack),
            PathBuf::from("ttt_ai_file.msgpack")
        );
    }
}
