//! Configuration types for game sessions.

use std::path::{Path, PathBuf};

use clap::ValueEnum;

/// On-disk encoding of the move memory
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum StoreFormat {
    /// `KEY:MOVE,...|...` text
    #[default]
    Flat,
    /// MessagePack sequence of `(key, moves)` pairs
    #[value(name = "msgpack")]
    MsgPack,
}

/// Configuration for opening a game session.
///
/// # Examples
///
/// ```
/// use rote::app::{SessionConfig, StoreFormat};
///
/// let config = SessionConfig::new("ttt_ai_file.txt")
///     .with_seed(42)
///     .with_format(StoreFormat::Flat);
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Where the move memory is loaded from and saved to
    pub memory_path: PathBuf,
    /// Encoding of the store at `memory_path`
    pub format: StoreFormat,
    /// Random seed for reproducible computer moves
    pub seed: Option<u64>,
}

impl SessionConfig {
    /// Create a configuration for the flat store at `memory_path`, unseeded.
    pub fn new(memory_path: impl Into<PathBuf>) -> Self {
        Self {
            memory_path: memory_path.into(),
            format: StoreFormat::default(),
            seed: None,
        }
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_format(mut self, format: StoreFormat) -> Self {
        self.format = format;
        self
    }

    pub fn memory_path(&self) -> &Path {
        &self.memory_path
    }
}
