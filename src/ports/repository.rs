//! Repository port for move memory persistence.
//!
//! This module defines the trait boundary between the engine and the storage
//! format of its move memory.

use std::path::Path;

use crate::{Result, game::GameMove, memory::MoveMemory};

/// Port for loading and saving a move memory.
///
/// The memory is loaded once when a session starts and saved once when it
/// ends. Implementations choose the format (flat text, MessagePack, ...)
/// without the engine knowing about it.
///
/// # Examples
///
/// ```no_run
/// use rote::ports::MemoryRepository;
/// use rote::adapters::FlatFileRepository;
/// use rote::variants::Step;
/// use std::path::Path;
///
/// let repo = FlatFileRepository::new();
/// let memory = MemoryRepository::<Step>::load(&repo, Path::new("hp_ai_file.txt"))?;
/// repo.save(&memory, Path::new("hp_ai_file.txt"))?;
/// # Ok::<(), rote::Error>(())
/// ```
pub trait MemoryRepository<M: GameMove> {
    /// Save a memory, replacing whatever the destination held before.
    ///
    /// # Errors
    ///
    /// Returns an error if the destination cannot be written.
    fn save(&self, memory: &MoveMemory<M>, path: &Path) -> Result<()>;

    /// Load a memory.
    ///
    /// # Errors
    ///
    /// Returns an error if the source is missing, empty, unreadable or
    /// malformed. A missing store is never replaced by an empty memory.
    fn load(&self, path: &Path) -> Result<MoveMemory<M>>;
}
