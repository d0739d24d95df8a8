//! MessagePack implementation of the memory repository.
//!
//! This adapter implements the MemoryRepository port using rmp_serde for
//! compact binary serialization, as an alternative to the flat text format.

use std::{fs::File, path::Path};

use crate::{
    Result,
    error::Error,
    game::{BoardKey, GameMove},
    memory::MoveMemory,
    ports::MemoryRepository,
};

/// MessagePack-based memory repository.
///
/// The memory is stored as a sequence of `(key, moves)` pairs. Loading goes
/// through the same validation as the flat format, so duplicate keys and
/// empty move lists are rejected here too.
///
/// # Examples
///
/// ```no_run
/// use rote::adapters::MsgPackRepository;
/// use rote::memory::seed_memory;
/// use rote::ports::MemoryRepository;
/// use rote::variants::{Hexapawn, Step};
/// use std::path::Path;
///
/// let repo = MsgPackRepository;
/// let memory = seed_memory(&Hexapawn)?;
///
/// repo.save(&memory, Path::new("hexapawn.msgpack"))?;
/// let loaded = MemoryRepository::<Step>::load(&repo, Path::new("hexapawn.msgpack"))?;
/// # Ok::<(), rote::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MsgPackRepository;

impl MsgPackRepository {
    /// Create a new MessagePack repository.
    pub fn new() -> Self {
        Self
    }
}

impl<M: GameMove> MemoryRepository<M> for MsgPackRepository {
    fn save(&self, memory: &MoveMemory<M>, path: &Path) -> Result<()> {
        let mut file = File::create(path).map_err(|source| Error::Io {
            operation: format!("create file {path:?}"),
            source,
        })?;

        let entries: Vec<(&BoardKey, &[M])> = memory.iter().collect();
        rmp_serde::encode::write(&mut file, &entries).map_err(|e| {
            Error::SerializationContext {
                operation: "serialize move memory to MessagePack".to_string(),
                message: e.to_string(),
            }
        })?;

        log::info!("saved {} positions to {}", memory.len(), path.display());
        Ok(())
    }

    fn load(&self, path: &Path) -> Result<MoveMemory<M>> {
        let file = File::open(path).map_err(|source| Error::EmptyInput {
            location: path.display().to_string(),
            source: Some(source),
        })?;

        let entries: Vec<(BoardKey, Vec<M>)> =
            rmp_serde::decode::from_read(&file).map_err(|e| Error::SerializationContext {
                operation: "deserialize move memory from MessagePack".to_string(),
                message: e.to_string(),
            })?;
        if entries.is_empty() {
            return Err(Error::EmptyInput {
                location: path.display().to_string(),
                source: None,
            });
        }

        let memory = MoveMemory::from_entries(entries)?;
        log::info!("loaded {} positions from {}", memory.len(), path.display());
        Ok(memory)
    }
}
