//! In-memory memory repository for testing.
//!
//! This adapter keeps encoded memories in a shared map instead of on disk,
//! enabling fast tests without any file system I/O.

use std::{
    collections::HashMap,
    path::Path,
    sync::{Arc, Mutex, MutexGuard},
};

use crate::{
    Result,
    error::Error,
    game::GameMove,
    memory::{FlatCodec, MoveMemory},
    ports::MemoryRepository,
};

/// In-memory repository for testing.
///
/// Stores each memory as flat text keyed by path, so what a test sees is
/// exactly what would have been written to a file.
///
/// # Examples
///
/// ```
/// use rote::adapters::InMemoryRepository;
/// use rote::ports::MemoryRepository;
/// use rote::variants::Placement;
/// use std::path::Path;
///
/// let repo = InMemoryRepository::new();
/// repo.insert_text(Path::new("ttt"), "000010000:1,3,7,9");
///
/// let memory = MemoryRepository::<Placement>::load(&repo, Path::new("ttt"))?;
/// assert_eq!(memory.len(), 1);
/// # Ok::<(), rote::Error>(())
/// ```
///
/// # Thread Safety
///
/// All clones share the same underlying storage.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    storage: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryRepository {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    fn storage(&self) -> MutexGuard<'_, HashMap<String, String>> {
        // A poisoned lock only means another test panicked mid-write.
        self.storage
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Store raw flat text at `path`, as if it had been written to disk.
    pub fn insert_text(&self, path: &Path, text: &str) {
        self.storage()
            .insert(path.to_string_lossy().to_string(), text.to_string());
    }

    /// Raw flat text stored at `path`, if any.
    pub fn text(&self, path: &Path) -> Option<String> {
        self.storage().get(path.to_string_lossy().as_ref()).cloned()
    }

    /// Get the number of memories currently stored.
    pub fn count(&self) -> usize {
        self.storage().len()
    }

    /// Check if a memory exists at the given path.
    pub fn contains(&self, path: &Path) -> bool {
        self.storage()
            .contains_key(path.to_string_lossy().as_ref())
    }
}

impl<M: GameMove> MemoryRepository<M> for InMemoryRepository {
    fn save(&self, memory: &MoveMemory<M>, path: &Path) -> Result<()> {
        self.insert_text(path, &FlatCodec::encode(memory));
        Ok(())
    }

    fn load(&self, path: &Path) -> Result<MoveMemory<M>> {
        let text = self.text(path).ok_or_else(|| Error::EmptyInput {
            location: format!("in-memory storage at {path:?}"),
            source: Some(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "key not found in memory",
            )),
        })?;

        FlatCodec::decode(&text)
    }
}
