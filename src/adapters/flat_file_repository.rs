//! Flat text file implementation of the memory repository.
//!
//! This adapter stores the memory in the `KEY:MOVE,...|...` format handled by
//! [`FlatCodec`], one file per variant.

use std::{fs, path::Path};

use crate::{
    Result,
    error::Error,
    game::GameMove,
    memory::{FlatCodec, MoveMemory},
    ports::MemoryRepository,
};

/// Flat-text-file memory repository.
///
/// Saving overwrites the whole file; nothing is appended or merged.
///
/// # Examples
///
/// ```no_run
/// use rote::adapters::FlatFileRepository;
/// use rote::ports::MemoryRepository;
/// use rote::variants::Placement;
/// use std::path::Path;
///
/// let repo = FlatFileRepository::new();
/// let memory = MemoryRepository::<Placement>::load(&repo, Path::new("ttt_ai_file.txt"))?;
/// println!("{} positions", memory.len());
/// # Ok::<(), rote::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FlatFileRepository;

impl FlatFileRepository {
    /// Create a new flat file repository.
    pub fn new() -> Self {
        Self
    }
}

impl<M: GameMove> MemoryRepository<M> for FlatFileRepository {
    fn save(&self, memory: &MoveMemory<M>, path: &Path) -> Result<()> {
        fs::write(path, FlatCodec::encode(memory)).map_err(|source| Error::Io {
            operation: format!("write memory store {path:?}"),
            source,
        })?;

        log::info!(
            "saved {} positions ({} moves) to {}",
            memory.len(),
            memory.move_count(),
            path.display()
        );
        Ok(())
    }

    fn load(&self, path: &Path) -> Result<MoveMemory<M>> {
        let empty = |source| Error::EmptyInput {
            location: path.display().to_string(),
            source,
        };

        let text = fs::read_to_string(path).map_err(|e| empty(Some(e)))?;
        if text.trim().is_empty() {
            return Err(empty(None));
        }

        let memory = FlatCodec::decode(&text)?;
        log::info!(
            "loaded {} positions ({} moves) from {}",
            memory.len(),
            memory.move_count(),
            path.display()
        );
        Ok(memory)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::{game::BoardKey, variants::Step};

    #[test]
    fn test_flat_file_roundtrip() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let file_path = temp_dir.path().join("hp_ai_file.txt");
        let text = "222010101:1-4,1-5,3-5,3-6|222100011:2-4,2-5,3-6";
        fs::write(&file_path, text).unwrap();

        let repo = FlatFileRepository::new();
        let memory: MoveMemory<Step> = repo.load(&file_path).expect("Failed to load");
        repo.save(&memory, &file_path).expect("Failed to save");

        assert_eq!(fs::read_to_string(&file_path).unwrap(), text);
    }

    #[test]
    fn test_save_overwrites_destination() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let file_path = temp_dir.path().join("hp_ai_file.txt");
        fs::write(&file_path, "222100011:2-4,2-5,3-6|222010101:1-5").unwrap();

        let repo = FlatFileRepository::new();
        let mut memory: MoveMemory<Step> = repo.load(&file_path).unwrap();
        memory.retract(&BoardKey::parse("222010101").unwrap(), Step::new(1, 5));
        repo.save(&memory, &file_path).unwrap();

        assert_eq!(
            fs::read_to_string(&file_path).unwrap(),
            "222100011:2-4,2-5,3-6"
        );
    }

    #[test]
    fn test_load_nonexistent_returns_error() {
        let repo = FlatFileRepository::new();
        let result: Result<MoveMemory<Step>> =
            repo.load(Path::new("/tmp/nonexistent_rote_12345.txt"));
        assert!(matches!(
            result,
            Err(Error::EmptyInput {
                source: Some(_),
                ..
            })
        ));
    }

    #[test]
    fn test_load_empty_file_returns_error() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("empty.txt");
        fs::write(&file_path, "").unwrap();

        let result: Result<MoveMemory<Step>> = FlatFileRepository::new().load(&file_path);
        assert!(matches!(
            result,
            Err(Error::EmptyInput { source: None, .. })
        ));
    }

    #[test]
    fn test_save_to_invalid_path_returns_error() {
        let repo = FlatFileRepository::new();
        let memory: MoveMemory<Step> = FlatCodec::decode("222100011:2-4").unwrap();
        let result = repo.save(&memory, Path::new("/invalid_dir_12345/hp_ai_file.txt"));
        assert!(matches!(result, Err(Error::Io { .. })));
    }
}
