//! Ports (trait boundaries) for external dependencies.
//!
//! This module defines the interfaces between the game engine and
//! infrastructure. The traits are owned by the engine and implemented by
//! adapters in the infrastructure layer.

pub mod repository;

pub use repository::MemoryRepository;
