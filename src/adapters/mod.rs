//! Adapters implementing engine ports.
//!
//! This module contains infrastructure implementations of the traits defined
//! in the ports module. Adapters depend on the ports, not the other way around.

pub mod flat_file_repository;
pub mod in_memory_repository;
pub mod msgpack_repository;

pub use flat_file_repository::FlatFileRepository;
pub use in_memory_repository::InMemoryRepository;
pub use msgpack_repository::MsgPackRepository;
