//! Move memory: the prunable table the computer plays from
//!
//! This module provides the in-memory table, its flat text codec, and the
//! seeding walk that produces a fresh table for a variant.

pub mod codec;
pub mod move_memory;
pub mod seed;

pub use codec::FlatCodec;
pub use move_memory::MoveMemory;
pub use seed::seed_memory;
