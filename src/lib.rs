//! Rote-learning engine for small board games
//!
//! The computer picks its moves from a persisted table of known responses per
//! board position and forgets a response whenever it leads to a loss. Given
//! enough games the surviving responses are the ones that never lose.
//!
//! This crate provides:
//! - Board state and a rule module abstraction with hexapawn and tic-tac-toe
//! - A prunable move memory with seeded random selection
//! - Flat-text and MessagePack memory stores behind a repository port
//! - A game controller state machine that applies moves and prunes on loss
//! - A console front end for interactive play

pub mod adapters;
pub mod app;
pub mod cli;
pub mod controller;
pub mod error;
pub mod game;
pub mod memory;
pub mod ports;
pub mod variants;

pub use controller::{ComputerTurn, GameController, MoveRecord, Phase};
pub use error::{Error, MoveError, ParseMoveError, Result};
pub use game::{Board, BoardKey, Cell, GameMove, GameResult, RuleModule, Side};
pub use memory::{FlatCodec, MoveMemory, seed_memory};
pub use variants::{Hexapawn, Placement, Step, TicTacToe, Variant};
