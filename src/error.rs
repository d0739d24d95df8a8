//! Error types for the rote crate

use thiserror::Error;

/// Main error type for the rote crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("memory store at {location} is empty or unreadable")]
    EmptyInput {
        location: String,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("malformed record '{record}': {reason}")]
    MalformedRecord { record: String, reason: String },

    #[error("board key '{key}' appears in more than one record")]
    DuplicateKey { key: String },

    #[error("invalid board key '{key}': {reason}")]
    InvalidBoardKey { key: String, reason: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to {operation}: {message}")]
    SerializationContext { operation: String, message: String },

    #[error("action is not allowed while the game is {phase}")]
    OutOfTurn { phase: String },

    #[error("no memory store is configured for this session")]
    StoreNotConfigured,

    #[error(transparent)]
    Move(#[from] MoveError),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Reasons a submitted player move is rejected.
///
/// A rejected move never changes the board; the caller re-prompts.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("cell number is outside the board (must be 1-9)")]
    OutOfRange,

    #[error("there is no piece of yours on the origin cell")]
    NoPieceAtOrigin,

    #[error("that move is not allowed from this position")]
    IllegalTransition,

    #[error("it is not your turn")]
    OutOfTurn,
}

/// A move notation that could not be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid move notation '{notation}' (expected {expected})")]
pub struct ParseMoveError {
    pub notation: String,
    pub expected: &'static str,
}
