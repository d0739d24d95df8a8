//! Flat text encoding of a move memory.
//!
//! Records are separated by `|`; each record is `KEY:MOVE,MOVE,...`, where
//! `KEY` is the nine-digit board key and each `MOVE` uses the variant's
//! notation (`5` for placements, `7-4` for pawn steps). For example:
//!
//! ```text
//! 222100011:2-4,2-5,3-6|222010101:1-5,3-5,1-4,3-6
//! ```
//!
//! There is no escaping and no trailing separator.

use super::move_memory::MoveMemory;
use crate::{
    Result,
    error::Error,
    game::{BoardKey, GameMove},
};

pub const RECORD_SEPARATOR: char = '|';
pub const KEY_SEPARATOR: char = ':';
pub const MOVE_SEPARATOR: char = ',';

/// Encoder/decoder for the flat `KEY:MOVE,...|...` format
#[derive(Debug, Clone, Copy, Default)]
pub struct FlatCodec;

impl FlatCodec {
    /// Parse flat text into a move memory.
    ///
    /// A single trailing newline is tolerated.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyInput`] when the text is blank
    /// - [`Error::MalformedRecord`] when a record has no single `:` separator,
    ///   an invalid key, an empty move list, or a move that does not parse
    /// - [`Error::DuplicateKey`] when a key appears twice
    pub fn decode<M: GameMove>(text: &str) -> Result<MoveMemory<M>> {
        let body = text.strip_suffix('\n').unwrap_or(text);
        let body = body.strip_suffix('\r').unwrap_or(body);
        if body.trim().is_empty() {
            return Err(Error::EmptyInput {
                location: "flat text".to_string(),
                source: None,
            });
        }

        let entries = body
            .split(RECORD_SEPARATOR)
            .map(Self::decode_record)
            .collect::<Result<Vec<_>>>()?;

        MoveMemory::from_entries(entries)
    }

    fn decode_record<M: GameMove>(record: &str) -> Result<(BoardKey, Vec<M>)> {
        let malformed = |reason: String| Error::MalformedRecord {
            record: record.to_string(),
            reason,
        };

        let (key, moves) = record
            .split_once(KEY_SEPARATOR)
            .ok_or_else(|| malformed(format!("missing '{KEY_SEPARATOR}' separator")))?;
        if moves.contains(KEY_SEPARATOR) {
            return Err(malformed(format!("more than one '{KEY_SEPARATOR}' separator")));
        }

        let key = BoardKey::parse(key).map_err(|e| malformed(e.to_string()))?;
        if moves.is_empty() {
            return Err(malformed("empty move list".to_string()));
        }

        let moves = moves
            .split(MOVE_SEPARATOR)
            .map(|mv| mv.parse::<M>().map_err(|e| malformed(e.to_string())))
            .collect::<Result<Vec<_>>>()?;

        Ok((key, moves))
    }

    /// Render a move memory as flat text, in key order
    pub fn encode<M: GameMove>(memory: &MoveMemory<M>) -> String {
        let mut out = String::new();
        for (i, (key, moves)) in memory.iter().enumerate() {
            if i > 0 {
                out.push(RECORD_SEPARATOR);
            }
            out.push_str(key.as_str());
            out.push(KEY_SEPARATOR);
            for (j, mv) in moves.iter().enumerate() {
                if j > 0 {
                    out.push(MOVE_SEPARATOR);
                }
                out.push_str(&mv.to_string());
            }
        }
        out
    }
}
