//! Prunable table of admissible computer moves per board key

use std::collections::{BTreeMap, HashSet};

use rand::{Rng, prelude::IndexedRandom};

use crate::game::{BoardKey, GameMove};

/// Mapping from board key to the moves still considered safe from it.
///
/// Every key present maps to a non-empty move list. The table only ever
/// shrinks: moves are removed by [`retract`](Self::retract) and there is no
/// runtime insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveMemory<M> {
    entries: BTreeMap<BoardKey, Vec<M>>,
}

impl<M: GameMove> MoveMemory<M> {
    /// Build a memory from whole entries, keeping each move list's order.
    ///
    /// # Errors
    ///
    /// Returns an error if a key repeats, a move list is empty, or a move list
    /// names the same move twice.
    pub fn from_entries<I>(entries: I) -> crate::Result<Self>
    where
        I: IntoIterator<Item = (BoardKey, Vec<M>)>,
    {
        let mut map = BTreeMap::new();
        for (key, moves) in entries {
            if moves.is_empty() {
                return Err(crate::Error::MalformedRecord {
                    record: key.to_string(),
                    reason: "empty move list".to_string(),
                });
            }

            let mut seen = HashSet::new();
            if let Some(dup) = moves.iter().find(|mv| !seen.insert(**mv)) {
                return Err(crate::Error::MalformedRecord {
                    record: key.to_string(),
                    reason: format!("move {dup} listed more than once"),
                });
            }

            if map.contains_key(&key) {
                return Err(crate::Error::DuplicateKey {
                    key: key.to_string(),
                });
            }
            map.insert(key, moves);
        }

        Ok(MoveMemory { entries: map })
    }

    /// Pick a stored move for `key` uniformly at random.
    ///
    /// Returns `None` when the key is unknown, which the controller treats as
    /// the computer conceding.
    pub fn propose<R: Rng + ?Sized>(&self, key: &BoardKey, rng: &mut R) -> Option<M> {
        self.entries.get(key)?.choose(rng).copied()
    }

    /// Forget `mv` as a response to `key`.
    ///
    /// Unknown keys and moves are ignored. The key is dropped once its last
    /// move is removed. Returns whether a move was removed.
    pub fn retract(&mut self, key: &BoardKey, mv: M) -> bool {
        let Some(moves) = self.entries.get_mut(key) else {
            return false;
        };
        let Some(idx) = moves.iter().position(|&m| m == mv) else {
            return false;
        };

        moves.remove(idx);
        if moves.is_empty() {
            self.entries.remove(key);
        }
        true
    }

    /// Moves stored for `key`
    pub fn moves(&self, key: &BoardKey) -> Option<&[M]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    pub fn contains(&self, key: &BoardKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of board keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of stored moves across all keys
    pub fn move_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Iterate over entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (&BoardKey, &[M])> + '_ {
        self.entries.iter().map(|(key, moves)| (key, moves.as_slice()))
    }
}
