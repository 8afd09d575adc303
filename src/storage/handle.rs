//! Cell handles
//!
//! Copyable references to a slot that survive mutation of the engine and
//! are re-validated on use.

use std::fmt;

/// Generation-checked reference to one slot of a timestamp's row
///
/// Obtained from `InMemoryStorage::handle` / `row_handles` and turned back
/// into a cell with `InMemoryStorage::resolve`. Any mutation of the row
/// (store, update, tag erase, row erase) makes the handle stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellHandle {
    timestamp: i64,
    generation: u64,
    slot: usize,
}

impl CellHandle {
    pub(crate) fn new(timestamp: i64, generation: u64, slot: usize) -> Self {
        Self {
            timestamp,
            generation,
            slot,
        }
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// Row generation the handle was issued under
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn slot(&self) -> usize {
        self.slot
    }
}

impl fmt::Display for CellHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}@g{}", self.timestamp, self.slot, self.generation)
    }
}
