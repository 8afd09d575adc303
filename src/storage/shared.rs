//! Shared storage
//!
//! External synchronization for using one engine from several threads.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::cell::ValueCell;
use crate::error::Result;

use super::{InMemoryStorage, Storage};

/// Cloneable, thread-safe handle to an `InMemoryStorage`
///
/// ## Concurrency:
/// - `inner`: RwLock (many concurrent readers, exclusive writer)
/// - Borrowed views only live inside `read`/`write` closures; everything
///   returned from this type is owned
#[derive(Debug, Clone, Default)]
pub struct SharedStorage {
    inner: Arc<RwLock<InMemoryStorage>>,
}

impl SharedStorage {
    /// Wrap an engine
    pub fn new(storage: InMemoryStorage) -> Self {
        Self {
            inner: Arc::new(RwLock::new(storage)),
        }
    }

    /// Run `f` under the read lock
    pub fn read<R>(&self, f: impl FnOnce(&InMemoryStorage) -> R) -> R {
        let guard = self.inner.read();
        f(&guard)
    }

    /// Run `f` under the write lock
    pub fn write<R>(&self, f: impl FnOnce(&mut InMemoryStorage) -> R) -> R {
        let mut guard = self.inner.write();
        f(&mut guard)
    }

    // =========================================================================
    // Write Shortcuts
    // =========================================================================

    pub fn store(&self, timestamp: i64, cells: Vec<ValueCell>) -> Result<()> {
        self.write(|storage| storage.store(timestamp, cells))
    }

    pub fn update(&self, timestamp: i64, cells: Vec<ValueCell>) -> Result<()> {
        self.write(|storage| storage.update(timestamp, cells))
    }

    pub fn erase(&self, timestamp: i64) -> bool {
        self.write(|storage| storage.erase(timestamp))
    }

    pub fn erase_tag(&self, timestamp: i64, tag: &str) -> bool {
        self.write(|storage| storage.erase_tag(timestamp, tag))
    }

    // =========================================================================
    // Read Shortcuts (owned results)
    // =========================================================================

    pub fn contains(&self, timestamp: i64) -> bool {
        self.read(|storage| storage.contains(timestamp))
    }

    pub fn contains_tag(&self, timestamp: i64, tag: &str) -> bool {
        self.read(|storage| storage.contains_tag(timestamp, tag))
    }

    pub fn len(&self) -> usize {
        self.read(|storage| storage.len())
    }

    pub fn is_empty(&self) -> bool {
        self.read(|storage| storage.is_empty())
    }

    pub fn len_at(&self, timestamp: i64) -> usize {
        self.read(|storage| storage.len_at(timestamp))
    }

    /// Copy of the live cell of `tag`
    pub fn get_tagged(&self, timestamp: i64, tag: &str) -> Option<ValueCell> {
        self.read(|storage| storage.get_tagged(timestamp, tag).cloned())
    }

    /// Copy of every resident cell of a row (same content as `get_data`)
    pub fn snapshot_row(&self, timestamp: i64) -> Vec<ValueCell> {
        self.read(|storage| storage.get_data(timestamp).into_iter().cloned().collect())
    }

    /// Copy of a range, walked through a range view
    pub fn snapshot_range(&self, start: i64, end: i64, ascending: bool) -> Vec<(i64, Vec<ValueCell>)> {
        self.read(|storage| {
            storage
                .range_view(start, end, ascending)
                .into_iter()
                .map(|row| {
                    let cells: Vec<ValueCell> = row.cells.into_iter().cloned().collect();
                    (row.timestamp, cells)
                })
                .collect()
        })
    }
}

impl From<InMemoryStorage> for SharedStorage {
    fn from(storage: InMemoryStorage) -> Self {
        Self::new(storage)
    }
}
