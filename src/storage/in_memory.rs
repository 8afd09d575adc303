//! In-memory storage engine
//!
//! BTreeMap of timestamp → row, each row owning its slots, tag index and
//! free list.

use std::collections::BTreeMap;

use crate::cell::ValueCell;
use crate::config::Config;
use crate::cursor::RangeView;
use crate::error::{CellStoreError, Result};

use super::row::TimestampRow;
use super::{CellHandle, Storage};

/// Timestamp-ordered rows
pub(crate) type Rows = BTreeMap<i64, TimestampRow>;

/// In-memory tagged-cell storage engine
///
/// ## Concurrency Model
/// None internally. Reads borrow `&self` and hand out views into row
/// storage; writes need `&mut self`, so the borrow checker rules out views
/// outliving a mutation. Wrap in `SharedStorage` to share across threads.
///
/// ## Slot Recycling
/// Erasing a tag only moves its slot to the free list (O(1), no
/// compaction). The next store/update of that timestamp reuses free slots
/// before growing the row.
#[derive(Debug, Clone)]
pub struct InMemoryStorage {
    /// Rows ordered by timestamp (O(log n) lookup, ordered range scans)
    rows: Rows,

    /// Last generation handed out; strictly increasing across all rows
    last_generation: u64,

    /// Slots reserved for newly created rows
    row_capacity: usize,
}

impl InMemoryStorage {
    /// Create an empty engine with default configuration
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    /// Create an empty engine
    pub fn with_config(config: &Config) -> Self {
        Self {
            rows: BTreeMap::new(),
            last_generation: 0,
            row_capacity: config.row_capacity,
        }
    }

    // =========================================================================
    // Handles
    // =========================================================================

    /// Handle to the live cell of `tag` at `timestamp`
    pub fn handle(&self, timestamp: i64, tag: &str) -> Option<CellHandle> {
        let row = self.rows.get(&timestamp)?;
        let slot = row.live_slot(tag)?;
        Some(CellHandle::new(timestamp, row.generation(), slot))
    }

    /// Handles to every resident slot of `timestamp`, in slot order
    pub fn row_handles(&self, timestamp: i64) -> Vec<CellHandle> {
        match self.rows.get(&timestamp) {
            Some(row) => (0..row.slot_count())
                .map(|slot| CellHandle::new(timestamp, row.generation(), slot))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Resolve a handle, failing if its row changed since it was issued
    pub fn resolve(&self, handle: &CellHandle) -> Result<&ValueCell> {
        let stale = || CellStoreError::StaleHandle {
            timestamp: handle.timestamp(),
            generation: handle.generation(),
        };

        let row = self.rows.get(&handle.timestamp()).ok_or_else(stale)?;
        if row.generation() != handle.generation() {
            return Err(stale());
        }
        row.slot(handle.slot()).ok_or_else(stale)
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// Stored timestamps, ascending
    pub fn timestamps(&self) -> Vec<i64> {
        self.rows.keys().copied().collect()
    }

    /// Physical slot count of a row (live + stale + orphaned)
    pub fn slot_count(&self, timestamp: i64) -> usize {
        self.rows.get(&timestamp).map_or(0, TimestampRow::slot_count)
    }

    /// Number of reclaimed slots waiting for reuse
    pub fn free_slot_count(&self, timestamp: i64) -> usize {
        self.rows.get(&timestamp).map_or(0, TimestampRow::free_count)
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    fn next_generation(&mut self) -> u64 {
        self.last_generation += 1;
        self.last_generation
    }

    /// Shared body of store and update
    fn place(&mut self, operation: &'static str, timestamp: i64, cells: Vec<ValueCell>) -> Result<()> {
        if timestamp < 0 {
            tracing::warn!(operation, timestamp, "rejected negative timestamp");
            return Err(CellStoreError::NegativeTimestamp(timestamp));
        }

        let generation = self.next_generation();
        let capacity = self.row_capacity;
        let row = self.rows.entry(timestamp).or_insert_with(|| {
            tracing::debug!(timestamp, "creating row");
            TimestampRow::with_capacity(capacity, generation)
        });

        let placement = row.place(timestamp, cells, generation);
        tracing::trace!(
            operation,
            timestamp,
            reused_free = placement.reused_free,
            overwritten = placement.overwritten,
            appended = placement.appended,
            "placed cells"
        );
        Ok(())
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for InMemoryStorage {
    fn store(&mut self, timestamp: i64, cells: Vec<ValueCell>) -> Result<()> {
        self.place("store", timestamp, cells)
    }

    fn update(&mut self, timestamp: i64, cells: Vec<ValueCell>) -> Result<()> {
        self.place("update", timestamp, cells)
    }

    fn erase(&mut self, timestamp: i64) -> bool {
        let erased = self.rows.remove(&timestamp).is_some();
        if erased {
            tracing::debug!(timestamp, "erased row");
        }
        erased
    }

    fn erase_tag(&mut self, timestamp: i64, tag: &str) -> bool {
        let candidate = self.last_generation + 1;
        let Some(row) = self.rows.get_mut(&timestamp) else {
            return false;
        };

        let erased = row.erase_tag(tag, candidate);
        if erased {
            self.last_generation = candidate;
            tracing::debug!(timestamp, tag, "erased tag");
        }
        erased
    }

    fn contains(&self, timestamp: i64) -> bool {
        self.rows.contains_key(&timestamp)
    }

    fn contains_tag(&self, timestamp: i64, tag: &str) -> bool {
        self.rows
            .get(&timestamp)
            .is_some_and(|row| row.contains_tag(tag))
    }

    fn get_data(&self, timestamp: i64) -> Vec<&ValueCell> {
        self.rows
            .get(&timestamp)
            .map(TimestampRow::cells)
            .unwrap_or_default()
    }

    fn get_live_data(&self, timestamp: i64) -> Vec<&ValueCell> {
        self.rows
            .get(&timestamp)
            .map(TimestampRow::live_cells)
            .unwrap_or_default()
    }

    fn get_tagged(&self, timestamp: i64, tag: &str) -> Option<&ValueCell> {
        self.rows.get(&timestamp)?.get(tag)
    }

    fn get_data_in_range(&self, start: i64, end: i64, ascending: bool) -> Vec<Vec<&ValueCell>> {
        // BTreeMap::range panics on an inverted range
        if start > end {
            return Vec::new();
        }

        let rows = self.rows.range(start..=end).map(|(_, row)| row.cells());
        if ascending {
            rows.collect()
        } else {
            rows.rev().collect()
        }
    }

    fn range_view(&self, start: i64, end: i64, ascending: bool) -> RangeView<'_> {
        RangeView::over(&self.rows, start, end, ascending)
    }

    fn tags(&self, timestamp: i64) -> Vec<&str> {
        self.rows
            .get(&timestamp)
            .map(TimestampRow::tags)
            .unwrap_or_default()
    }

    fn len(&self) -> usize {
        self.rows.len()
    }

    fn len_at(&self, timestamp: i64) -> usize {
        self.rows.get(&timestamp).map_or(0, TimestampRow::tag_count)
    }
}
