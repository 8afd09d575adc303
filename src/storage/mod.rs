//! Storage Module
//!
//! Timestamp-keyed, tagged-cell storage.
//!
//! ## Responsibilities
//! - Keep, per timestamp, a slot array ("row"), a tag → slot index and a
//!   free-slot set consistent under store/update/erase
//! - O(log n) timestamp lookup, amortized O(1) tag lookup
//! - O(1) tag erase without compacting the row
//! - Ordered range queries, materialized or as lazy views
//!
//! ## Row Layout
//! ```text
//!  timestamp 1002
//!  ┌─────────┬─────────┬─────────┬─────────┐
//!  │ slot 0  │ slot 1  │ slot 2  │ slot 3  │   row (slots never removed)
//!  │ temp    │ unit    │ (stale) │ (orphan)│
//!  └────▲────┴────▲────┴────▲────┴─────────┘
//!       │         │         │
//!  tags: temp→0  unit→1     │                  tag index (live cells)
//!  free: ───────────────── {2}                  free list (reused first)
//! ```
//!
//! An orphan is a cell whose tag was left out of a later store: it keeps its
//! slot (and shows up in `get_data`) but is no longer addressable by tag.

mod factory;
mod handle;
mod in_memory;
mod row;
mod shared;

pub use factory::StorageFactory;
pub use handle::CellHandle;
pub use in_memory::InMemoryStorage;
pub use shared::SharedStorage;

pub(crate) use in_memory::Rows;

use crate::cell::ValueCell;
use crate::cursor::RangeView;
use crate::error::Result;

/// Contract of a tagged-cell storage engine
///
/// Misses are never errors: unknown timestamps or tags yield `None`, an
/// empty `Vec`, `0` or `false`.
pub trait Storage {
    /// Upsert-merge `cells` into the row of `timestamp`
    ///
    /// Rebuilds the tag index from `cells`; previously indexed tags that are
    /// absent become orphans. Fails only on a negative timestamp.
    fn store(&mut self, timestamp: i64, cells: Vec<ValueCell>) -> Result<()>;

    /// Same mechanics as `store`
    fn update(&mut self, timestamp: i64, cells: Vec<ValueCell>) -> Result<()>;

    /// Drop the whole row of `timestamp`; false if there was none
    fn erase(&mut self, timestamp: i64) -> bool;

    /// Free the slot of `tag`; false if the tag is not indexed
    fn erase_tag(&mut self, timestamp: i64, tag: &str) -> bool;

    /// A row exists for `timestamp`
    fn contains(&self, timestamp: i64) -> bool;

    /// `tag` is indexed at `timestamp` and its slot is not freed
    fn contains_tag(&self, timestamp: i64, tag: &str) -> bool;

    /// Every physically resident cell of the row, orphans and freed slots included
    fn get_data(&self, timestamp: i64) -> Vec<&ValueCell>;

    /// Tag-addressable cells of the row only
    fn get_live_data(&self, timestamp: i64) -> Vec<&ValueCell>;

    /// The live cell of `tag`
    fn get_tagged(&self, timestamp: i64, tag: &str) -> Option<&ValueCell>;

    /// Rows with `start <= timestamp <= end`, one cell list per row
    fn get_data_in_range(&self, start: i64, end: i64, ascending: bool) -> Vec<Vec<&ValueCell>>;

    /// Lazy view over the same span as `get_data_in_range`
    fn range_view(&self, start: i64, end: i64, ascending: bool) -> RangeView<'_>;

    /// Live tag names of the row, in slot order
    fn tags(&self, timestamp: i64) -> Vec<&str>;

    /// Number of stored timestamps
    fn len(&self) -> usize;

    /// Number of live (tag-indexed) cells at `timestamp`
    fn len_at(&self, timestamp: i64) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
