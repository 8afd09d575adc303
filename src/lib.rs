//! # cellstore
//!
//! An in-process, timestamp-keyed, tagged-cell storage engine with:
//! - Per-timestamp rows of named scalar cells (integer, decimal, text)
//! - Whole-row and per-tag access
//! - O(1) tag erase with slot recycling (no row compaction)
//! - Ordered range queries, materialized or through lazy bidirectional views
//! - Generation-checked handles for references that outlive a mutation
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     QueryHandler                            │
//! │        (existence guards, batches, text commands)           │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │  Storage trait
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                   InMemoryStorage                           │
//! │            BTreeMap<timestamp, TimestampRow>                │
//! └──────────┬──────────────────────────────────┬───────────────┘
//!            │                                  │
//!            ▼                                  ▼
//!   ┌─────────────────┐                ┌─────────────────┐
//!   │  TimestampRow   │                │   RangeView     │
//!   │ slots/tags/free │                │ (begin, end)    │
//!   └────────┬────────┘                │  cursors        │
//!            │                         └─────────────────┘
//!            ▼
//!   ┌─────────────────┐
//!   │   ValueCell     │
//!   └─────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use cellstore::{InMemoryStorage, Storage, ValueCell};
//!
//! let mut storage = InMemoryStorage::new();
//! storage
//!     .store(1001, vec![ValueCell::integer("count", 3), ValueCell::text("unit", "ms")])
//!     .unwrap();
//!
//! assert!(storage.contains_tag(1001, "count"));
//! assert_eq!(storage.get_tagged(1001, "count").and_then(|c| c.as_integer()), Some(3));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod cell;
pub mod storage;
pub mod cursor;
pub mod query;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{CellStoreError, Result};
pub use config::{Config, PreconditionPolicy};
pub use cell::{CellType, CellValue, ValueCell};
pub use storage::{CellHandle, InMemoryStorage, SharedStorage, Storage, StorageFactory};
pub use cursor::{CursorWrapper, RangeView, RowView};
pub use query::{Command, QueryHandler, Response};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of cellstore
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
