//! Cursor Module
//!
//! Bidirectional, lazily dereferenced positions over the timestamp-ordered
//! rows of an engine, and (begin, end) views built from them.
//!
//! ## Positions
//! A position is a timestamp key or `None`. For an ascending cursor `None`
//! is past the last row; for a descending cursor it is before the first
//! row (like a reverse iterator).
//!
//! ```text
//!  rows:        1001   1002   1003   1004
//!  ascending:   begin ──────────────────▶ end (None)
//!  descending:  end (None) ◀────────────── begin
//! ```
//!
//! Nothing is cached: `current()` looks the row up again on every call.

mod range;
mod view;
mod wrapper;

pub use range::{AscendingCursor, DescendingCursor};
pub use view::{RangeIter, RangeView};
pub use wrapper::CursorWrapper;

use crate::cell::ValueCell;

/// One row as seen through a cursor
#[derive(Debug, Clone, PartialEq)]
pub struct RowView<'a> {
    pub timestamp: i64,

    /// Every resident cell of the row, in slot order
    pub cells: Vec<&'a ValueCell>,
}

/// Concrete cursor kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorKind {
    Ascending,
    Descending,
}

/// Underlying position of a cursor
///
/// `source` identifies the row map the cursor walks (address only, never
/// dereferenced).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub(crate) source: usize,
    pub key: Option<i64>,
}

/// Capabilities shared by all cursors
pub trait Cursor<'a> {
    fn kind(&self) -> CursorKind;

    fn position(&self) -> Position;

    /// Move one row in the cursor's direction
    fn step_forward(&mut self);

    /// Move one row against the cursor's direction
    fn step_backward(&mut self);

    /// Row at the current position; `None` at a sentinel
    fn current(&self) -> Option<RowView<'a>>;

    fn clone_box(&self) -> Box<dyn Cursor<'a> + 'a>;

    /// Same position over the same rows, and same concrete kind
    fn equals(&self, other: &dyn Cursor<'a>) -> bool {
        self.kind() == other.kind() && self.position() == other.position()
    }
}
