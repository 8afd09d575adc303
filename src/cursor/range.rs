//! Range cursors
//!
//! Ascending and descending cursors over the engine's row map.

use std::ops::Bound::{Excluded, Unbounded};

use crate::storage::Rows;

use super::{Cursor, CursorKind, Position, RowView};

// =============================================================================
// Map Navigation
// =============================================================================

/// First key `>= key`
pub(crate) fn lower_bound(rows: &Rows, key: i64) -> Option<i64> {
    rows.range(key..).next().map(|(k, _)| *k)
}

/// First key `> key`
pub(crate) fn upper_bound(rows: &Rows, key: i64) -> Option<i64> {
    rows.range((Excluded(key), Unbounded)).next().map(|(k, _)| *k)
}

/// Last key `<= key`
pub(crate) fn floor(rows: &Rows, key: i64) -> Option<i64> {
    rows.range(..=key).next_back().map(|(k, _)| *k)
}

/// Last key `< key`
pub(crate) fn predecessor(rows: &Rows, key: i64) -> Option<i64> {
    rows.range(..key).next_back().map(|(k, _)| *k)
}

fn first(rows: &Rows) -> Option<i64> {
    rows.keys().next().copied()
}

fn last(rows: &Rows) -> Option<i64> {
    rows.keys().next_back().copied()
}

fn row_at<'a>(rows: &'a Rows, key: Option<i64>) -> Option<RowView<'a>> {
    let timestamp = key?;
    let row = rows.get(&timestamp)?;
    Some(RowView {
        timestamp,
        cells: row.cells(),
    })
}

fn source_of(rows: &Rows) -> usize {
    rows as *const Rows as usize
}

// =============================================================================
// Ascending
// =============================================================================

/// Walks rows in increasing timestamp order; `None` is past the end
#[derive(Debug, Clone, Copy)]
pub struct AscendingCursor<'a> {
    rows: &'a Rows,
    key: Option<i64>,
}

impl<'a> AscendingCursor<'a> {
    pub(crate) fn new(rows: &'a Rows, key: Option<i64>) -> Self {
        Self { rows, key }
    }
}

impl<'a> Cursor<'a> for AscendingCursor<'a> {
    fn kind(&self) -> CursorKind {
        CursorKind::Ascending
    }

    fn position(&self) -> Position {
        Position {
            source: source_of(self.rows),
            key: self.key,
        }
    }

    /// Stays put once past the end
    fn step_forward(&mut self) {
        if let Some(key) = self.key {
            self.key = upper_bound(self.rows, key);
        }
    }

    /// From past the end, lands on the last row
    fn step_backward(&mut self) {
        self.key = match self.key {
            Some(key) => predecessor(self.rows, key),
            None => last(self.rows),
        };
    }

    fn current(&self) -> Option<RowView<'a>> {
        row_at(self.rows, self.key)
    }

    fn clone_box(&self) -> Box<dyn Cursor<'a> + 'a> {
        Box::new(*self)
    }
}

// =============================================================================
// Descending
// =============================================================================

/// Walks rows in decreasing timestamp order; `None` is before the first row
#[derive(Debug, Clone, Copy)]
pub struct DescendingCursor<'a> {
    rows: &'a Rows,
    key: Option<i64>,
}

impl<'a> DescendingCursor<'a> {
    pub(crate) fn new(rows: &'a Rows, key: Option<i64>) -> Self {
        Self { rows, key }
    }
}

impl<'a> Cursor<'a> for DescendingCursor<'a> {
    fn kind(&self) -> CursorKind {
        CursorKind::Descending
    }

    fn position(&self) -> Position {
        Position {
            source: source_of(self.rows),
            key: self.key,
        }
    }

    fn step_forward(&mut self) {
        if let Some(key) = self.key {
            self.key = predecessor(self.rows, key);
        }
    }

    fn step_backward(&mut self) {
        self.key = match self.key {
            Some(key) => upper_bound(self.rows, key),
            None => first(self.rows),
        };
    }

    fn current(&self) -> Option<RowView<'a>> {
        row_at(self.rows, self.key)
    }

    fn clone_box(&self) -> Box<dyn Cursor<'a> + 'a> {
        Box::new(*self)
    }
}
