//! Type-erased cursor
//!
//! Owns one boxed cursor (or none) and forwards to it.

use std::fmt;

use super::{Cursor, CursorKind, Position, RowView};

/// Owning, type-erased cursor
///
/// A wrapper without a cursor is invalid: it equals only another invalid
/// wrapper, and stepping it does nothing.
pub struct CursorWrapper<'a> {
    cursor: Option<Box<dyn Cursor<'a> + 'a>>,
}

impl<'a> CursorWrapper<'a> {
    pub fn new(cursor: impl Cursor<'a> + 'a) -> Self {
        Self {
            cursor: Some(Box::new(cursor)),
        }
    }

    /// Wrapper holding no cursor
    pub fn invalid() -> Self {
        Self { cursor: None }
    }

    pub fn is_valid(&self) -> bool {
        self.cursor.is_some()
    }

    pub fn step_forward(&mut self) -> &mut Self {
        if let Some(cursor) = self.cursor.as_mut() {
            cursor.step_forward();
        }
        self
    }

    pub fn step_backward(&mut self) -> &mut Self {
        if let Some(cursor) = self.cursor.as_mut() {
            cursor.step_backward();
        }
        self
    }

    /// Row under the cursor; `None` at a sentinel or when invalid
    pub fn current(&self) -> Option<RowView<'a>> {
        self.cursor.as_ref()?.current()
    }

    pub fn kind(&self) -> Option<CursorKind> {
        self.cursor.as_ref().map(|cursor| cursor.kind())
    }

    pub fn position(&self) -> Option<Position> {
        self.cursor.as_ref().map(|cursor| cursor.position())
    }
}

impl Default for CursorWrapper<'_> {
    fn default() -> Self {
        Self::invalid()
    }
}

impl Clone for CursorWrapper<'_> {
    fn clone(&self) -> Self {
        Self {
            cursor: self.cursor.as_ref().map(|cursor| cursor.clone_box()),
        }
    }
}

impl PartialEq for CursorWrapper<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (&self.cursor, &other.cursor) {
            (None, None) => true,
            (Some(lhs), Some(rhs)) => lhs.equals(rhs.as_ref()),
            _ => false,
        }
    }
}

impl fmt::Debug for CursorWrapper<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.cursor {
            Some(cursor) => f
                .debug_struct("CursorWrapper")
                .field("kind", &cursor.kind())
                .field("key", &cursor.position().key)
                .finish(),
            None => f.write_str("CursorWrapper(invalid)"),
        }
    }
}
