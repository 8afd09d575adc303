//! Range views
//!
//! A (begin, end) cursor pair over a timestamp span. Rows are looked up one
//! at a time while iterating, never collected up front.

use crate::storage::Rows;

use super::range::{floor, lower_bound, predecessor, upper_bound};
use super::{AscendingCursor, CursorWrapper, DescendingCursor, RowView};

/// Lazy view over the rows of a timestamp span
///
/// `begin()` and `end()` follow half-open iterator conventions: `end()` is a
/// sentinel and must not be dereferenced. `RangeView::default()` is empty.
#[derive(Debug, Clone, Default)]
pub struct RangeView<'a> {
    begin: CursorWrapper<'a>,
    end: CursorWrapper<'a>,
}

impl<'a> RangeView<'a> {
    pub fn new(begin: CursorWrapper<'a>, end: CursorWrapper<'a>) -> Self {
        Self { begin, end }
    }

    /// View over rows with `start <= timestamp <= end`
    ///
    /// - ascending:  `[lower_bound(start), upper_bound(end))`
    /// - descending: from the row before `upper_bound(end)` down to the
    ///   row before `lower_bound(start)` (exclusive)
    ///
    /// An inverted span (`start > end`) gives an empty view.
    pub(crate) fn over(rows: &'a Rows, start: i64, end: i64, ascending: bool) -> Self {
        if ascending {
            let stop = upper_bound(rows, end);
            let first = if start > end { stop } else { lower_bound(rows, start) };
            Self::new(
                CursorWrapper::new(AscendingCursor::new(rows, first)),
                CursorWrapper::new(AscendingCursor::new(rows, stop)),
            )
        } else {
            let stop = predecessor(rows, start);
            let first = if start > end { stop } else { floor(rows, end) };
            Self::new(
                CursorWrapper::new(DescendingCursor::new(rows, first)),
                CursorWrapper::new(DescendingCursor::new(rows, stop)),
            )
        }
    }

    /// Cursor on the first row of the view
    pub fn begin(&self) -> CursorWrapper<'a> {
        self.begin.clone()
    }

    /// End sentinel
    pub fn end(&self) -> CursorWrapper<'a> {
        self.end.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.begin == self.end
    }

    pub fn iter(&self) -> RangeIter<'a> {
        RangeIter {
            front: self.begin.clone(),
            back: self.end.clone(),
        }
    }
}

impl<'a> IntoIterator for RangeView<'a> {
    type Item = RowView<'a>;
    type IntoIter = RangeIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        RangeIter {
            front: self.begin,
            back: self.end,
        }
    }
}

impl<'a> IntoIterator for &RangeView<'a> {
    type Item = RowView<'a>;
    type IntoIter = RangeIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a `RangeView`, from both ends
#[derive(Debug, Clone)]
pub struct RangeIter<'a> {
    front: CursorWrapper<'a>,
    back: CursorWrapper<'a>,
}

impl<'a> Iterator for RangeIter<'a> {
    type Item = RowView<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let row = self.front.current();
        self.front.step_forward();
        row
    }
}

impl<'a> DoubleEndedIterator for RangeIter<'a> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back.step_backward();
        self.back.current()
    }
}
