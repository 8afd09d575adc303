//! Cursor Tests
//!
//! Tests verify:
//! - Stepping ascending and descending cursors to the end sentinel and back
//! - Dereferencing rows lazily (and `None` at sentinels)
//! - Equality across kinds, positions, engines and invalid wrappers

use cellstore::cursor::CursorKind;
use cellstore::{CursorWrapper, InMemoryStorage, Storage, ValueCell};

// =============================================================================
// Helper Functions
// =============================================================================

fn storage_with_rows(timestamps: impl IntoIterator<Item = i64>) -> InMemoryStorage {
    let mut storage = InMemoryStorage::new();
    for ts in timestamps {
        storage
            .store(ts, vec![ValueCell::integer("seq", ts), ValueCell::text("unit", "ms")])
            .unwrap();
    }
    storage
}

fn timestamp_at(cursor: &CursorWrapper<'_>) -> Option<i64> {
    cursor.current().map(|row| row.timestamp)
}

// =============================================================================
// Ascending Tests
// =============================================================================

#[test]
fn test_ascending_steps_to_end_and_back() {
    let storage = storage_with_rows(1001..=1005);
    let view = storage.range_view(1001, 1005, true);

    let mut cursor = view.begin();
    assert_eq!(timestamp_at(&cursor), Some(1001));

    for _ in 0..5 {
        cursor.step_forward();
    }
    assert_eq!(cursor, view.end());
    assert_eq!(timestamp_at(&cursor), None);

    cursor.step_backward();
    assert_eq!(timestamp_at(&cursor), Some(1005));
}

#[test]
fn test_ascending_current_has_row_cells() {
    let storage = storage_with_rows([7]);
    let view = storage.range_view(0, 10, true);

    let row = view.begin().current().unwrap();
    assert_eq!(row.timestamp, 7);
    assert_eq!(row.cells.len(), 2);
    assert_eq!(row.cells[0].as_integer(), Some(7));
    assert_eq!(row.cells[1].as_text(), Some("ms"));
}

#[test]
fn test_ascending_end_inside_larger_map() {
    let storage = storage_with_rows(1001..=1005);
    let view = storage.range_view(1002, 1003, true);

    let mut cursor = view.begin();
    cursor.step_forward().step_forward();

    // end sentinel of a partial range sits on the next row
    assert_eq!(cursor, view.end());
    assert_eq!(timestamp_at(&view.end()), Some(1004));
}

#[test]
fn test_step_chaining() {
    let storage = storage_with_rows(1..=4);
    let view = storage.range_view(1, 4, true);

    let mut cursor = view.begin();
    cursor.step_forward().step_forward().step_backward();
    assert_eq!(timestamp_at(&cursor), Some(2));
}

// =============================================================================
// Descending Tests
// =============================================================================

#[test]
fn test_descending_steps_to_end_and_back() {
    let storage = storage_with_rows(1001..=1005);
    let view = storage.range_view(1001, 1005, false);

    let mut cursor = view.begin();
    assert_eq!(timestamp_at(&cursor), Some(1005));

    for _ in 0..5 {
        cursor.step_forward();
    }
    assert_eq!(cursor, view.end());
    assert_eq!(timestamp_at(&cursor), None);

    cursor.step_backward();
    assert_eq!(timestamp_at(&cursor), Some(1001));
}

#[test]
fn test_descending_visits_in_reverse() {
    let storage = storage_with_rows([10, 20, 30]);
    let view = storage.range_view(0, 100, false);

    let mut cursor = view.begin();
    let mut seen = Vec::new();
    while cursor != view.end() {
        seen.push(timestamp_at(&cursor).unwrap());
        cursor.step_forward();
    }
    assert_eq!(seen, vec![30, 20, 10]);
}

// =============================================================================
// Equality Tests
// =============================================================================

#[test]
fn test_clones_compare_equal() {
    let storage = storage_with_rows(1..=3);
    let view = storage.range_view(1, 3, true);

    let cursor = view.begin();
    let copy = cursor.clone();
    assert_eq!(cursor, copy);
    assert_eq!(cursor.kind(), Some(CursorKind::Ascending));
}

#[test]
fn test_moving_copy_leaves_original() {
    let storage = storage_with_rows(1..=3);
    let view = storage.range_view(1, 3, true);

    let original = view.begin();
    let mut moved = original.clone();
    moved.step_forward();

    assert_ne!(original, moved);
    assert_eq!(timestamp_at(&original), Some(1));
    assert_eq!(timestamp_at(&moved), Some(2));
}

#[test]
fn test_ascending_never_equals_descending() {
    let storage = storage_with_rows([5]);
    let asc = storage.range_view(5, 5, true).begin();
    let desc = storage.range_view(5, 5, false).begin();

    // same key, different kind
    assert_eq!(asc.position().map(|p| p.key), desc.position().map(|p| p.key));
    assert_ne!(asc, desc);
    assert_eq!(desc.kind(), Some(CursorKind::Descending));
}

#[test]
fn test_cursors_over_different_engines_differ() {
    let first = storage_with_rows([5]);
    let second = storage_with_rows([5]);

    let a = first.range_view(0, 10, true).begin();
    let b = second.range_view(0, 10, true).begin();
    assert_ne!(a, b);
}

#[test]
fn test_invalid_wrappers() {
    let storage = storage_with_rows([5]);
    let valid = storage.range_view(0, 10, true).begin();

    let mut invalid = CursorWrapper::invalid();
    assert!(!invalid.is_valid());
    assert!(valid.is_valid());

    assert_eq!(invalid, CursorWrapper::default());
    assert_ne!(invalid, valid);
    assert_ne!(valid, invalid);

    invalid.step_forward().step_backward();
    assert!(invalid.current().is_none());
    assert!(invalid.kind().is_none());
    assert!(invalid.position().is_none());
}

#[test]
fn test_empty_engine_sentinels() {
    let storage = InMemoryStorage::new();
    let view = storage.range_view(0, 100, true);

    assert_eq!(view.begin(), view.end());
    assert!(view.begin().current().is_none());
}
