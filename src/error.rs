//! Error types for cellstore
//!
//! Provides a unified error type for all operations.
//!
//! Lookups that miss (unknown timestamp, unknown tag, wrong value type) are
//! not errors: they surface as `None`, an empty `Vec` or `false`.

use thiserror::Error;

/// Result type alias using CellStoreError
pub type Result<T> = std::result::Result<T, CellStoreError>;

/// Unified error type for cellstore operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CellStoreError {
    // -------------------------------------------------------------------------
    // Programmer Errors (precondition violations)
    // -------------------------------------------------------------------------
    #[error("Negative timestamp: {0}")]
    NegativeTimestamp(i64),

    #[error("NaN decimal value for tag '{tag}'")]
    NanDecimal { tag: String },

    // -------------------------------------------------------------------------
    // Handle Errors
    // -------------------------------------------------------------------------
    #[error("Stale handle for timestamp {timestamp} (generation {generation})")]
    StaleHandle { timestamp: i64, generation: u64 },

    // -------------------------------------------------------------------------
    // Command Errors
    // -------------------------------------------------------------------------
    #[error("Invalid command: {0}")]
    InvalidCommand(String),
}

impl CellStoreError {
    /// True for precondition violations made by the caller
    /// (negative timestamp, NaN decimal)
    pub fn is_programmer_error(&self) -> bool {
        matches!(
            self,
            CellStoreError::NegativeTimestamp(_) | CellStoreError::NanDecimal { .. }
        )
    }
}
