//! Cell Module
//!
//! Tagged scalar values stored by the engine.
//!
//! ## Responsibilities
//! - Hold at most one scalar payload (integer, decimal or text) per cell
//! - Keep the cell type derived from the payload (they can never disagree)
//! - Reject NaN decimals at every construction/assignment boundary
//! - Value equality over (tag, timestamp, type, payload)

mod value_cell;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use value_cell::ValueCell;

/// Scalar kinds a cell can hold
///
/// Discriminants are the stable numeric type codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum CellType {
    Integer = 1,
    Decimal = 2,
    Text = 3,
}

impl CellType {
    /// Numeric type code (Integer = 1, Decimal = 2, Text = 3)
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// Payload of a cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    Integer(i64),

    /// Never NaN once stored in a `ValueCell`
    Decimal(f64),

    Text(String),
}

impl CellValue {
    /// Type of this payload
    pub fn cell_type(&self) -> CellType {
        match self {
            CellValue::Integer(_) => CellType::Integer,
            CellValue::Decimal(_) => CellType::Decimal,
            CellValue::Text(_) => CellType::Text,
        }
    }

    pub(crate) fn is_nan(&self) -> bool {
        matches!(self, CellValue::Decimal(v) if v.is_nan())
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Integer(v) => write!(f, "{}", v),
            // "2.0", not "2"
            CellValue::Decimal(v) => write!(f, "{:?}", v),
            CellValue::Text(v) => write!(f, "{:?}", v),
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Integer(value)
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        CellValue::Integer(i64::from(value))
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Decimal(value)
    }
}

impl From<f32> for CellValue {
    fn from(value: f32) -> Self {
        CellValue::Decimal(f64::from(value))
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}
