//! ValueCell implementation
//!
//! A tag, an owning timestamp and an optional scalar payload.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CellStoreError, Result};

use super::{CellType, CellValue};

/// A tagged scalar value owned by a timestamp
///
/// The timestamp is stamped by the engine when the cell is stored; a freshly
/// built cell carries timestamp 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawValueCell")]
pub struct ValueCell {
    tag: String,
    timestamp: i64,
    value: Option<CellValue>,
}

// NaN is rejected on every path that can set a payload, so equality is total.
impl Eq for ValueCell {}

impl ValueCell {
    /// Create a cell, rejecting NaN decimals
    pub fn new(tag: impl Into<String>, value: impl Into<CellValue>) -> Result<Self> {
        let mut cell = Self::empty(tag);
        cell.set_value(value)?;
        Ok(cell)
    }

    /// Create a cell holding an integer
    pub fn integer(tag: impl Into<String>, value: i64) -> Self {
        Self {
            tag: tag.into(),
            timestamp: 0,
            value: Some(CellValue::Integer(value)),
        }
    }

    /// Create a cell holding a decimal (fails on NaN)
    pub fn decimal(tag: impl Into<String>, value: f64) -> Result<Self> {
        Self::new(tag, value)
    }

    /// Create a cell holding text
    pub fn text(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            timestamp: 0,
            value: Some(CellValue::Text(value.into())),
        }
    }

    /// Create a cell with a tag and no payload
    pub fn empty(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            timestamp: 0,
            value: None,
        }
    }

    /// Return this cell stamped with `timestamp`
    pub fn with_timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = timestamp;
        self
    }

    // =========================================================================
    // Payload
    // =========================================================================

    /// Replace payload and type, keeping tag and timestamp
    ///
    /// On a NaN decimal the cell is left unchanged.
    pub fn set_value(&mut self, value: impl Into<CellValue>) -> Result<()> {
        let value = value.into();
        if value.is_nan() {
            tracing::warn!(tag = %self.tag, "rejected NaN decimal");
            return Err(CellStoreError::NanDecimal {
                tag: self.tag.clone(),
            });
        }
        self.value = Some(value);
        Ok(())
    }

    /// Integer payload, if this is an integer cell
    pub fn as_integer(&self) -> Option<i64> {
        match self.value {
            Some(CellValue::Integer(v)) => Some(v),
            _ => None,
        }
    }

    /// Decimal payload, if this is a decimal cell
    pub fn as_decimal(&self) -> Option<f64> {
        match self.value {
            Some(CellValue::Decimal(v)) => Some(v),
            _ => None,
        }
    }

    /// Text payload, if this is a text cell
    pub fn as_text(&self) -> Option<&str> {
        match &self.value {
            Some(CellValue::Text(v)) => Some(v),
            _ => None,
        }
    }

    /// Raw payload
    pub fn value(&self) -> Option<&CellValue> {
        self.value.as_ref()
    }

    /// Type of the payload; `None` once the cell has been reset
    pub fn cell_type(&self) -> Option<CellType> {
        self.value.as_ref().map(CellValue::cell_type)
    }

    /// Clear payload and type, and the tag too when `clear_tag` is set
    pub fn reset(&mut self, clear_tag: bool) {
        if clear_tag {
            self.tag.clear();
        }
        self.value = None;
    }

    // =========================================================================
    // Tag / Timestamp
    // =========================================================================

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn set_tag(&mut self, tag: impl Into<String>) {
        self.tag = tag.into();
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    pub(crate) fn set_timestamp(&mut self, timestamp: i64) {
        self.timestamp = timestamp;
    }
}

impl fmt::Display for ValueCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}={}", self.tag, value),
            None => write!(f, "{}=<empty>", self.tag),
        }
    }
}

// =============================================================================
// Validated Deserialization
// =============================================================================

/// Wire shape of a cell before the NaN check
#[derive(Deserialize)]
struct RawValueCell {
    tag: String,
    timestamp: i64,
    value: Option<CellValue>,
}

impl TryFrom<RawValueCell> for ValueCell {
    type Error = CellStoreError;

    fn try_from(raw: RawValueCell) -> Result<Self> {
        let mut cell = ValueCell::empty(raw.tag).with_timestamp(raw.timestamp);
        if let Some(value) = raw.value {
            cell.set_value(value)?;
        }
        Ok(cell)
    }
}
