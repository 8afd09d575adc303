//! Command definitions
//!
//! Requests understood by `QueryHandler::execute`.

use crate::cell::ValueCell;

/// A parsed command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Store a row; skipped when the timestamp exists unless `update_if_exist`
    Insert {
        timestamp: i64,
        cells: Vec<ValueCell>,
        update_if_exist: bool,
    },

    /// Update an existing row; skipped when the timestamp is absent
    Update { timestamp: i64, cells: Vec<ValueCell> },

    /// Erase a whole row
    Erase { timestamp: i64 },

    /// Erase some tags of a row
    EraseTags { timestamp: i64, tags: Vec<String> },

    /// Live cells of a row, or the single cell of `tag`
    Get { timestamp: i64, tag: Option<String> },

    /// Every resident slot of a row, orphans included
    Raw { timestamp: i64 },

    /// Rows with `start <= timestamp <= end`
    Range { start: i64, end: i64, ascending: bool },

    /// Live tag names of a row
    Tags { timestamp: i64 },

    /// Stored timestamp count, or live cell count of one timestamp
    Len { timestamp: Option<i64> },
}

impl Command {
    /// Keyword of the command, as written on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Command::Insert {
                update_if_exist: false,
                ..
            } => "insert",
            Command::Insert { .. } => "upsert",
            Command::Update { .. } => "update",
            Command::Erase { .. } | Command::EraseTags { .. } => "erase",
            Command::Get { .. } => "get",
            Command::Raw { .. } => "raw",
            Command::Range { .. } => "range",
            Command::Tags { .. } => "tags",
            Command::Len { .. } => "len",
        }
    }

    /// True for commands that may change the engine
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Command::Insert { .. }
                | Command::Update { .. }
                | Command::Erase { .. }
                | Command::EraseTags { .. }
        )
    }
}
