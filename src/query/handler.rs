//! Query handler
//!
//! Guarded CRUD operations and batches over a `Storage`.

use crate::cell::ValueCell;
use crate::config::{Config, PreconditionPolicy};
use crate::error::Result;
use crate::storage::{Storage, StorageFactory};

use super::{parse_command, Command, Response};

/// Rows of a batch insert/update
pub type RowBatch = Vec<(i64, Vec<ValueCell>)>;

/// Orchestrates storage operations
///
/// Adds existence guards on top of the engine and nothing else:
/// - insert skips timestamps that already exist (unless forced)
/// - update skips timestamps that do not exist
/// - erases skip rows/tags that do not exist
///
/// Programmer errors from the engine go through the configured
/// `PreconditionPolicy`.
pub struct QueryHandler {
    /// Owned engine
    storage: Box<dyn Storage + Send>,

    policy: PreconditionPolicy,
}

impl QueryHandler {
    /// Wrap an engine, propagating programmer errors
    pub fn new(storage: impl Storage + Send + 'static) -> Self {
        Self::with_policy(storage, PreconditionPolicy::Propagate)
    }

    pub fn with_policy(storage: impl Storage + Send + 'static, policy: PreconditionPolicy) -> Self {
        Self {
            storage: Box::new(storage),
            policy,
        }
    }

    /// Fresh in-memory engine built from `config`
    pub fn from_config(config: &Config) -> Self {
        Self {
            storage: StorageFactory::boxed(config),
            policy: config.precondition_policy,
        }
    }

    // =========================================================================
    // Insert / Update
    // =========================================================================

    /// Store `cells` at `timestamp`
    ///
    /// Returns false when the timestamp exists and `update_if_exist` is off.
    pub fn insert(&mut self, timestamp: i64, cells: Vec<ValueCell>, update_if_exist: bool) -> Result<bool> {
        if self.storage.contains(timestamp) && !update_if_exist {
            return Ok(false);
        }
        let result = self.storage.store(timestamp, cells);
        self.check(result)?;
        Ok(true)
    }

    /// Insert several rows; returns how many were stored
    ///
    /// Stops at the first error; rows before it stay stored.
    pub fn insert_rows(&mut self, rows: RowBatch, update_if_exist: bool) -> Result<usize> {
        let mut stored = 0;
        for (timestamp, cells) in rows {
            if self.insert(timestamp, cells, update_if_exist)? {
                stored += 1;
            }
        }
        Ok(stored)
    }

    /// Update an existing row; returns false when the timestamp is absent
    pub fn update(&mut self, timestamp: i64, cells: Vec<ValueCell>) -> Result<bool> {
        if !self.storage.contains(timestamp) {
            return Ok(false);
        }
        let result = self.storage.update(timestamp, cells);
        self.check(result)?;
        Ok(true)
    }

    /// Update several rows; returns how many existed and were updated
    pub fn update_rows(&mut self, rows: RowBatch) -> Result<usize> {
        let mut updated = 0;
        for (timestamp, cells) in rows {
            if self.update(timestamp, cells)? {
                updated += 1;
            }
        }
        Ok(updated)
    }

    // =========================================================================
    // Erase
    // =========================================================================

    pub fn erase(&mut self, timestamp: i64) -> bool {
        self.storage.contains(timestamp) && self.storage.erase(timestamp)
    }

    pub fn erase_tag(&mut self, timestamp: i64, tag: &str) -> bool {
        self.storage.contains_tag(timestamp, tag) && self.storage.erase_tag(timestamp, tag)
    }

    /// Erase several rows; returns how many existed
    pub fn erase_many(&mut self, timestamps: &[i64]) -> usize {
        timestamps
            .iter()
            .filter(|&&timestamp| self.erase(timestamp))
            .count()
    }

    /// Erase several tags of one row; returns how many were live
    pub fn erase_tags<S: AsRef<str>>(&mut self, timestamp: i64, tags: &[S]) -> usize {
        let mut erased = 0;
        for tag in tags {
            if self.erase_tag(timestamp, tag.as_ref()) {
                erased += 1;
            }
        }
        erased
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Execute a command
    pub fn execute(&mut self, command: Command) -> Result<Response> {
        tracing::trace!(command = command.name(), "executing");

        let response = match command {
            Command::Insert {
                timestamp,
                cells,
                update_if_exist,
            } => Response::applied(self.insert(timestamp, cells, update_if_exist)?),
            Command::Update { timestamp, cells } => {
                Response::applied(self.update(timestamp, cells)?)
            }
            Command::Erase { timestamp } => Response::applied(self.erase(timestamp)),
            Command::EraseTags { timestamp, tags } => {
                Response::Applied(self.erase_tags(timestamp, &tags))
            }
            Command::Get {
                timestamp,
                tag: Some(tag),
            } => Response::Cells(
                self.storage
                    .get_tagged(timestamp, &tag)
                    .into_iter()
                    .cloned()
                    .collect(),
            ),
            Command::Get {
                timestamp,
                tag: None,
            } => Response::Cells(owned(self.storage.get_live_data(timestamp))),
            Command::Raw { timestamp } => Response::Cells(owned(self.storage.get_data(timestamp))),
            Command::Range {
                start,
                end,
                ascending,
            } => Response::Rows(
                self.storage
                    .range_view(start, end, ascending)
                    .into_iter()
                    .map(|row| (row.timestamp, owned(row.cells)))
                    .collect(),
            ),
            Command::Tags { timestamp } => Response::Tags(
                self.storage
                    .tags(timestamp)
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            ),
            Command::Len { timestamp: None } => Response::Length(self.storage.len()),
            Command::Len {
                timestamp: Some(timestamp),
            } => Response::Length(self.storage.len_at(timestamp)),
        };

        Ok(response)
    }

    /// Parse and execute one line; `None` for blank lines and comments
    pub fn execute_line(&mut self, line: &str) -> Result<Option<Response>> {
        let parsed = parse_command(line);
        match self.check(parsed)? {
            Some(command) => self.execute(command).map(Some),
            None => Ok(None),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Read access to the engine
    pub fn storage(&self) -> &dyn Storage {
        self.storage.as_ref()
    }

    pub fn into_storage(self) -> Box<dyn Storage + Send> {
        self.storage
    }

    pub fn policy(&self) -> PreconditionPolicy {
        self.policy
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Apply the precondition policy to an engine result
    fn check<T>(&self, result: Result<T>) -> Result<T> {
        match result {
            Err(error) if error.is_programmer_error() && self.policy == PreconditionPolicy::Abort => {
                tracing::error!(%error, "precondition violated, aborting");
                panic!("precondition violated: {}", error);
            }
            other => other,
        }
    }
}

fn owned(cells: Vec<&ValueCell>) -> Vec<ValueCell> {
    cells.into_iter().cloned().collect()
}
