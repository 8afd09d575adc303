//! Storage factory
//!
//! Every call builds a fresh, independent, empty engine.

use crate::config::Config;

use super::{InMemoryStorage, SharedStorage, Storage};

/// Constructors for storage engines
pub struct StorageFactory;

impl StorageFactory {
    /// New in-memory engine with default configuration
    pub fn in_memory() -> InMemoryStorage {
        InMemoryStorage::new()
    }

    /// New in-memory engine
    pub fn in_memory_with_config(config: &Config) -> InMemoryStorage {
        InMemoryStorage::with_config(config)
    }

    /// New in-memory engine behind a trait object
    pub fn boxed(config: &Config) -> Box<dyn Storage + Send> {
        Box::new(InMemoryStorage::with_config(config))
    }

    /// New engine wrapped for cross-thread use
    pub fn shared(config: &Config) -> SharedStorage {
        SharedStorage::new(InMemoryStorage::with_config(config))
    }
}
