//! Configuration for cellstore
//!
//! Centralized configuration with sensible defaults.

/// Main configuration for a cellstore engine and its query layer
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Slots reserved when a timestamp's row is first created
    pub row_capacity: usize,

    // -------------------------------------------------------------------------
    // Query Configuration
    // -------------------------------------------------------------------------
    /// What the query layer does when the engine reports a programmer error
    pub precondition_policy: PreconditionPolicy,
}

/// Reaction to precondition violations (negative timestamp, NaN decimal)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreconditionPolicy {
    /// Return the error to the caller
    #[default]
    Propagate,

    /// Log and panic (fail fast)
    Abort,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            row_capacity: 4,
            precondition_policy: PreconditionPolicy::Propagate,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the number of slots reserved for a new row
    pub fn row_capacity(mut self, slots: usize) -> Self {
        self.config.row_capacity = slots;
        self
    }

    /// Set the precondition policy used by the query layer
    pub fn precondition_policy(mut self, policy: PreconditionPolicy) -> Self {
        self.config.precondition_policy = policy;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
