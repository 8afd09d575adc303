//! Query Module
//!
//! Orchestration layer over the storage engine.
//!
//! ## Responsibilities
//! - Existence guards for insert/update/erase
//! - Batches over caller-supplied timestamps and tags
//! - Precondition policy (propagate or abort on programmer errors)
//! - Text command surface used by `cellstore-cli`
//!
//! The handler is a pure consumer of the `Storage` contract; it adds no
//! storage semantics of its own.

mod command;
mod handler;
mod parser;
mod response;

pub use command::Command;
pub use handler::{QueryHandler, RowBatch};
pub use parser::{parse_cell, parse_command};
pub use response::Response;
