//! Tools domain module.
//!
//! This module handles all tool-related functionality for the probe server.
//! The catalog is fixed at startup: three synthetic tools whose only
//! contract is schema shape and timing.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `generator.rs` - Randomized technical-data records
//! - `registry.rs` - Static catalog and execute-by-name dispatch
//! - `dispatcher.rs` - Per-call contract: timing, lifecycle log events,
//!   and the error-as-payload policy
//! - `error.rs` - Tool-specific error types

pub mod definitions;
mod dispatcher;
mod error;
pub mod generator;
mod registry;

pub use definitions::{EchoTool, RandomDataTool, ServerStatusTool};
pub use dispatcher::ToolDispatcher;
pub use error::ToolError;
pub use registry::ToolRegistry;
