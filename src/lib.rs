//! MCP stdio conformance probe.
//!
//! A minimal Model Context Protocol server whose only purpose is to validate
//! that a transport pipeline (for example a container runtime piping stdio)
//! carries framed messages without corruption, reordering, or buffering
//! stalls. The server exposes three synthetic tools and writes one JSON log
//! object per lifecycle event to stderr, leaving stdout exclusively to
//! protocol frames.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, logging, the MCP server
//!   handler, and the stdio transport
//! - **domains::tools**: the static tool catalog, the request dispatcher,
//!   and one definition file per tool
//! - **viewer**: the log-correlation layer used by the `probe-logview`
//!   binary to reconstruct request/response pairs from the diagnostic stream

pub mod core;
pub mod domains;
pub mod viewer;

// Re-export commonly used types for convenience
pub use crate::core::{Config, Error, ProbeServer, Result};
