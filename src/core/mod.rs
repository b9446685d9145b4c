//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the probe
//! server, including error handling, configuration, logging setup, the MCP
//! server handler, and the stdio transport.

pub mod config;
pub mod error;
pub mod logging;
pub mod server;
pub mod transport;

pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use server::ProbeServer;
pub use transport::{StdioTransport, TransportError, TransportResult};
