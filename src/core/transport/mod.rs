//! Transport layer for the probe server.
//!
//! The probe speaks MCP over standard input/output only: one client, one
//! session, strict request/response framing. The transport handles the
//! connection lifecycle and delegates message processing to the server
//! handler.

mod error;
mod stdio;

pub use error::{TransportError, TransportResult};
pub use stdio::StdioTransport;
