//! STDIO transport implementation.
//!
//! Standard input/output transport for MCP. The rmcp service owns the
//! initialize handshake and the framed read/write loop; this wrapper maps
//! its failure modes into [`TransportError`].

use rmcp::ServiceExt;
use tracing::info;

use super::{TransportError, TransportResult};
use crate::core::ProbeServer;

/// STDIO transport handler.
pub struct StdioTransport;

impl StdioTransport {
    /// Run the STDIO transport.
    ///
    /// Blocks until the peer closes the stream. A handshake failure or a
    /// transport-level fault surfaces as an error; individual malformed
    /// frames are answered with protocol errors by the service and do not
    /// end the session.
    pub async fn run(server: ProbeServer) -> TransportResult<()> {
        info!("ready - communicating via stdin/stdout");

        let service = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| TransportError::init(e.to_string()))?;

        service
            .waiting()
            .await
            .map_err(|e| TransportError::ServiceError(e.to_string()))?;

        info!("stdio transport finished");
        Ok(())
    }
}
