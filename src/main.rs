//! Probe server entry point.
//!
//! Initializes JSON logging on stderr, loads configuration, and serves the
//! MCP handler over stdio until the stream closes or the process is
//! interrupted. Transport faults propagate to a non-zero exit code;
//! interrupts exit cleanly.

use anyhow::Result;
use tracing::{error, info};

use mcp_stdio_probe::core::{Config, ProbeServer, StdioTransport, init_logging};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();

    init_logging(&config.logging.level);

    info!(version = config.server.version.as_str(), "server starting");

    let server = ProbeServer::new(config);

    let result = tokio::select! {
        res = StdioTransport::run(server) => res,
        _ = tokio::signal::ctrl_c() => {
            info!("interrupt received, shutting down");
            Ok(())
        }
    };

    if let Err(e) = &result {
        error!(error = %e, "server crashed");
    }

    info!("server stopped");

    result.map_err(Into::into)
}
