//! Compact table-style log viewer for the probe container.
//!
//! Streams a container's logs, drops protocol frames and other noise, and
//! renders one row per completed or failed tool call. The column-header
//! banner reprints every 20 rows so it stays visible while tailing.

use anyhow::{Context, Result};
use clap::Parser;

use mcp_stdio_probe::core::Config;
use mcp_stdio_probe::viewer::{LogStream, RequestTracker, discover_container, format};

#[derive(Parser)]
#[command(
    name = "probe-logview",
    about = "Correlates the probe's diagnostic stream into a per-call table",
    version
)]
struct Cli {
    /// Container name or id (auto-discovered from the probe image when omitted)
    container: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env();

    let container = match cli.container {
        Some(name) => name,
        None => discover_container(&config.viewer.image)
            .await?
            .with_context(|| {
                format!(
                    "no running container found for image '{}'; pass a container name",
                    config.viewer.image
                )
            })?,
    };

    println!("{}", format::header(&container));

    let mut stream = LogStream::tail(&container)?;
    let mut tracker = RequestTracker::new();
    let mut rendered = 0usize;

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                println!("{}", format::interrupt_line());
                return Ok(());
            }
            line = stream.next_line() => {
                let Some(line) = line else { break };
                if let Some(row) = tracker.process_line(&line) {
                    println!("{row}");
                    rendered += 1;
                    if rendered % 20 == 0 {
                        println!("{}", format::header(&container));
                    }
                }
            }
        }
    }

    Ok(())
}
