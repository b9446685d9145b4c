//! Request dispatcher - executes exactly one tool call and always produces
//! a result.
//!
//! Per-call contract: log a "tool called" event with the argument snapshot,
//! execute through the registry, then log either "tool completed" (with
//! duration and response size, plus a second event carrying the full
//! outbound payload) or "tool failed". A failed call still yields a
//! successful protocol response whose text is `Error: <message>`, so any
//! anomaly observed on the pipe is guaranteed to originate from the pipe.

use std::sync::Arc;
use std::time::Instant;

use rmcp::model::{CallToolResult, Content, JsonObject};
use tracing::{error, info};

use crate::core::config::Config;

use super::registry::ToolRegistry;

/// Dispatcher executing tool calls against the static registry.
#[derive(Clone)]
pub struct ToolDispatcher {
    registry: ToolRegistry,
}

impl ToolDispatcher {
    /// Create a new dispatcher over the probe's tool catalog.
    pub fn new(config: Arc<Config>) -> Self {
        Self {
            registry: ToolRegistry::new(config),
        }
    }

    /// Get the underlying registry.
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Execute one tool call, returning exactly one result.
    pub async fn dispatch(&self, name: &str, arguments: JsonObject) -> CallToolResult {
        let start = Instant::now();

        let args_text = serde_json::to_string(&arguments).unwrap_or_else(|_| "{}".to_string());
        info!(tool_name = name, arguments = %args_text, "tool called");

        match self.registry.execute(name, arguments).await {
            Ok(payload) => {
                let duration_ms = elapsed_ms(start);
                let response_length = payload.len();
                info!(tool_name = name, duration_ms, response_length, "tool completed");

                // Intentional duplicate of the completion event, carrying the
                // full outbound payload text for deep protocol debugging. It
                // must not alter the response content.
                info!(
                    tool_name = name,
                    response_length,
                    response_payload = %payload,
                    duration_ms,
                    debug_outbound_message = true,
                    "outbound response payload"
                );

                CallToolResult::success(vec![Content::text(payload)])
            }
            Err(e) => {
                let duration_ms = elapsed_ms(start);
                error!(tool_name = name, error = %e, duration_ms, "tool failed");

                CallToolResult::success(vec![Content::text(format!("Error: {e}"))])
            }
        }
    }
}

/// Milliseconds since `start`, rounded to two decimal places.
fn elapsed_ms(start: Instant) -> f64 {
    (start.elapsed().as_secs_f64() * 1000.0 * 100.0).round() / 100.0
}
