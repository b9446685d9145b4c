//! Echo tool definition.
//!
//! Returns the caller's message with a timestamp and length, the smallest
//! possible round-trip through the stdio pipeline.

use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::parse_params;
use crate::domains::tools::{ToolError, generator};

/// Parameters for the echo tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct EchoParams {
    /// Message to echo back.
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
struct EchoResponse {
    echoed_message: String,
    timestamp: String,
    message_length: usize,
}

/// Echo tool - reflects the provided message back to the caller.
pub struct EchoTool;

impl EchoTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "echo";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Echoes back the provided message. Useful for checking basic stdio round-trips.";

    /// Execute the tool logic, producing the canonical payload text.
    pub fn run(arguments: JsonObject) -> Result<String, ToolError> {
        let params: EchoParams = parse_params(arguments)?;

        let response = EchoResponse {
            message_length: params.message.chars().count(),
            echoed_message: params.message,
            timestamp: generator::utc_timestamp(),
        };

        serde_json::to_string_pretty(&response).map_err(|e| ToolError::internal(e.to_string()))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<EchoParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}
