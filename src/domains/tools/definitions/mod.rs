//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod echo;
pub mod random_data;
pub mod server_status;

pub use echo::{EchoParams, EchoTool};
pub use random_data::{RandomDataParams, RandomDataTool};
pub use server_status::{ServerStatusParams, ServerStatusTool};

use rmcp::model::JsonObject;
use serde::de::DeserializeOwned;

use super::ToolError;

/// Deserialize a tool's parameter struct from the raw argument object.
///
/// Serde defaults fill missing optional fields; a mismatch is a tool-level
/// fault, not a protocol fault.
pub(crate) fn parse_params<T: DeserializeOwned>(arguments: JsonObject) -> Result<T, ToolError> {
    serde_json::from_value(serde_json::Value::Object(arguments))
        .map_err(|e| ToolError::invalid_arguments(e.to_string()))
}
