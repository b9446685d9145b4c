//! Tool registry - static catalog and execute-by-name dispatch.
//!
//! The catalog is fixed at startup: no dynamic registration exists, so the
//! registry is a read-only table shared by reference across calls.

use std::sync::Arc;

use rmcp::model::{JsonObject, Tool};

use crate::core::config::Config;

use super::ToolError;
use super::definitions::{EchoTool, RandomDataTool, ServerStatusTool};

/// Tool registry - manages the probe's three synthetic tools.
#[derive(Clone)]
pub struct ToolRegistry {
    config: Arc<Config>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![RandomDataTool::NAME, EchoTool::NAME, ServerStatusTool::NAME]
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for the advertised catalog; the
    /// `list_tools` handler returns exactly this.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            RandomDataTool::to_tool(),
            EchoTool::to_tool(),
            ServerStatusTool::to_tool(),
        ]
    }

    /// Execute a tool by name, returning its canonical payload text.
    pub async fn execute(&self, name: &str, arguments: JsonObject) -> Result<String, ToolError> {
        match name {
            RandomDataTool::NAME => RandomDataTool::run(arguments).await,
            EchoTool::NAME => EchoTool::run(arguments),
            ServerStatusTool::NAME => ServerStatusTool::run(arguments, &self.config),
            _ => Err(ToolError::unknown_tool(name)),
        }
    }
}
