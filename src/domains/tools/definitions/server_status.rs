//! Server status tool definition.
//!
//! Reports the probe's identity and liveness. Name and version come from
//! the configuration and are stable for the process lifetime.

use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::parse_params;
use crate::core::config::Config;
use crate::domains::tools::{ToolError, generator};

/// Parameters for the server status tool (none).
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ServerStatusParams {}

#[derive(Debug, Clone, Serialize)]
struct ServerStatusResponse {
    server_name: String,
    version: String,
    status: String,
    timestamp: String,
    uptime_info: String,
}

/// Server status tool - returns identity and liveness information.
pub struct ServerStatusTool;

impl ServerStatusTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "server-status";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Returns the current server status and version information.";

    /// Execute the tool logic, producing the canonical payload text.
    pub fn run(arguments: JsonObject, config: &Config) -> Result<String, ToolError> {
        let _params: ServerStatusParams = parse_params(arguments)?;

        let response = ServerStatusResponse {
            server_name: config.server.name.clone(),
            version: config.server.version.clone(),
            status: "running".to_string(),
            timestamp: generator::utc_timestamp(),
            uptime_info: "Server is operational".to_string(),
        };

        serde_json::to_string_pretty(&response).map_err(|e| ToolError::internal(e.to_string()))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ServerStatusParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_payload_shape() {
        let config = Config::default();
        let payload = ServerStatusTool::run(JsonObject::new(), &config).unwrap();
        let value: serde_json::Value = serde_json::from_str(&payload).unwrap();
        assert_eq!(value["server_name"], "mcp-stdio-probe");
        assert_eq!(value["version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(value["status"], "running");
        assert_eq!(value["uptime_info"], "Server is operational");
        assert!(value["timestamp"].is_string());
    }

    #[test]
    fn test_status_identity_is_idempotent() {
        let config = Config::default();
        let first: serde_json::Value =
            serde_json::from_str(&ServerStatusTool::run(JsonObject::new(), &config).unwrap())
                .unwrap();
        let second: serde_json::Value =
            serde_json::from_str(&ServerStatusTool::run(JsonObject::new(), &config).unwrap())
                .unwrap();
        assert_eq!(first["server_name"], second["server_name"]);
        assert_eq!(first["version"], second["version"]);
    }

    #[test]
    fn test_status_ignores_stray_arguments() {
        let config = Config::default();
        let mut args = JsonObject::new();
        args.insert("extra".to_string(), serde_json::json!(true));
        assert!(ServerStatusTool::run(args, &config).is_ok());
    }
}
