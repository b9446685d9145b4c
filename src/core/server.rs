//! MCP server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol. The probe advertises the tools, resources, and prompts
//! capabilities, but only tools have any inventory: resource and prompt
//! listings are empty and reads fail with not-found errors. Tool calls are
//! routed through the request dispatcher, which converts every tool-level
//! fault into a successful response with error-shaped content so that the
//! protocol stream stays clean for pipeline testing.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler,
    model::*,
    service::RequestContext,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use crate::domains::tools::{ToolDispatcher, ToolRegistry};

/// The main probe server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp and routes
/// tool calls through the dispatcher.
#[derive(Clone)]
pub struct ProbeServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Dispatcher executing tool calls against the static registry.
    dispatcher: ToolDispatcher,
}

impl ProbeServer {
    /// Create a new probe server with the given configuration.
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);

        Self {
            dispatcher: ToolDispatcher::new(config.clone()),
            config,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the dispatcher (for direct use in tests).
    pub fn dispatcher(&self) -> &ToolDispatcher {
        &self.dispatcher
    }
}

impl ServerHandler for ProbeServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Default::default()
            },
            instructions: Some(
                "Conformance probe for stdio transport pipelines. Exposes synthetic \
                 tools that return structured random data; all diagnostics go to stderr."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .enable_prompts()
                .build(),
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        info!("listing tools");
        Ok(ListToolsResult {
            tools: ToolRegistry::get_all_tools(),
            next_cursor: None,
            meta: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let arguments = request.arguments.unwrap_or_default();
        // Tool-level faults (unknown name, bad arguments, handler failure)
        // come back as successful results with "Error: ..." content.
        Ok(self.dispatcher.dispatch(request.name.as_ref(), arguments).await)
    }

    #[instrument(skip(self, _context))]
    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        info!("listing resources");
        Ok(ListResourcesResult {
            resources: Vec::new(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourceTemplatesResult, McpError> {
        info!("listing resource templates");
        Ok(ListResourceTemplatesResult {
            resource_templates: Vec::new(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        info!("reading resource: {}", request.uri);
        Err(McpError::resource_not_found(
            format!("Resource not found: {}", request.uri),
            None,
        ))
    }

    #[instrument(skip(self, _context))]
    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        info!("listing prompts");
        Ok(ListPromptsResult {
            prompts: Vec::new(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        info!("getting prompt: {}", request.name);
        Err(McpError::invalid_params(
            format!("Unknown prompt: {}", request.name),
            None,
        ))
    }
}
