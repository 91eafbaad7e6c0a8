//! MCP server implementation.
//!
//! Serves the registered tools over stdio. Logs go to stderr so stdout only
//! carries JSON-RPC.

pub mod protocol;
pub mod stdio;

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::client::SummaryClient;
use crate::state::PreferenceStore;
use crate::tools::{self, McpTool, ToolContext};

/// MCP server for the research hub.
pub struct McpServer {
    /// Tool execution context.
    ctx: ToolContext,

    /// Registered tools.
    tools: Vec<Box<dyn McpTool>>,
}

impl McpServer {
    /// Create a new MCP server over the mock catalog.
    #[must_use]
    pub fn new(client: SummaryClient, preferences: PreferenceStore) -> Self {
        let ctx = ToolContext::new(Arc::new(client), Arc::new(Catalog::mock()), preferences);
        let tools = tools::register_all_tools();

        Self { ctx, tools }
    }

    /// Run the server in stdio mode.
    ///
    /// # Errors
    ///
    /// Returns error on I/O failure.
    pub async fn run_stdio(self) -> anyhow::Result<()> {
        tracing::info!("Starting MCP server in stdio mode");
        tracing::info!(tools = self.tools.len(), "Registered tools");

        stdio::run_stdio(self.tools, self.ctx).await
    }

    /// Get tool by name.
    #[must_use]
    pub fn get_tool(&self, name: &str) -> Option<&dyn McpTool> {
        self.tools.iter().find(|t| t.name() == name).map(|t| t.as_ref())
    }

    /// List all available tools.
    #[must_use]
    pub fn list_tools(&self) -> Vec<(&str, &str)> {
        self.tools.iter().map(|t| (t.name(), t.description())).collect()
    }

    /// Get tool context for execution.
    #[must_use]
    pub const fn context(&self) -> &ToolContext {
        &self.ctx
    }
}

impl std::fmt::Debug for McpServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("McpServer").field("tools", &self.tools.len()).finish()
    }
}
