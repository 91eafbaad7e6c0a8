//! Preference tools: navigation_preferences.

use serde_json::json;

use super::{McpTool, ToolContext, response_format_schema};
use crate::error::ToolResult;
use crate::formatters;
use crate::models::{NavigationPreferencesInput, ResponseFormat};

/// Navigation preferences tool.
pub struct NavigationPreferencesTool;

#[async_trait::async_trait]
impl McpTool for NavigationPreferencesTool {
    fn name(&self) -> &'static str {
        "navigation_preferences"
    }

    fn description(&self) -> &'static str {
        "Show recent routes, search history and sidebar state. Optionally clear the \
         search history, set the collapsed-sidebar preference or toggle the sidebar."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "clearSearchHistory": {
                    "type": "boolean",
                    "default": false
                },
                "sidebarCollapsed": {
                    "type": "boolean",
                    "description": "Persisted collapsed-sidebar preference"
                },
                "toggleSidebar": {
                    "type": "boolean",
                    "default": false,
                    "description": "Open or close the sidebar for this session"
                },
                "responseFormat": response_format_schema()
            }
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: NavigationPreferencesInput = serde_json::from_value(input)?;

        let mut workspace = ctx.workspace.lock().await;
        if params.clear_search_history {
            workspace.preferences.clear_search_history()?;
        }
        if let Some(collapsed) = params.sidebar_collapsed {
            workspace.preferences.set_sidebar_collapsed(collapsed)?;
        }
        if params.toggle_sidebar {
            workspace.sidebar.toggle();
        }

        let prefs = workspace.preferences.navigation();
        let sidebar_open = workspace.sidebar.is_open();

        match params.response_format {
            ResponseFormat::Markdown => {
                Ok(formatters::format_preferences_markdown(prefs, sidebar_open))
            }
            ResponseFormat::Json => {
                let mut body = serde_json::to_value(prefs)?;
                body["sidebarOpen"] = json!(sidebar_open);
                Ok(serde_json::to_string_pretty(&body)?)
            }
        }
    }
}
