//! Paper detail tools: paper_details, toggle_bookmark.

use serde_json::json;

use super::{McpTool, ToolContext, response_format_schema};
use crate::error::{ToolError, ToolResult};
use crate::formatters;
use crate::models::{PaperIdInput, PaperRefInput, ResponseFormat};
use crate::state::Route;

/// Paper detail view tool.
pub struct PaperDetailsTool;

#[async_trait::async_trait]
impl McpTool for PaperDetailsTool {
    fn name(&self) -> &'static str {
        "paper_details"
    }

    fn description(&self) -> &'static str {
        "Open the detailed analysis of one paper: abstract, methodology, results, \
         metrics, figures and bookmark state."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "paperId": {
                    "type": "string",
                    "default": "1",
                    "description": "Paper ID (e.g., 'disc_3', 'paper_1')"
                },
                "responseFormat": response_format_schema()
            }
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: PaperIdInput = serde_json::from_value(input)?;

        let paper = ctx
            .catalog
            .find(&params.paper_id)
            .ok_or_else(|| ToolError::not_found(format!("paper {}", params.paper_id)))?;
        let diagrams = ctx.catalog.diagrams_for(&paper.id);

        let bookmarked = {
            let mut workspace = ctx.workspace.lock().await;
            workspace.visit(&Route::paper(paper.id.clone()))?;
            workspace.preferences.is_bookmarked(&paper.id)
        };

        match params.response_format {
            ResponseFormat::Markdown => {
                Ok(formatters::format_paper_detail_markdown(paper, bookmarked, diagrams))
            }
            ResponseFormat::Json => {
                let mut body = formatters::compact_paper(paper);
                body["bookmarked"] = json!(bookmarked);
                body["diagrams"] = serde_json::to_value(diagrams)?;
                Ok(serde_json::to_string_pretty(&body)?)
            }
        }
    }
}

/// Bookmark toggle tool.
pub struct ToggleBookmarkTool;

#[async_trait::async_trait]
impl McpTool for ToggleBookmarkTool {
    fn name(&self) -> &'static str {
        "toggle_bookmark"
    }

    fn description(&self) -> &'static str {
        "Bookmark a paper, or remove the bookmark if it is already set. Bookmarks persist."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "paperId": {
                    "type": "string",
                    "description": "Paper ID"
                }
            },
            "required": ["paperId"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: PaperRefInput = serde_json::from_value(input)?;

        let paper = ctx
            .catalog
            .find(&params.paper_id)
            .ok_or_else(|| ToolError::not_found(format!("paper {}", params.paper_id)))?;

        let bookmarked = ctx.workspace.lock().await.preferences.toggle_bookmark(&paper.id)?;
        tracing::info!(paper_id = %paper.id, bookmarked, "Toggled bookmark");

        Ok(if bookmarked {
            format!("Bookmarked **{}**.", paper.title)
        } else {
            format!("Removed bookmark from **{}**.", paper.title)
        })
    }
}
