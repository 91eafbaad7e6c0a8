//! Summary tools: generate_summary, close_summary.

use serde_json::json;

use super::{McpTool, ToolContext, response_format_schema};
use crate::error::{ToolError, ToolResult};
use crate::formatters;
use crate::models::{FormatOnlyInput, GenerateSummaryInput, ResponseFormat};

/// AI summary generation tool.
pub struct GenerateSummaryTool;

#[async_trait::async_trait]
impl McpTool for GenerateSummaryTool {
    fn name(&self) -> &'static str {
        "generate_summary"
    }

    fn description(&self) -> &'static str {
        "Generate an AI summary of a paper with key points and its most important diagrams. \
         If generation fails, a fallback summary is shown instead."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "paperId": {
                    "type": "string",
                    "default": "1",
                    "description": "Paper ID"
                },
                "selectedImage": {
                    "type": "integer",
                    "minimum": 0,
                    "description": "Diagram to select once the summary is shown"
                },
                "responseFormat": response_format_schema()
            }
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: GenerateSummaryInput = serde_json::from_value(input)?;

        let paper = ctx
            .catalog
            .find(&params.paper_id)
            .ok_or_else(|| ToolError::not_found(format!("paper {}", params.paper_id)))?;
        let diagrams = ctx.catalog.diagrams_for(&paper.id);

        let ticket = ctx.workspace.lock().await.summary_panel.begin();

        // The lock is not held across the request.
        let result = ctx.client.summarize_or_fallback(paper, diagrams).await;

        let mut workspace = ctx.workspace.lock().await;
        let panel = &mut workspace.summary_panel;
        let applied = panel.complete(ticket, result.clone());
        let selected = if applied {
            params.selected_image.map_or(panel.selected_image(), |i| panel.select_image(i))
        } else {
            0
        };
        tracing::info!(paper_id = %paper.id, applied, "Summary ready");

        match params.response_format {
            ResponseFormat::Markdown => Ok(formatters::format_summary_markdown(paper, &result)),
            ResponseFormat::Json => Ok(serde_json::to_string_pretty(&json!({
                "paperId": paper.id,
                "summary": result.summary,
                "keyPoints": result.key_points,
                "diagrams": result.diagrams,
                "selectedImage": selected,
                "shownInPanel": applied,
            }))?),
        }
    }
}

/// Summary panel dismissal tool.
pub struct CloseSummaryTool;

#[async_trait::async_trait]
impl McpTool for CloseSummaryTool {
    fn name(&self) -> &'static str {
        "close_summary"
    }

    fn description(&self) -> &'static str {
        "Dismiss the summary panel. A summary still being generated will not reopen it."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "responseFormat": response_format_schema()
            }
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: FormatOnlyInput = serde_json::from_value(input)?;

        let mut workspace = ctx.workspace.lock().await;
        let was_loading = workspace.summary_panel.is_loading();
        workspace.summary_panel.close();

        match params.response_format {
            ResponseFormat::Markdown => Ok(if was_loading {
                "Summary panel closed; the pending summary was discarded.".to_string()
            } else {
                "Summary panel closed.".to_string()
            }),
            ResponseFormat::Json => Ok(serde_json::to_string_pretty(&json!({
                "closed": true,
                "discardedPending": was_loading,
            }))?),
        }
    }
}
