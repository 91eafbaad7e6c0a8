//! Export tools: export_comparison, export_search_results.

use serde_json::json;

use super::{McpTool, ToolContext};
use crate::error::ToolResult;
use crate::formatters::export;
use crate::models::ExportComparisonInput;
use crate::search;

/// Comparison export tool.
pub struct ExportComparisonTool;

#[async_trait::async_trait]
impl McpTool for ExportComparisonTool {
    fn name(&self) -> &'static str {
        "export_comparison"
    }

    fn description(&self) -> &'static str {
        "Export the compared papers as CSV (with metric columns), JSON, or a plain-text \
         citation list."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "format": {
                    "type": "string",
                    "enum": ["csv", "json", "citation"],
                    "default": "csv"
                }
            }
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: ExportComparisonInput = serde_json::from_value(input)?;

        let papers = ctx.workspace.lock().await.comparison.papers().to_vec();
        let output = export::export_comparison(&papers, params.format, chrono::Utc::now())?;

        tracing::info!(
            format = ?params.format,
            file = params.format.file_name(),
            papers = papers.len(),
            "Exported comparison"
        );
        Ok(output)
    }
}

/// Search results export tool.
pub struct ExportSearchResultsTool;

#[async_trait::async_trait]
impl McpTool for ExportSearchResultsTool {
    fn name(&self) -> &'static str {
        "export_search_results"
    }

    fn description(&self) -> &'static str {
        "Export the results of the current advanced search as CSV rows \
         (title, authors, publication, date, category, citations, impact factor)."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {}
        })
    }

    async fn execute(&self, ctx: &ToolContext, _input: serde_json::Value) -> ToolResult<String> {
        let (criteria, sort) = {
            let workspace = ctx.workspace.lock().await;
            (workspace.criteria.clone(), workspace.sort)
        };
        let papers = search::search(&ctx.catalog.search, &criteria, sort, search::today());

        tracing::info!(
            file = export::SEARCH_RESULTS_FILE,
            papers = papers.len(),
            "Exported search results"
        );
        Ok(export::search_results_csv(&papers))
    }
}
