//! Comparison tools: add_to_comparison, remove_from_comparison, annotate_comparison,
//! highlight_difference, compare_papers.

use chrono::Datelike;
use serde_json::json;

use super::{McpTool, ToolContext, response_format_schema};
use crate::compare::{self, AddOutcome, MAX_COMPARED};
use crate::error::{ToolError, ToolResult};
use crate::formatters;
use crate::models::{AnnotateInput, CompareInput, HighlightInput, PaperRefInput, ResponseFormat};
use crate::search;
use crate::state::Route;

/// Add-paper-to-comparison tool.
pub struct AddToComparisonTool;

#[async_trait::async_trait]
impl McpTool for AddToComparisonTool {
    fn name(&self) -> &'static str {
        "add_to_comparison"
    }

    fn description(&self) -> &'static str {
        "Add a paper to the side-by-side comparison (at most 4 papers)."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "paperId": {
                    "type": "string",
                    "description": "Paper ID (e.g., 'paper_1')"
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

        let mut workspace = ctx.workspace.lock().await;
        let outcome = workspace.comparison.add(paper.clone());
        let count = workspace.comparison.len();
        tracing::debug!(paper_id = %paper.id, ?outcome, count, "Add to comparison");

        Ok(match outcome {
            AddOutcome::Added => {
                format!("Added **{}** to the comparison ({count}/{MAX_COMPARED}).", paper.title)
            }
            AddOutcome::AlreadySelected => {
                format!("**{}** is already in the comparison ({count}/{MAX_COMPARED}).", paper.title)
            }
            AddOutcome::Full => format!(
                "The comparison is full ({MAX_COMPARED} papers). Remove a paper before adding **{}**.",
                paper.title
            ),
        })
    }
}

/// Remove-paper-from-comparison tool.
pub struct RemoveFromComparisonTool;

#[async_trait::async_trait]
impl McpTool for RemoveFromComparisonTool {
    fn name(&self) -> &'static str {
        "remove_from_comparison"
    }

    fn description(&self) -> &'static str {
        "Remove a paper and its notes from the comparison."
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

        let mut workspace = ctx.workspace.lock().await;
        if !workspace.comparison.remove(&params.paper_id) {
            return Err(ToolError::not_found(format!("paper {} in the comparison", params.paper_id)));
        }

        Ok(format!(
            "Removed `{}` from the comparison ({}/{MAX_COMPARED}).",
            params.paper_id,
            workspace.comparison.len()
        ))
    }
}

/// Comparison annotation tool.
pub struct AnnotateComparisonTool;

#[async_trait::async_trait]
impl McpTool for AnnotateComparisonTool {
    fn name(&self) -> &'static str {
        "annotate_comparison"
    }

    fn description(&self) -> &'static str {
        "Attach a note to one section of a compared paper. Overwrites any earlier note."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "paperId": {
                    "type": "string",
                    "description": "Paper ID (must be in the comparison)"
                },
                "section": {
                    "type": "string",
                    "enum": ["overview", "methodology", "results", "conclusions"]
                },
                "note": {
                    "type": "string",
                    "description": "Note text"
                }
            },
            "required": ["paperId", "section", "note"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: AnnotateInput = serde_json::from_value(input)?;

        let mut workspace = ctx.workspace.lock().await;
        if !workspace.comparison.annotate(&params.paper_id, params.section, params.note) {
            return Err(ToolError::validation(
                "paperId",
                format!("{} is not in the comparison", params.paper_id),
            ));
        }

        Ok(format!(
            "Saved {} note for `{}`.",
            params.section.label(),
            params.paper_id
        ))
    }
}

/// Highlighted difference toggle tool.
pub struct HighlightDifferenceTool;

#[async_trait::async_trait]
impl McpTool for HighlightDifferenceTool {
    fn name(&self) -> &'static str {
        "highlight_difference"
    }

    fn description(&self) -> &'static str {
        "Highlight a difference between compared papers, or clear it if already highlighted."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "label": {
                    "type": "string",
                    "description": "Difference label (e.g., 'Dataset size')"
                }
            },
            "required": ["label"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: HighlightInput = serde_json::from_value(input)?;

        let label = params.label.trim();
        if label.is_empty() {
            return Err(ToolError::validation("label", "must not be blank"));
        }

        let highlighted = ctx.workspace.lock().await.comparison.toggle_highlight(label);
        Ok(if highlighted {
            format!("Highlighted \"{label}\".")
        } else {
            format!("Cleared highlight \"{label}\".")
        })
    }
}

/// Comparison rendering tool.
pub struct ComparePapersTool;

#[async_trait::async_trait]
impl McpTool for ComparePapersTool {
    fn name(&self) -> &'static str {
        "compare_papers"
    }

    fn description(&self) -> &'static str {
        "Show the papers in the comparison side by side, with metrics, averages and a \
         citation timeline. Choose a view mode and optionally focus on one section."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "mode": {
                    "type": "string",
                    "enum": ["overview", "methodology", "results", "conclusions"],
                    "default": "overview"
                },
                "focus": {
                    "type": "string",
                    "enum": ["all", "methodology", "results", "conclusions", "metrics"],
                    "default": "all"
                },
                "responseFormat": response_format_schema()
            }
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: CompareInput = serde_json::from_value(input)?;
        let current_year = search::today().year();

        let mut workspace = ctx.workspace.lock().await;
        workspace.visit(&Route::Comparison)?;
        let selection = &workspace.comparison;

        match params.response_format {
            ResponseFormat::Markdown => Ok(formatters::format_comparison_markdown(
                selection,
                params.mode,
                params.focus,
                current_year,
            )),
            ResponseFormat::Json => {
                let papers = selection.papers();
                Ok(serde_json::to_string_pretty(&json!({
                    "papers": papers.iter().map(formatters::compact_paper).collect::<Vec<_>>(),
                    "metrics": compare::metric_table(papers),
                    "aggregates": compare::aggregate_stats(papers),
                    "timeline": compare::citation_timeline(papers, current_year),
                    "highlights": selection.highlights(),
                }))?)
            }
        }
    }
}
