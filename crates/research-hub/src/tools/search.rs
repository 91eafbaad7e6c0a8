//! Search tools: discover_papers, advanced_search, remove_filter, clear_filters,
//! save_search, list_saved_searches, load_saved_search.

use serde_json::json;

use super::{McpTool, ToolContext, Workspace, response_format_schema};
use crate::error::{ToolError, ToolResult};
use crate::formatters;
use crate::models::{
    AdvancedSearchInput, DiscoverPapersInput, FormatOnlyInput, LoadSavedSearchInput, Paper,
    RemoveFilterInput, ResponseFormat, SaveSearchInput,
};
use crate::search::{self, Facets};
use crate::state::Route;

/// Dashboard quick search tool.
pub struct DiscoverPapersTool;

#[async_trait::async_trait]
impl McpTool for DiscoverPapersTool {
    fn name(&self) -> &'static str {
        "discover_papers"
    }

    fn description(&self) -> &'static str {
        "Browse the discovery dashboard. Matches the query against titles, authors, tags \
         and categories, narrows by category, source and date window, then sorts."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Free-text query (e.g., 'quantum')"
                },
                "categories": {
                    "type": "array",
                    "items": {"type": "string"},
                    "description": "Keep papers in any of these categories"
                },
                "sources": {
                    "type": "array",
                    "items": {"type": "string"},
                    "description": "Selected venues (recorded as active filters; results are not narrowed)"
                },
                "dateRange": {
                    "type": "string",
                    "enum": ["all", "week", "month", "year"],
                    "default": "all"
                },
                "sortBy": {
                    "type": "string",
                    "enum": ["relevance", "date", "citations", "rating"],
                    "default": "relevance"
                },
                "responseFormat": response_format_schema()
            }
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: DiscoverPapersInput = serde_json::from_value(input)?;

        {
            let mut workspace = ctx.workspace.lock().await;
            workspace.visit(&Route::Dashboard)?;
            workspace.preferences.record_search(&params.filters.query)?;
        }

        let papers = search::quick_search(&ctx.catalog.discovery, &params.filters, search::today());
        tracing::debug!(
            query = %params.filters.query,
            active = params.filters.active_count(),
            matched = papers.len(),
            "Quick search"
        );

        match params.response_format {
            ResponseFormat::Markdown => Ok(formatters::format_papers_markdown(&papers)),
            ResponseFormat::Json => {
                let facets = Facets::from_papers(&ctx.catalog.discovery);
                let mut body = formatters::compact_papers(&papers);
                body["activeFilters"] = json!(params.filters.active_count());
                body["facets"] = json!({
                    "categories": facets.categories,
                    "sources": facets.sources,
                });
                Ok(serde_json::to_string_pretty(&body)?)
            }
        }
    }
}

/// Advanced multi-criteria search tool.
pub struct AdvancedSearchTool;

#[async_trait::async_trait]
impl McpTool for AdvancedSearchTool {
    fn name(&self) -> &'static str {
        "advanced_search"
    }

    fn description(&self) -> &'static str {
        "Run the advanced search. Every active constraint must match (AND). The criteria \
         replace the current search and can then be edited with remove_filter or saved."
    }

    fn input_schema(&self) -> serde_json::Value {
        let range = json!({
            "type": "object",
            "properties": {
                "min": {"type": "string"},
                "max": {"type": "string"}
            }
        });

        json!({
            "type": "object",
            "properties": {
                "keywords": {
                    "type": "string",
                    "description": "Substring matched against title or abstract"
                },
                "booleanOperator": {
                    "type": "string",
                    "enum": ["AND", "OR", "NOT"],
                    "default": "AND",
                    "description": "Recorded with the criteria; constraints always combine with AND"
                },
                "dateRange": {
                    "type": "object",
                    "properties": {
                        "start": {"type": "string", "description": "YYYY-MM-DD"},
                        "end": {"type": "string", "description": "YYYY-MM-DD; defaults to today"}
                    }
                },
                "categories": {"type": "array", "items": {"type": "string"}},
                "authors": {"type": "array", "items": {"type": "string"}},
                "institutions": {"type": "array", "items": {"type": "string"}},
                "publications": {"type": "array", "items": {"type": "string"}},
                "citationRange": range.clone(),
                "impactFactor": range,
                "sortBy": {
                    "type": "string",
                    "enum": ["relevance", "date", "citations", "rating"],
                    "default": "relevance"
                },
                "responseFormat": response_format_schema()
            }
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: AdvancedSearchInput = serde_json::from_value(input)?;

        let mut workspace = ctx.workspace.lock().await;
        workspace.visit(&Route::AdvancedSearch)?;
        if let Some(keyword) = params.criteria.keyword() {
            workspace.preferences.record_search(keyword)?;
        }
        workspace.criteria = params.criteria;
        workspace.sort = params.sort_by;

        let papers = rerun(&mut workspace, &ctx.catalog.search);
        render_results(&workspace, &papers, params.response_format)
    }
}

/// Active filter removal tool.
pub struct RemoveFilterTool;

#[async_trait::async_trait]
impl McpTool for RemoveFilterTool {
    fn name(&self) -> &'static str {
        "remove_filter"
    }

    fn description(&self) -> &'static str {
        "Remove one active filter from the current advanced search and re-run it. \
         Facet kinds need the value to drop; range kinds reset."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "kind": {
                    "type": "string",
                    "enum": [
                        "keywords", "dateRange", "categories", "authors",
                        "institutions", "publications", "citationRange", "impactFactor"
                    ]
                },
                "value": {
                    "type": "string",
                    "description": "Facet value to drop (e.g., 'Physics')"
                },
                "responseFormat": response_format_schema()
            },
            "required": ["kind"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: RemoveFilterInput = serde_json::from_value(input)?;

        if params.kind.is_facet() && params.value.is_none() {
            return Err(ToolError::validation("value", "required when removing a facet filter"));
        }

        let mut workspace = ctx.workspace.lock().await;
        let changed =
            search::remove_filter(&mut workspace.criteria, params.kind, params.value.as_deref());
        tracing::debug!(kind = ?params.kind, changed, "Removed filter");

        let papers = rerun(&mut workspace, &ctx.catalog.search);
        render_results(&workspace, &papers, params.response_format)
    }
}

/// Clear-all-filters tool.
pub struct ClearFiltersTool;

#[async_trait::async_trait]
impl McpTool for ClearFiltersTool {
    fn name(&self) -> &'static str {
        "clear_filters"
    }

    fn description(&self) -> &'static str {
        "Reset every constraint of the current advanced search and re-run it."
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
        search::clear_all(&mut workspace.criteria);

        let papers = rerun(&mut workspace, &ctx.catalog.search);
        render_results(&workspace, &papers, params.response_format)
    }
}

/// Save-current-search tool.
pub struct SaveSearchTool;

#[async_trait::async_trait]
impl McpTool for SaveSearchTool {
    fn name(&self) -> &'static str {
        "save_search"
    }

    fn description(&self) -> &'static str {
        "Save a snapshot of the current advanced search criteria under a name."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "name": {
                    "type": "string",
                    "description": "Name for the saved search"
                }
            },
            "required": ["name"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: SaveSearchInput = serde_json::from_value(input)?;

        let mut workspace = ctx.workspace.lock().await;
        let Workspace { criteria, last_result_count, saved, .. } = &mut *workspace;

        let search = saved
            .save(&params.name, criteria, *last_result_count, search::today())
            .ok_or_else(|| ToolError::validation("name", "must not be blank"))?;

        Ok(format!(
            "Saved search **{}** (`{}`) with {} results.",
            search.name, search.id, search.result_count
        ))
    }
}

/// Saved search listing tool.
pub struct ListSavedSearchesTool;

#[async_trait::async_trait]
impl McpTool for ListSavedSearchesTool {
    fn name(&self) -> &'static str {
        "list_saved_searches"
    }

    fn description(&self) -> &'static str {
        "List saved searches, newest first."
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
        let workspace = ctx.workspace.lock().await;

        match params.response_format {
            ResponseFormat::Markdown => {
                Ok(formatters::format_saved_searches_markdown(workspace.saved.list()))
            }
            ResponseFormat::Json => Ok(serde_json::to_string_pretty(&json!({
                "total": workspace.saved.len(),
                "searches": workspace.saved.list(),
            }))?),
        }
    }
}

/// Saved search loading tool.
pub struct LoadSavedSearchTool;

#[async_trait::async_trait]
impl McpTool for LoadSavedSearchTool {
    fn name(&self) -> &'static str {
        "load_saved_search"
    }

    fn description(&self) -> &'static str {
        "Replace the current advanced search with a saved one and run it."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "id": {
                    "type": "string",
                    "description": "Saved search ID"
                },
                "sortBy": {
                    "type": "string",
                    "enum": ["relevance", "date", "citations", "rating"],
                    "default": "relevance"
                },
                "responseFormat": response_format_schema()
            },
            "required": ["id"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: LoadSavedSearchInput = serde_json::from_value(input)?;

        let mut workspace = ctx.workspace.lock().await;
        let criteria = workspace
            .saved
            .load(&params.id)
            .ok_or_else(|| ToolError::not_found(format!("saved search {}", params.id)))?;

        workspace.visit(&Route::AdvancedSearch)?;
        workspace.criteria = criteria;
        workspace.sort = params.sort_by;

        let papers = rerun(&mut workspace, &ctx.catalog.search);
        render_results(&workspace, &papers, params.response_format)
    }
}

/// Run the current criteria against `papers` and remember the result count.
fn rerun(workspace: &mut Workspace, papers: &[Paper]) -> Vec<Paper> {
    let results = search::search(papers, &workspace.criteria, workspace.sort, search::today());
    workspace.last_result_count = results.len();
    results
}

fn render_results(
    workspace: &Workspace,
    papers: &[Paper],
    format: ResponseFormat,
) -> ToolResult<String> {
    let chips = search::active_filters(&workspace.criteria);

    match format {
        ResponseFormat::Markdown => {
            let mut output = formatters::format_active_filters_markdown(&chips, papers.len());
            output.push('\n');
            output.push_str(&formatters::format_papers_markdown(papers));
            Ok(output)
        }
        ResponseFormat::Json => {
            let mut body = formatters::compact_papers(papers);
            body["activeFilters"] = serde_json::to_value(&chips)?;
            body["sortBy"] = serde_json::to_value(workspace.sort)?;
            Ok(serde_json::to_string_pretty(&body)?)
        }
    }
}
