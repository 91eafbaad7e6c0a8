//! MCP tool implementations.
//!
//! Each tool module provides tools that:
//! 1. Parse and validate input parameters
//! 2. Read the catalog and update the session [`Workspace`]
//! 3. Format results as Markdown or JSON

mod comparison;
mod detail;
mod export;
mod preferences;
mod search;
mod summary;

pub use comparison::*;
pub use detail::*;
pub use export::*;
pub use preferences::*;
pub use search::*;
pub use summary::*;

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::catalog::Catalog;
use crate::client::SummaryClient;
use crate::compare::ComparisonSelection;
use crate::error::{StoreResult, ToolResult};
use crate::models::{FilterCriteria, SortOrder};
use crate::search::SavedSearchBook;
use crate::state::{PreferenceStore, Route, SidebarState, SummaryPanel};

/// Mutable session state shared by all tools.
#[derive(Debug)]
pub struct Workspace {
    /// Criteria of the advanced search.
    pub criteria: FilterCriteria,
    /// Ordering of the advanced search.
    pub sort: SortOrder,
    /// Result count of the last advanced search.
    pub last_result_count: usize,
    /// Saved searches.
    pub saved: SavedSearchBook,
    /// Papers selected for comparison.
    pub comparison: ComparisonSelection,
    /// Durable preferences and bookmarks.
    pub preferences: PreferenceStore,
    /// Navigation drawer.
    pub sidebar: SidebarState,
    /// Summary modal.
    pub summary_panel: SummaryPanel,
}

impl Workspace {
    /// Fresh session over `preferences`, with the mock saved searches.
    #[must_use]
    pub fn new(preferences: PreferenceStore) -> Self {
        Self {
            criteria: FilterCriteria::default(),
            sort: SortOrder::default(),
            last_result_count: 0,
            saved: SavedSearchBook::seeded(),
            comparison: ComparisonSelection::new(),
            preferences,
            sidebar: SidebarState::default(),
            summary_panel: SummaryPanel::new(),
        }
    }

    /// Navigate to `route`: record its path and close the sidebar.
    pub fn visit(&mut self, route: &Route) -> StoreResult<()> {
        tracing::debug!(path = %route.path(), title = route.title(), "Visiting route");
        self.preferences.record_route(&route.pathname())?;
        self.sidebar.close();
        Ok(())
    }
}

/// Tool execution context.
pub struct ToolContext {
    /// Summary client.
    pub client: Arc<SummaryClient>,
    /// Read-only paper catalog.
    pub catalog: Arc<Catalog>,
    /// Session state.
    pub workspace: Arc<Mutex<Workspace>>,
}

impl ToolContext {
    /// Create a new tool context.
    #[must_use]
    pub fn new(client: Arc<SummaryClient>, catalog: Arc<Catalog>, preferences: PreferenceStore) -> Self {
        Self { client, catalog, workspace: Arc::new(Mutex::new(Workspace::new(preferences))) }
    }
}

impl std::fmt::Debug for ToolContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolContext").field("client", &self.client).finish_non_exhaustive()
    }
}

/// Trait for MCP tools.
#[async_trait::async_trait]
pub trait McpTool: Send + Sync {
    /// Tool name (e.g., "advanced_search").
    fn name(&self) -> &'static str;

    /// Tool description for LLM.
    fn description(&self) -> &'static str;

    /// JSON Schema for input parameters.
    fn input_schema(&self) -> serde_json::Value;

    /// Execute the tool with given input.
    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String>;
}

/// Schema fragment shared by tools with a Markdown/JSON switch.
pub(crate) fn response_format_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "string",
        "enum": ["markdown", "json"],
        "default": "markdown"
    })
}

/// Register all tools.
#[must_use]
pub fn register_all_tools() -> Vec<Box<dyn McpTool>> {
    vec![
        // Search tools (7)
        Box::new(search::DiscoverPapersTool),
        Box::new(search::AdvancedSearchTool),
        Box::new(search::RemoveFilterTool),
        Box::new(search::ClearFiltersTool),
        Box::new(search::SaveSearchTool),
        Box::new(search::ListSavedSearchesTool),
        Box::new(search::LoadSavedSearchTool),

        // Paper detail tools (2)
        Box::new(detail::PaperDetailsTool),
        Box::new(detail::ToggleBookmarkTool),

        // Summary tools (2)
        Box::new(summary::GenerateSummaryTool),
        Box::new(summary::CloseSummaryTool),

        // Comparison tools (5)
        Box::new(comparison::AddToComparisonTool),
        Box::new(comparison::RemoveFromComparisonTool),
        Box::new(comparison::AnnotateComparisonTool),
        Box::new(comparison::HighlightDifferenceTool),
        Box::new(comparison::ComparePapersTool),

        // Export tools (2)
        Box::new(export::ExportComparisonTool),
        Box::new(export::ExportSearchResultsTool),

        // Preference tools (1)
        Box::new(preferences::NavigationPreferencesTool),
    ]
}
