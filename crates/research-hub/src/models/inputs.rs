//! Input models for MCP tool parameters.

use serde::{Deserialize, Serialize};

use super::{
    ComparisonFocus, ComparisonMode, ComparisonSection, ExportFormat, FilterCriteria, FilterKind,
    QuickFilters, ResponseFormat, SortOrder,
};

/// Input for the dashboard quick search.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoverPapersInput {
    /// Query, facets, date window and sort.
    #[serde(flatten)]
    pub filters: QuickFilters,

    /// Output format.
    #[serde(default)]
    pub response_format: ResponseFormat,
}

/// Input for the advanced search pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedSearchInput {
    /// Criteria; replaces the current criteria of the session.
    #[serde(flatten)]
    pub criteria: FilterCriteria,

    /// Result ordering.
    #[serde(default)]
    pub sort_by: SortOrder,

    /// Output format.
    #[serde(default)]
    pub response_format: ResponseFormat,
}

/// Input for removing one active filter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveFilterInput {
    /// Filter dimension.
    pub kind: FilterKind,

    /// Facet value to drop; required for facet kinds.
    #[serde(default)]
    pub value: Option<String>,

    /// Output format.
    #[serde(default)]
    pub response_format: ResponseFormat,
}

/// Input carrying only an output format.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatOnlyInput {
    /// Output format.
    #[serde(default)]
    pub response_format: ResponseFormat,
}

/// Input for saving the current search.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveSearchInput {
    /// Name for the saved search.
    pub name: String,
}

/// Input for loading a saved search.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadSavedSearchInput {
    /// Saved search ID.
    pub id: String,

    /// Result ordering.
    #[serde(default)]
    pub sort_by: SortOrder,

    /// Output format.
    #[serde(default)]
    pub response_format: ResponseFormat,
}

/// Input addressing a single paper.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaperIdInput {
    /// Paper ID; defaults to the showcase paper.
    #[serde(default = "default_paper_id")]
    pub paper_id: String,

    /// Output format.
    #[serde(default)]
    pub response_format: ResponseFormat,
}

fn default_paper_id() -> String {
    crate::catalog::SHOWCASE_ID.to_string()
}

/// Input naming a paper that must be given explicitly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaperRefInput {
    /// Paper ID.
    pub paper_id: String,
}

/// Input for generating a paper summary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateSummaryInput {
    /// Paper ID; defaults to the showcase paper.
    #[serde(default = "default_paper_id")]
    pub paper_id: String,

    /// Diagram to select once the summary is shown.
    #[serde(default)]
    pub selected_image: Option<usize>,

    /// Output format.
    #[serde(default)]
    pub response_format: ResponseFormat,
}

/// Input for toggling a highlighted difference.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightInput {
    /// Difference label.
    pub label: String,
}

/// Input for annotating a compared paper.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotateInput {
    /// Paper ID (must be in the comparison).
    pub paper_id: String,

    /// Annotated section.
    pub section: ComparisonSection,

    /// Note text.
    pub note: String,
}

/// Input for rendering the comparison.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareInput {
    /// View mode.
    #[serde(default)]
    pub mode: ComparisonMode,

    /// Focus filter.
    #[serde(default)]
    pub focus: ComparisonFocus,

    /// Output format.
    #[serde(default)]
    pub response_format: ResponseFormat,
}

/// Input for exporting the comparison.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportComparisonInput {
    /// Export format.
    #[serde(default)]
    pub format: ExportFormat,
}

/// Input for viewing or editing navigation preferences.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationPreferencesInput {
    /// Clear the search history first.
    #[serde(default)]
    pub clear_search_history: bool,

    /// Set the collapsed-sidebar preference.
    #[serde(default)]
    pub sidebar_collapsed: Option<bool>,

    /// Flip the open/closed sidebar flag.
    #[serde(default)]
    pub toggle_sidebar: bool,

    /// Output format.
    #[serde(default)]
    pub response_format: ResponseFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advanced_search_input_flattens_criteria() {
        let input: AdvancedSearchInput = serde_json::from_value(serde_json::json!({
            "categories": ["Quantum Computing"],
            "citationRange": {"min": "100", "max": ""},
            "sortBy": "citations",
            "responseFormat": "json"
        }))
        .unwrap();

        assert_eq!(input.criteria.categories, vec!["Quantum Computing".to_string()]);
        assert_eq!(input.criteria.citation_range.min, "100");
        assert_eq!(input.sort_by, SortOrder::Citations);
        assert!(input.response_format.is_json());
    }

    #[test]
    fn test_paper_id_defaults_to_showcase() {
        let input: PaperIdInput = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(input.paper_id, "1");
    }

    #[test]
    fn test_summary_input_defaults() {
        let input: GenerateSummaryInput = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(input.paper_id, "1");
        assert_eq!(input.selected_image, None);

        assert!(serde_json::from_value::<PaperRefInput>(serde_json::json!({})).is_err());
    }

    #[test]
    fn test_discover_input_defaults() {
        let input: DiscoverPapersInput =
            serde_json::from_value(serde_json::json!({"query": "quantum"})).unwrap();
        assert_eq!(input.filters.query, "quantum");
        assert_eq!(input.filters.sort_by, SortOrder::Relevance);
    }
}
