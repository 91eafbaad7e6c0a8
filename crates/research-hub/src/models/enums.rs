//! Enumeration types for pipeline and tool parameters.

use serde::{Deserialize, Serialize};

/// Output format for tool responses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    /// Human-readable Markdown format.
    #[default]
    Markdown,
    /// Machine-readable JSON format.
    Json,
}

impl ResponseFormat {
    /// Check if this is JSON format.
    #[must_use]
    pub const fn is_json(self) -> bool {
        matches!(self, Self::Json)
    }
}

/// Result ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Input order.
    #[default]
    Relevance,
    /// Newest first.
    Date,
    /// Most cited first.
    Citations,
    /// Highest rated first.
    Rating,
}

/// Boolean operator captured by the advanced search form.
///
/// Stored and round-tripped only; all active constraints are always combined with AND.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BooleanOperator {
    /// Conjunction.
    #[default]
    And,
    /// Disjunction.
    Or,
    /// Negation.
    Not,
}

/// Relative publication window for the dashboard quick filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateWindow {
    /// No date constraint.
    #[default]
    All,
    /// Past 7 days.
    Week,
    /// Past calendar month.
    Month,
    /// Past calendar year.
    Year,
}

/// Removable filter dimension of the advanced search criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterKind {
    /// Keyword text.
    Keywords,
    /// Publication date range.
    DateRange,
    /// Category facet.
    Categories,
    /// Author facet.
    Authors,
    /// Institution facet.
    Institutions,
    /// Publication venue facet.
    Publications,
    /// Citation count range.
    CitationRange,
    /// Impact factor range.
    ImpactFactor,
}

impl FilterKind {
    /// True for facets that hold a set of values.
    #[must_use]
    pub const fn is_facet(self) -> bool {
        matches!(self, Self::Categories | Self::Authors | Self::Institutions | Self::Publications)
    }
}

/// Comparison view mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComparisonMode {
    /// Abstract and annotation cards.
    #[default]
    Overview,
    /// Methodology, sample size and venue rows.
    Methodology,
    /// Metric table and key findings.
    Results,
    /// Conclusions with annotations.
    Conclusions,
}

/// Which aspects the comparison view should emphasize.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComparisonFocus {
    /// Everything the mode renders.
    #[default]
    All,
    /// Methodology only.
    Methodology,
    /// Results and data only.
    Results,
    /// Conclusions only.
    Conclusions,
    /// Performance metrics and derived statistics only.
    Metrics,
}

/// Section of a compared paper that can carry an annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComparisonSection {
    /// Overview card.
    Overview,
    /// Methodology row.
    Methodology,
    /// Results block.
    Results,
    /// Conclusions card.
    Conclusions,
}

impl ComparisonSection {
    /// Section label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Methodology => "methodology",
            Self::Results => "results",
            Self::Conclusions => "conclusions",
        }
    }
}

/// Performance metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// Accuracy.
    Accuracy,
    /// Precision.
    Precision,
    /// Recall.
    Recall,
    /// F1 score.
    F1,
}

impl Metric {
    /// All metrics in table order.
    pub const ALL: [Self; 4] = [Self::Accuracy, Self::Precision, Self::Recall, Self::F1];

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Accuracy => "Accuracy",
            Self::Precision => "Precision",
            Self::Recall => "Recall",
            Self::F1 => "F1 Score",
        }
    }
}

/// Export format for comparison and search results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Comma-separated values.
    #[default]
    Csv,
    /// JSON document.
    Json,
    /// Plain-text bibliography.
    Citation,
}

impl ExportFormat {
    /// Suggested file name for this format.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Csv => "paper-comparison.csv",
            Self::Json => "paper-comparison.json",
            Self::Citation => "paper-citations.txt",
        }
    }

    /// Get the MIME type for this format.
    #[must_use]
    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::Csv => "text/csv",
            Self::Json => "application/json",
            Self::Citation => "text/plain",
        }
    }
}
