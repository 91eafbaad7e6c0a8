//! File exports for search results and comparisons.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::models::{ExportFormat, Metric, Paper};

/// File name of the search-results export.
pub const SEARCH_RESULTS_FILE: &str = "search-results.csv";

/// Header row of the comparison CSV.
pub const COMPARISON_CSV_HEADER: [&str; 10] = [
    "Title",
    "Authors",
    "Journal",
    "Year",
    "Citations",
    "Category",
    "Accuracy",
    "Precision",
    "Recall",
    "F1 Score",
];

/// Sections flagged in the JSON comparison export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExportSections {
    /// Overview cards.
    pub overview: bool,
    /// Methodology rows.
    pub methodology: bool,
    /// Results block.
    pub results: bool,
    /// Conclusions cards.
    pub conclusions: bool,
    /// Charts.
    pub charts: bool,
    /// User annotations.
    pub annotations: bool,
}

impl Default for ExportSections {
    fn default() -> Self {
        Self {
            overview: true,
            methodology: true,
            results: true,
            conclusions: true,
            charts: true,
            annotations: false,
        }
    }
}

#[derive(Serialize)]
struct ComparisonDocument<'a> {
    timestamp: String,
    papers: &'a [Paper],
    sections: ExportSections,
    format: ExportFormat,
}

/// Quote a CSV field, doubling embedded quotes.
#[must_use]
pub fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Search results as header-less CSV, one quoted row per paper.
#[must_use]
pub fn search_results_csv(papers: &[Paper]) -> String {
    papers
        .iter()
        .map(|paper| {
            let impact = paper.impact_factor.map(|f| f.to_string()).unwrap_or_default();
            [
                quote(&paper.title),
                quote(&paper.authors.join("; ")),
                quote(&paper.venue),
                quote(&paper.published.format("%Y-%m-%d").to_string()),
                quote(&paper.category),
                quote(&paper.citations.to_string()),
                quote(&impact),
            ]
            .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Comparison as CSV with a header and metric columns.
#[must_use]
pub fn comparison_csv(papers: &[Paper]) -> String {
    let mut lines = vec![COMPARISON_CSV_HEADER.join(",")];

    lines.extend(papers.iter().map(|paper| {
        let mut row = vec![
            quote(&paper.title),
            quote(&paper.author_names()),
            quote(&paper.venue),
            paper.year().to_string(),
            paper.citations.to_string(),
            quote(&paper.category),
        ];
        row.extend(
            Metric::ALL
                .into_iter()
                .map(|m| paper.metric(m).map(|v| v.to_string()).unwrap_or_default()),
        );
        row.join(",")
    }));

    lines.join("\n")
}

/// Comparison as a pretty-printed JSON document.
///
/// # Errors
///
/// Returns error if the papers cannot be serialized.
pub fn comparison_json(papers: &[Paper], timestamp: DateTime<Utc>) -> serde_json::Result<String> {
    let document = ComparisonDocument {
        timestamp: timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
        papers,
        sections: ExportSections::default(),
        format: ExportFormat::Json,
    };
    serde_json::to_string_pretty(&document)
}

/// Plain-text bibliography, one entry per paper separated by blank lines.
#[must_use]
pub fn citations(papers: &[Paper]) -> String {
    papers
        .iter()
        .map(|p| format!("{}. ({}). {}. {}.", p.author_names(), p.year(), p.title, p.venue))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Render the comparison export in `format`.
///
/// # Errors
///
/// Returns error if JSON serialization fails.
pub fn export_comparison(
    papers: &[Paper],
    format: ExportFormat,
    timestamp: DateTime<Utc>,
) -> serde_json::Result<String> {
    Ok(match format {
        ExportFormat::Csv => comparison_csv(papers),
        ExportFormat::Json => comparison_json(papers, timestamp)?,
        ExportFormat::Citation => citations(papers),
    })
}
