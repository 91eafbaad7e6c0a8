//! Paper and diagram records.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A research paper record from the mock catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paper {
    /// Catalog identifier.
    pub id: String,

    /// Paper title.
    pub title: String,

    /// Author display names.
    #[serde(default)]
    pub authors: Vec<String>,

    /// Journal, conference or source name.
    #[serde(default)]
    pub venue: String,

    /// Publication date.
    pub published: NaiveDate,

    /// Category tag (e.g., "Machine Learning").
    #[serde(default)]
    pub category: String,

    /// Free-text tags.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Author institutions.
    #[serde(default)]
    pub institutions: Vec<String>,

    /// Number of citations.
    #[serde(default)]
    pub citations: u32,

    /// Number of downloads.
    #[serde(default)]
    pub downloads: u32,

    /// Reader rating (0-5).
    #[serde(default)]
    pub rating: f64,

    /// Venue impact factor.
    #[serde(default)]
    pub impact_factor: Option<f64>,

    /// Whether the paper is open access.
    #[serde(default)]
    pub is_open_access: bool,

    /// Whether code is available.
    #[serde(default)]
    pub has_code: bool,

    /// Abstract, or the summary paragraph for search-result records.
    #[serde(default, rename = "abstract")]
    pub abstract_text: String,

    /// One-line summary shown on cards.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quick_summary: Option<String>,

    /// TL;DR paragraph shown on the detail view.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tldr: Option<String>,

    /// Key findings.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub key_findings: Vec<String>,

    /// Methodology text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub methodology: Option<String>,

    /// Results text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<String>,

    /// Conclusions text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conclusions: Option<String>,

    /// Sample size description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_size: Option<String>,

    /// Per-metric performance figures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<PerformanceMetrics>,

    /// Digital Object Identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,

    /// Landing page URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paper_url: Option<String>,

    /// Code repository URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,

    /// PDF URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdf_url: Option<String>,
}

impl Paper {
    /// Publication year.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.published.year()
    }

    /// Author names as a comma-separated string.
    #[must_use]
    pub fn author_names(&self) -> String {
        self.authors.join(", ")
    }

    /// Title up to the first ':', cut to `max_chars` characters.
    #[must_use]
    pub fn short_title(&self, max_chars: usize) -> String {
        let head = self.title.split(':').next().unwrap_or_default();
        head.chars().take(max_chars).collect()
    }

    /// Metric value if this paper carries performance metrics.
    #[must_use]
    pub fn metric(&self, metric: super::Metric) -> Option<f64> {
        self.metrics.as_ref().map(|m| m.get(metric))
    }
}

/// Per-metric performance figures, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceMetrics {
    /// Accuracy.
    pub accuracy: f64,
    /// Precision.
    pub precision: f64,
    /// Recall.
    pub recall: f64,
    /// F1 score.
    pub f1_score: f64,
}

impl PerformanceMetrics {
    /// Look up a metric by kind.
    #[must_use]
    pub const fn get(&self, metric: super::Metric) -> f64 {
        match metric {
            super::Metric::Accuracy => self.accuracy,
            super::Metric::Precision => self.precision,
            super::Metric::Recall => self.recall,
            super::Metric::F1 => self.f1_score,
        }
    }
}

/// A figure held locally for a paper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagram {
    /// Position in the paper's diagram list.
    pub id: u32,
    /// Figure title.
    pub title: String,
    /// Figure caption.
    pub description: String,
    /// Image reference.
    pub image_url: String,
    /// Figure kind (e.g., "Architecture").
    #[serde(rename = "type")]
    pub kind: String,
}
