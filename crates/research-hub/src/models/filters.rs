//! Filter criteria and saved searches.
//!
//! Range bounds are kept as the raw strings a form would submit and parsed at
//! filter time. An empty or unparseable bound means "no constraint".

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{BooleanOperator, DateWindow, SortOrder};

/// Structured constraints for the advanced search pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    /// Keyword matched against title and abstract.
    pub keywords: String,

    /// Captured operator; not applied.
    pub boolean_operator: BooleanOperator,

    /// Inclusive publication date range.
    pub date_range: DateRange,

    /// Accepted categories.
    pub categories: Vec<String>,

    /// Accepted authors.
    pub authors: Vec<String>,

    /// Accepted institutions.
    pub institutions: Vec<String>,

    /// Accepted publication venues.
    pub publications: Vec<String>,

    /// Citation count range.
    pub citation_range: NumericRange,

    /// Impact factor range.
    pub impact_factor: NumericRange,
}

impl FilterCriteria {
    /// Keyword constraint, if active.
    #[must_use]
    pub fn keyword(&self) -> Option<&str> {
        let trimmed = self.keywords.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    /// True when no constraint is active.
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.keyword().is_none()
            && !self.date_range.is_active()
            && self.categories.is_empty()
            && self.authors.is_empty()
            && self.institutions.is_empty()
            && self.publications.is_empty()
            && !self.citation_range.is_active()
            && !self.impact_factor.is_active()
    }
}

/// Inclusive date range as `YYYY-MM-DD` strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateRange {
    /// Earliest date; empty means unbounded.
    pub start: String,
    /// Latest date; empty means "today".
    pub end: String,
}

impl DateRange {
    /// Create a range from raw bounds.
    #[must_use]
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self { start: start.into(), end: end.into() }
    }

    /// Parsed start bound.
    #[must_use]
    pub fn start_date(&self) -> Option<NaiveDate> {
        parse_date(&self.start)
    }

    /// Parsed end bound.
    #[must_use]
    pub fn end_date(&self) -> Option<NaiveDate> {
        parse_date(&self.end)
    }

    /// True when either bound is set.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.start.trim().is_empty() || !self.end.trim().is_empty()
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Numeric range as raw strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumericRange {
    /// Lower bound; empty means unbounded.
    pub min: String,
    /// Upper bound; empty means unbounded.
    pub max: String,
}

impl NumericRange {
    /// Create a range from raw bounds.
    #[must_use]
    pub fn new(min: impl Into<String>, max: impl Into<String>) -> Self {
        Self { min: min.into(), max: max.into() }
    }

    /// Parsed lower bound.
    #[must_use]
    pub fn min_value(&self) -> Option<f64> {
        parse_number(&self.min)
    }

    /// Parsed upper bound.
    #[must_use]
    pub fn max_value(&self) -> Option<f64> {
        parse_number(&self.max)
    }

    /// True when at least one bound parses.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.min_value().is_some() || self.max_value().is_some()
    }

    /// Whether `value` satisfies every parsed bound.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        self.min_value().is_none_or(|min| value >= min)
            && self.max_value().is_none_or(|max| value <= max)
    }
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// A named snapshot of filter criteria.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedSearch {
    /// Identifier.
    pub id: String,
    /// User-chosen name.
    pub name: String,
    /// Criteria snapshot.
    pub filters: FilterCriteria,
    /// Result count when saved; never re-validated.
    pub result_count: usize,
    /// Last time the search was saved or used.
    pub last_used: NaiveDate,
}

/// Dashboard quick-search state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuickFilters {
    /// Free-text query over title, authors, tags and category.
    pub query: String,
    /// Accepted categories.
    pub categories: Vec<String>,
    /// Relative publication window.
    pub date_range: DateWindow,
    /// Accepted sources (venues).
    pub sources: Vec<String>,
    /// Result ordering.
    pub sort_by: SortOrder,
}

impl QuickFilters {
    /// Number of active facet selections (the search query is not counted).
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.categories.len()
            + self.sources.len()
            + usize::from(self.date_range != DateWindow::All)
    }
}
