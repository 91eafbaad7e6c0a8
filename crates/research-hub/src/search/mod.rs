//! Filter and search pipeline over in-memory papers.
//!
//! All active constraints are combined with AND, whatever the criteria's
//! boolean operator says. Text comparisons ignore case. A bound that does not
//! parse is treated as absent, so no input makes the pipeline fail.

mod active;
mod quick;
mod saved;

pub use active::{ActiveFilter, active_filters, clear_all, remove_filter};
pub use quick::{Facets, quick_search, window_start};
pub use saved::SavedSearchBook;

use chrono::NaiveDate;

use crate::models::{FilterCriteria, Paper, SortOrder};

/// Filter `papers` by `criteria`, keeping input order.
///
/// `today` closes a date range that has no end.
#[must_use]
pub fn apply_filters(papers: &[Paper], criteria: &FilterCriteria, today: NaiveDate) -> Vec<Paper> {
    let keyword = criteria.keyword().map(str::to_lowercase);

    let date_bounds = criteria.date_range.is_active().then(|| {
        let start = criteria.date_range.start_date().unwrap_or(earliest());
        let end = criteria.date_range.end_date().unwrap_or(today);
        (start, end)
    });

    papers
        .iter()
        .filter(|paper| {
            keyword.as_deref().is_none_or(|kw| {
                contains_ignore_case(&paper.title, kw) || contains_ignore_case(&paper.abstract_text, kw)
            })
        })
        .filter(|paper| in_set(&criteria.categories, std::iter::once(&paper.category)))
        .filter(|paper| in_set(&criteria.authors, &paper.authors))
        .filter(|paper| in_set(&criteria.institutions, &paper.institutions))
        .filter(|paper| in_set(&criteria.publications, std::iter::once(&paper.venue)))
        .filter(|paper| {
            date_bounds.is_none_or(|(start, end)| paper.published >= start && paper.published <= end)
        })
        .filter(|paper| {
            !criteria.citation_range.is_active()
                || criteria.citation_range.contains(f64::from(paper.citations))
        })
        .filter(|paper| {
            !criteria.impact_factor.is_active()
                || paper.impact_factor.is_some_and(|f| criteria.impact_factor.contains(f))
        })
        .cloned()
        .collect()
}

/// Filter then sort.
#[must_use]
pub fn search(
    papers: &[Paper],
    criteria: &FilterCriteria,
    sort: SortOrder,
    today: NaiveDate,
) -> Vec<Paper> {
    let mut results = apply_filters(papers, criteria, today);
    sort_papers(&mut results, sort);
    tracing::debug!(
        total = papers.len(),
        matched = results.len(),
        sort = ?sort,
        "Applied search criteria"
    );
    results
}

/// Stable sort; ties keep their relative order.
pub fn sort_papers(papers: &mut [Paper], sort: SortOrder) {
    match sort {
        SortOrder::Relevance => {}
        SortOrder::Date => papers.sort_by(|a, b| b.published.cmp(&a.published)),
        SortOrder::Citations => papers.sort_by(|a, b| b.citations.cmp(&a.citations)),
        SortOrder::Rating => papers.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
    }
}

/// Today's date in local time.
#[must_use]
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Lower bound used when the date range has no start.
fn earliest() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Case-insensitive substring test; `needle_lower` must already be lowercase.
pub(crate) fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Empty selection accepts everything; otherwise any value must be selected.
pub(crate) fn in_set<'a>(
    selected: &[String],
    values: impl IntoIterator<Item = &'a String>,
) -> bool {
    if selected.is_empty() {
        return true;
    }
    values.into_iter().any(|value| {
        let value = value.to_lowercase();
        selected.iter().any(|s| s.to_lowercase() == value)
    })
}
