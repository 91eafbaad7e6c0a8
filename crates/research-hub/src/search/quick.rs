//! Dashboard quick search.

use chrono::{Days, Months, NaiveDate};

use super::{contains_ignore_case, in_set, sort_papers};
use crate::models::{DateWindow, Paper, QuickFilters};

/// Earliest publication date kept by `window`, or `None` for [`DateWindow::All`].
#[must_use]
pub fn window_start(window: DateWindow, today: NaiveDate) -> Option<NaiveDate> {
    match window {
        DateWindow::All => None,
        DateWindow::Week => today.checked_sub_days(Days::new(7)),
        DateWindow::Month => today.checked_sub_months(Months::new(1)),
        DateWindow::Year => today.checked_sub_months(Months::new(12)),
    }
}

/// Filter by query, categories and date window, then sort.
///
/// Selected sources are kept in `filters` and counted as active, but do not
/// narrow the results.
#[must_use]
pub fn quick_search(papers: &[Paper], filters: &QuickFilters, today: NaiveDate) -> Vec<Paper> {
    let query = filters.query.trim().to_lowercase();
    let since = window_start(filters.date_range, today);

    let mut results: Vec<Paper> = papers
        .iter()
        .filter(|paper| query.is_empty() || matches_query(paper, &query))
        .filter(|paper| in_set(&filters.categories, std::iter::once(&paper.category)))
        .filter(|paper| since.is_none_or(|start| paper.published >= start))
        .cloned()
        .collect();

    sort_papers(&mut results, filters.sort_by);
    results
}

fn matches_query(paper: &Paper, query: &str) -> bool {
    contains_ignore_case(&paper.title, query)
        || paper.authors.iter().any(|a| contains_ignore_case(a, query))
        || paper.tags.iter().any(|t| contains_ignore_case(t, query))
        || contains_ignore_case(&paper.category, query)
}

/// Selectable facet values derived from a paper set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Facets {
    /// Unique categories in first-seen order.
    pub categories: Vec<String>,
    /// Unique venues in first-seen order.
    pub sources: Vec<String>,
}

impl Facets {
    /// Collect facets from `papers`.
    #[must_use]
    pub fn from_papers(papers: &[Paper]) -> Self {
        let mut facets = Self::default();
        for paper in papers {
            if !facets.categories.contains(&paper.category) {
                facets.categories.push(paper.category.clone());
            }
            if !facets.sources.contains(&paper.venue) {
                facets.sources.push(paper.venue.clone());
            }
        }
        facets
    }
}
