//! Active filter chips and their removal.

use serde::Serialize;

use crate::models::{FilterCriteria, FilterKind, NumericRange};

/// One removable constraint of the current criteria.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveFilter {
    /// Dimension the chip belongs to.
    pub kind: FilterKind,
    /// Display label, e.g. `Category: Physics`.
    pub label: String,
    /// Facet value; `None` for ranges.
    pub value: Option<String>,
}

impl ActiveFilter {
    fn range(kind: FilterKind, label: String) -> Self {
        Self { kind, label, value: None }
    }

    fn valued(kind: FilterKind, label: String, value: &str) -> Self {
        Self { kind, label, value: Some(value.to_string()) }
    }
}

/// List every active constraint as a chip, in form order.
#[must_use]
pub fn active_filters(criteria: &FilterCriteria) -> Vec<ActiveFilter> {
    let mut chips = Vec::new();

    if let Some(keyword) = criteria.keyword() {
        chips.push(ActiveFilter::valued(
            FilterKind::Keywords,
            format!("Keywords: \"{keyword}\""),
            keyword,
        ));
    }

    if criteria.date_range.is_active() {
        let start = or_placeholder(&criteria.date_range.start, "Any");
        let end = or_placeholder(&criteria.date_range.end, "Any");
        chips.push(ActiveFilter::range(FilterKind::DateRange, format!("Date: {start} to {end}")));
    }

    let facets = [
        (FilterKind::Categories, "Category", &criteria.categories),
        (FilterKind::Authors, "Author", &criteria.authors),
        (FilterKind::Institutions, "Institution", &criteria.institutions),
        (FilterKind::Publications, "Publication", &criteria.publications),
    ];
    for (kind, prefix, values) in facets {
        chips.extend(
            values
                .iter()
                .map(|value| ActiveFilter::valued(kind, format!("{prefix}: {value}"), value)),
        );
    }

    if criteria.citation_range.is_active() {
        chips.push(ActiveFilter::range(
            FilterKind::CitationRange,
            format!("Citations: {}", range_label(&criteria.citation_range)),
        ));
    }
    if criteria.impact_factor.is_active() {
        chips.push(ActiveFilter::range(
            FilterKind::ImpactFactor,
            format!("Impact Factor: {}", range_label(&criteria.impact_factor)),
        ));
    }

    chips
}

/// Remove one constraint. Facet kinds drop `value`; other kinds reset.
///
/// Returns whether anything changed.
pub fn remove_filter(criteria: &mut FilterCriteria, kind: FilterKind, value: Option<&str>) -> bool {
    match kind {
        FilterKind::Keywords => reset(&mut criteria.keywords),
        FilterKind::DateRange => reset(&mut criteria.date_range),
        FilterKind::CitationRange => reset(&mut criteria.citation_range),
        FilterKind::ImpactFactor => reset(&mut criteria.impact_factor),
        FilterKind::Categories => drop_value(&mut criteria.categories, value),
        FilterKind::Authors => drop_value(&mut criteria.authors, value),
        FilterKind::Institutions => drop_value(&mut criteria.institutions, value),
        FilterKind::Publications => drop_value(&mut criteria.publications, value),
    }
}

/// Reset every constraint, including the boolean operator.
pub fn clear_all(criteria: &mut FilterCriteria) {
    *criteria = FilterCriteria::default();
}

fn reset<T: Default + PartialEq>(field: &mut T) -> bool {
    let old = std::mem::take(field);
    old != T::default()
}

fn drop_value(values: &mut Vec<String>, value: Option<&str>) -> bool {
    let Some(value) = value else {
        return false;
    };
    let before = values.len();
    values.retain(|v| v != value);
    values.len() != before
}

fn or_placeholder<'a>(raw: &'a str, placeholder: &'a str) -> &'a str {
    let trimmed = raw.trim();
    if trimmed.is_empty() { placeholder } else { trimmed }
}

fn range_label(range: &NumericRange) -> String {
    format!("{} - {}", or_placeholder(&range.min, "0"), or_placeholder(&range.max, "∞"))
}
