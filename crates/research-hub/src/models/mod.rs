//! Data models for papers, filters, comparisons and summaries.
//!
//! All models use `#[serde(rename_all = "camelCase")]` to match the JSON
//! shapes used by tool inputs and exports.

mod enums;
mod filters;
mod inputs;
mod paper;
mod summary;

pub use enums::{
    BooleanOperator, ComparisonFocus, ComparisonMode, ComparisonSection, DateWindow,
    ExportFormat, FilterKind, Metric, ResponseFormat, SortOrder,
};
pub use filters::{DateRange, FilterCriteria, NumericRange, QuickFilters, SavedSearch};
pub use inputs::*;
pub use paper::{Diagram, Paper, PerformanceMetrics};
pub use summary::{
    DiagramDescription, FALLBACK_KEY_POINT, FALLBACK_SUMMARY, ResolvedDiagram, SummaryPayload,
    SummaryResult,
};
