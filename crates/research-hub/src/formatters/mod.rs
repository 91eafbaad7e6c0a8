//! Output formatters for tool responses and exports.

pub mod export;
pub mod json;
pub mod markdown;

pub use json::{compact_paper, compact_papers};
pub use markdown::{
    format_active_filters_markdown, format_comparison_markdown, format_paper_detail_markdown,
    format_paper_markdown, format_papers_markdown, format_preferences_markdown,
    format_saved_searches_markdown, format_summary_markdown,
};
