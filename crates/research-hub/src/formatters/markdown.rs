//! Markdown output formatting.

use std::borrow::Cow;

use crate::compare::{ComparisonSelection, aggregate_stats, citation_timeline, metric_table};
use crate::models::{
    ComparisonFocus, ComparisonMode, ComparisonSection, Diagram, Paper, SavedSearch, SummaryResult,
};
use crate::search::ActiveFilter;
use crate::state::{NavigationPreferences, Route};

/// Characters of abstract shown in list entries.
const ABSTRACT_PREVIEW: usize = 300;

/// Format a list of papers as Markdown.
#[must_use]
pub fn format_papers_markdown(papers: &[Paper]) -> String {
    if papers.is_empty() {
        return "No papers found.".to_string();
    }

    let mut output = format!("# Papers ({} results)\n\n", papers.len());

    for (i, paper) in papers.iter().enumerate() {
        output.push_str(&format_paper_markdown(paper, i + 1));
        output.push_str("\n---\n\n");
    }

    output
}

/// Format a single paper as a list entry.
#[must_use]
pub fn format_paper_markdown(paper: &Paper, index: usize) -> String {
    let mut output = String::new();

    output.push_str(&format!("## {}. {}\n\n", index, paper.title));
    output.push_str(&format!("**ID**: `{}`\n\n", paper.id));

    if !paper.authors.is_empty() {
        output.push_str(&format!("**Authors**: {}\n\n", paper.author_names()));
    }

    let mut meta = vec![
        format!("**Published**: {}", paper.published.format("%Y-%m-%d")),
        format!("**Citations**: {}", paper.citations),
        format!("**Venue**: {}", paper.venue),
    ];
    if paper.rating > 0.0 {
        meta.push(format!("**Rating**: {:.1}", paper.rating));
    }
    if let Some(impact) = paper.impact_factor {
        meta.push(format!("**Impact Factor**: {impact}"));
    }
    output.push_str(&format!("{}\n\n", meta.join(" | ")));

    output.push_str(&format!("**Category**: {}", paper.category));
    if !paper.tags.is_empty() {
        output.push_str(&format!(" | **Tags**: {}", paper.tags.join(", ")));
    }
    output.push_str("\n\n");

    let mut badges = Vec::new();
    if paper.is_open_access {
        badges.push("Open Access");
    }
    if paper.has_code {
        badges.push("Code Available");
    }
    if !badges.is_empty() {
        output.push_str(&format!("_{}_\n\n", badges.join(" · ")));
    }

    if let Some(summary) = &paper.quick_summary {
        output.push_str(&format!("> **Summary**: {summary}\n\n"));
    }

    if !paper.abstract_text.is_empty() {
        output.push_str(&format!("**Abstract**: {}\n", preview(&paper.abstract_text)));
    }

    output
}

fn preview(text: &str) -> Cow<'_, str> {
    if text.chars().count() > ABSTRACT_PREVIEW {
        let cut: String = text.chars().take(ABSTRACT_PREVIEW).collect();
        Cow::Owned(format!("{cut}..."))
    } else {
        Cow::Borrowed(text)
    }
}

/// Format the detail view of a paper.
#[must_use]
pub fn format_paper_detail_markdown(paper: &Paper, bookmarked: bool, diagrams: &[Diagram]) -> String {
    let mut output = format!("# {}\n\n", paper.title);

    output.push_str(&format!("**Authors**: {}\n\n", paper.author_names()));
    output.push_str(&format!(
        "**Venue**: {} | **Published**: {} | **Citations**: {}\n\n",
        paper.venue,
        paper.published.format("%B %-d, %Y"),
        paper.citations
    ));
    output.push_str(&format!(
        "**Bookmarked**: {} | **Route**: `{}`\n\n",
        if bookmarked { "yes" } else { "no" },
        Route::paper(paper.id.clone()).path()
    ));

    let mut links = Vec::new();
    if let Some(doi) = &paper.doi {
        links.push(format!("[DOI](https://doi.org/{doi})"));
    }
    if let Some(url) = &paper.paper_url {
        links.push(format!("[Paper]({url})"));
    }
    if let Some(url) = &paper.pdf_url {
        links.push(format!("[PDF]({url})"));
    }
    if let Some(url) = &paper.github_url {
        links.push(format!("[Code]({url})"));
    }
    if !links.is_empty() {
        output.push_str(&format!("**Links**: {}\n\n", links.join(" | ")));
    }

    if let Some(tldr) = paper.tldr.as_ref().or(paper.quick_summary.as_ref()) {
        output.push_str(&format!("> **TL;DR**: {tldr}\n\n"));
    }

    output.push_str(&format!("## Abstract\n\n{}\n\n", paper.abstract_text));

    if !paper.key_findings.is_empty() {
        output.push_str("## Key Findings\n\n");
        for finding in &paper.key_findings {
            output.push_str(&format!("- {finding}\n"));
        }
        output.push('\n');
    }

    for (heading, body) in [
        ("Methodology", &paper.methodology),
        ("Results", &paper.results),
        ("Conclusions", &paper.conclusions),
    ] {
        if let Some(body) = body {
            output.push_str(&format!("## {heading}\n\n{body}\n\n"));
        }
    }

    if !diagrams.is_empty() {
        output.push_str("## Figures\n\n");
        for diagram in diagrams {
            output.push_str(&format!(
                "- **{}** ({}): {}\n",
                diagram.title, diagram.kind, diagram.description
            ));
        }
    }

    output
}

/// Format a summary result. Fallback results render the same way.
#[must_use]
pub fn format_summary_markdown(paper: &Paper, result: &SummaryResult) -> String {
    let mut output = format!("# AI Summary: {}\n\n", paper.title);

    output.push_str(&format!("{}\n\n", result.summary));

    output.push_str("## Key Points\n\n");
    for point in &result.key_points {
        output.push_str(&format!("- {point}\n"));
    }

    if !result.diagrams.is_empty() {
        output.push_str("\n## Important Diagrams\n\n");
        for (i, diagram) in result.diagrams.iter().enumerate() {
            output.push_str(&format!("### {}. {} ({})\n\n", i + 1, diagram.title, diagram.kind));
            if !diagram.description.is_empty() {
                output.push_str(&format!("{}\n\n", diagram.description));
            }
            if !diagram.importance.is_empty() {
                output.push_str(&format!("**Why it matters**: {}\n\n", diagram.importance));
            }
            if !diagram.image_url.is_empty() {
                output.push_str(&format!("![{}]({})\n\n", diagram.title, diagram.image_url));
            }
        }
    }

    output
}

/// Format the comparison for a view mode and focus.
///
/// `ComparisonFocus::All` renders the mode's view plus the analysis block.
/// Any other focus renders only the matching section.
#[must_use]
pub fn format_comparison_markdown(
    selection: &ComparisonSelection,
    mode: ComparisonMode,
    focus: ComparisonFocus,
    current_year: i32,
) -> String {
    let papers = selection.papers();
    if papers.is_empty() {
        return "No papers selected for comparison.".to_string();
    }

    let mut output = format!("# Paper Comparison ({} papers)\n\n", papers.len());

    match focus {
        ComparisonFocus::All => {
            output.push_str(&match mode {
                ComparisonMode::Overview => overview_section(selection),
                ComparisonMode::Methodology => methodology_section(papers),
                ComparisonMode::Results => results_section(papers),
                ComparisonMode::Conclusions => conclusions_section(selection),
            });
            if papers.len() >= 2 {
                output.push_str(&analysis_section(papers, current_year));
            }
        }
        ComparisonFocus::Methodology => output.push_str(&methodology_section(papers)),
        ComparisonFocus::Results => output.push_str(&results_section(papers)),
        ComparisonFocus::Conclusions => output.push_str(&conclusions_section(selection)),
        ComparisonFocus::Metrics => {
            output.push_str(&metric_table_markdown(papers));
            output.push_str(&analysis_section(papers, current_year));
        }
    }

    if !selection.highlights().is_empty() {
        output.push_str("## Highlighted Differences\n\n");
        for label in selection.highlights() {
            output.push_str(&format!("- {label}\n"));
        }
    }

    output
}

fn notes(selection: &ComparisonSelection, paper_id: &str, section: ComparisonSection) -> String {
    selection
        .annotation(paper_id, section)
        .map(|note| format!("> **Note**: {note}\n\n"))
        .unwrap_or_default()
}

fn overview_section(selection: &ComparisonSelection) -> String {
    let mut output = String::from("## Overview\n\n");
    for paper in selection.papers() {
        output.push_str(&format!("### {}\n\n", paper.title));
        output.push_str(&format!(
            "{} · {} · {} · {} citations\n\n",
            paper.author_names(),
            paper.venue,
            paper.year(),
            paper.citations
        ));
        output.push_str(&format!("{}\n\n", paper.abstract_text));
        output.push_str(&notes(selection, &paper.id, ComparisonSection::Overview));
    }
    output
}

fn methodology_section(papers: &[Paper]) -> String {
    let mut output = String::from("## Methodology\n\n");
    output.push_str(&table_header("Aspect", papers));

    let rows: [(&str, fn(&Paper) -> String); 3] = [
        ("Approach", |p| p.methodology.clone().unwrap_or_default()),
        ("Sample Size", |p| p.sample_size.clone().unwrap_or_default()),
        ("Venue", |p| p.venue.clone()),
    ];
    for (label, cell) in rows {
        let cells: Vec<String> = papers.iter().map(cell).collect();
        output.push_str(&format!("| {label} | {} |\n", cells.join(" | ")));
    }
    output.push('\n');
    output
}

fn results_section(papers: &[Paper]) -> String {
    let mut output = metric_table_markdown(papers);
    output.push_str("## Key Findings\n\n");
    for paper in papers {
        output.push_str(&format!("### {}\n\n", paper.title));
        for finding in &paper.key_findings {
            output.push_str(&format!("- {finding}\n"));
        }
        output.push('\n');
    }
    output
}

fn conclusions_section(selection: &ComparisonSelection) -> String {
    let mut output = String::from("## Conclusions\n\n");
    for paper in selection.papers() {
        output.push_str(&format!("### {}\n\n", paper.title));
        output.push_str(&format!("{}\n\n", paper.conclusions.as_deref().unwrap_or("_No conclusions recorded._")));
        output.push_str(&format!("{} · {} · {} citations\n\n", paper.venue, paper.year(), paper.citations));
        output.push_str(&notes(selection, &paper.id, ComparisonSection::Conclusions));
    }
    output
}

fn table_header(first: &str, papers: &[Paper]) -> String {
    let titles: Vec<String> = papers.iter().map(|p| p.short_title(usize::MAX)).collect();
    format!(
        "| {first} | {} |\n|---|{}\n",
        titles.join(" | "),
        "---|".repeat(papers.len())
    )
}

fn metric_table_markdown(papers: &[Paper]) -> String {
    let table = metric_table(papers);
    let mut output = String::from("## Performance Metrics\n\n");
    output.push_str(&format!(
        "| Metric | {} |\n|---|{}\n",
        table.columns.join(" | "),
        "---|".repeat(table.columns.len())
    ));
    for row in &table.rows {
        let cells: Vec<String> = row
            .values
            .iter()
            .map(|v| v.map_or_else(|| "n/a".to_string(), |v| format!("{v}%")))
            .collect();
        output.push_str(&format!("| {} | {} |\n", row.metric.label(), cells.join(" | ")));
    }
    output.push('\n');
    output
}

fn analysis_section(papers: &[Paper], current_year: i32) -> String {
    let mut output = String::new();

    if let Some(stats) = aggregate_stats(papers) {
        output.push_str("## Summary Statistics\n\n");
        let percent = |v: Option<f64>| v.map_or_else(|| "n/a".to_string(), |v| format!("{}%", v.round()));
        output.push_str(&format!("- **Avg. Accuracy**: {}\n", percent(stats.avg_accuracy)));
        output.push_str(&format!("- **Avg. Citations**: {}\n", stats.avg_citations.round()));
        output.push_str(&format!("- **Avg. Year**: {}\n", stats.avg_year.round()));
        output.push_str(&format!("- **Avg. F1 Score**: {}\n\n", percent(stats.avg_f1)));
    }

    output.push_str("## Citation Timeline\n\n");
    for entry in citation_timeline(papers, current_year) {
        output.push_str(&format!(
            "- {} **{}**: {} citations ({} per year)\n",
            entry.year, entry.label, entry.citations, entry.citations_per_year
        ));
    }
    output.push('\n');
    output
}

/// Format saved searches.
#[must_use]
pub fn format_saved_searches_markdown(searches: &[SavedSearch]) -> String {
    if searches.is_empty() {
        return "No saved searches.".to_string();
    }

    let mut output = format!("# Saved Searches ({})\n\n", searches.len());
    for search in searches {
        output.push_str(&format!("## {}\n\n", search.name));
        output.push_str(&format!(
            "**ID**: `{}` | **Results**: {} | **Last used**: {}\n\n",
            search.id, search.result_count, search.last_used
        ));
        let chips = crate::search::active_filters(&search.filters);
        if !chips.is_empty() {
            let labels: Vec<&str> = chips.iter().map(|c| c.label.as_str()).collect();
            output.push_str(&format!("{}\n\n", labels.join(" · ")));
        }
    }
    output
}

/// Format the active filter chips and result count.
#[must_use]
pub fn format_active_filters_markdown(chips: &[ActiveFilter], result_count: usize) -> String {
    let mut output = format!("**Results**: {result_count}\n\n");
    if chips.is_empty() {
        output.push_str("No active filters.\n");
        return output;
    }
    output.push_str(&format!("**Active filters** ({}):\n\n", chips.len()));
    for chip in chips {
        output.push_str(&format!("- {}\n", chip.label));
    }
    output
}

/// Format navigation preferences.
#[must_use]
pub fn format_preferences_markdown(prefs: &NavigationPreferences, sidebar_open: bool) -> String {
    let mut output = String::from("# Navigation Preferences\n\n");
    output.push_str(&format!(
        "**Sidebar**: {} ({})\n\n",
        if prefs.sidebar_collapsed { "collapsed" } else { "expanded" },
        if sidebar_open { "open" } else { "closed" }
    ));

    output.push_str("## Recent Routes\n\n");
    if prefs.recent_routes.is_empty() {
        output.push_str("_None yet._\n");
    }
    for path in &prefs.recent_routes {
        output.push_str(&format!("- {} (`{path}`)\n", Route::parse(path).title()));
    }

    output.push_str("\n## Search History\n\n");
    if prefs.search_history.is_empty() {
        output.push_str("_None yet._\n");
    }
    for query in &prefs.search_history {
        output.push_str(&format!("- {query}\n"));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn selection_of(papers: Vec<Paper>) -> ComparisonSelection {
        let mut selection = ComparisonSelection::new();
        for paper in papers {
            selection.add(paper);
        }
        selection
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(format_papers_markdown(&[]), "No papers found.");
    }

    #[test]
    fn test_paper_list_entry() {
        let output = format_papers_markdown(&catalog::discovery_papers()[..1]);
        assert!(output.starts_with("# Papers (1 results)"));
        assert!(output.contains("**ID**: `disc_1`"));
        assert!(output.contains("Open Access · Code Available"));
        assert!(output.contains("..."));
    }

    #[test]
    fn test_summary_fallback_has_same_shape() {
        let paper = catalog::showcase_paper();
        let output = format_summary_markdown(&paper, &SummaryResult::fallback());
        assert!(output.contains(crate::models::FALLBACK_SUMMARY));
        assert!(output.contains("## Key Points\n\n- Error generating summary"));
        assert!(!output.contains("Important Diagrams"));
    }

    #[test]
    fn test_comparison_overview_shows_notes_and_analysis() {
        let mut selection = selection_of(catalog::comparison_papers());
        selection.annotate("paper_2", ComparisonSection::Overview, "Check qubit limits");
        selection.toggle_highlight("Sample size");

        let output = format_comparison_markdown(&selection, ComparisonMode::Overview, ComparisonFocus::All, 2024);
        assert!(output.contains("> **Note**: Check qubit limits"));
        assert!(output.contains("## Summary Statistics"));
        assert!(output.contains("- **Avg. Citations**: 266"));
        assert!(output.contains("- 2023 **Sustainabl**: 267 citations (134 per year)"));
        assert!(output.contains("## Highlighted Differences\n\n- Sample size"));
    }

    #[test]
    fn test_comparison_focus_narrows() {
        let selection = selection_of(catalog::comparison_papers());
        let output = format_comparison_markdown(
            &selection,
            ComparisonMode::Overview,
            ComparisonFocus::Methodology,
            2024,
        );
        assert!(output.contains("| Sample Size | 150 studies analyzed |"));
        assert!(!output.contains("## Overview"));
        assert!(!output.contains("## Summary Statistics"));

        let metrics = format_comparison_markdown(&selection, ComparisonMode::Conclusions, ComparisonFocus::Metrics, 2024);
        assert!(metrics.contains("| F1 Score | 92.6% | 98.9% | 87.4% |"));
        assert!(!metrics.contains("## Conclusions"));
    }

    #[test]
    fn test_single_paper_has_no_analysis() {
        let selection = selection_of(catalog::comparison_papers().into_iter().take(1).collect());
        let output = format_comparison_markdown(&selection, ComparisonMode::Results, ComparisonFocus::All, 2024);
        assert!(output.contains("## Performance Metrics"));
        assert!(!output.contains("## Citation Timeline"));
    }

    #[test]
    fn test_preferences_titles() {
        let prefs = NavigationPreferences {
            recent_routes: vec!["/advanced-search-and-filter-interface".to_string(), "/x".to_string()],
            ..Default::default()
        };
        let output = format_preferences_markdown(&prefs, false);
        assert!(output.contains("- Advanced Search & Filter Interface (`/advanced-search-and-filter-interface`)"));
        assert!(output.contains("- Academic Research Platform (`/x`)"));
    }
}
