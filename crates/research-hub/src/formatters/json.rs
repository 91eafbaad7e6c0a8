//! JSON output formatting with token efficiency.

use serde_json::{Value, json};

use crate::models::Paper;

/// Create a compact paper representation for JSON output.
///
/// Long text sections are left out; `paper_details` serves them.
#[must_use]
pub fn compact_paper(paper: &Paper) -> Value {
    let mut obj = json!({
        "id": paper.id,
        "title": paper.title,
        "authors": paper.authors,
        "venue": paper.venue,
        "published": paper.published.format("%Y-%m-%d").to_string(),
        "category": paper.category,
        "citations": paper.citations,
    });

    if paper.rating > 0.0 {
        obj["rating"] = json!(paper.rating);
    }

    if let Some(impact) = paper.impact_factor {
        obj["impactFactor"] = json!(impact);
    }

    if !paper.tags.is_empty() {
        obj["tags"] = json!(paper.tags);
    }

    if let Some(summary) = paper.quick_summary.as_ref().or(paper.tldr.as_ref()) {
        obj["summary"] = json!(summary);
    }

    if let Some(doi) = &paper.doi {
        obj["doi"] = json!(doi);
    }

    if let Some(pdf) = &paper.pdf_url {
        obj["pdf"] = json!(pdf);
    }

    obj
}

/// Compact representations of `papers` with a result count.
#[must_use]
pub fn compact_papers(papers: &[Paper]) -> Value {
    json!({
        "total": papers.len(),
        "papers": papers.iter().map(compact_paper).collect::<Vec<_>>(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn test_compact_paper() {
        let paper = catalog::search_papers().remove(0);
        let compact = compact_paper(&paper);

        assert_eq!(compact["id"], "search_1");
        assert_eq!(compact["published"], "2024-01-15");
        assert_eq!(compact["citations"], 245);
        assert_eq!(compact["impactFactor"], 4.8);
        assert!(compact.get("rating").is_none());
        assert!(compact.get("abstract").is_none());
    }

    #[test]
    fn test_compact_papers_total() {
        let value = compact_papers(&catalog::discovery_papers());
        assert_eq!(value["total"], 6);
        assert_eq!(value["papers"][5]["summary"].as_str().map(|s| s.starts_with("AI reduces")), Some(true));
    }
}
