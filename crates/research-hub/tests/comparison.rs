//! Comparison engine tests.

use proptest::prelude::*;

use research_hub::catalog::{self, Catalog};
use research_hub::compare::{
    AddOutcome, ComparisonSelection, MAX_COMPARED, aggregate_stats, citation_timeline,
    citations_per_year, metric_table,
};
use research_hub::formatters::export;
use research_hub::models::{ComparisonSection, ExportFormat, Paper};

fn every_paper() -> Vec<Paper> {
    let catalog = Catalog::mock();
    let mut papers = vec![catalog.showcase];
    papers.extend(catalog.discovery);
    papers.extend(catalog.search);
    papers.extend(catalog.comparison);
    papers
}

#[test]
fn test_fifth_paper_is_rejected() {
    let papers = every_paper();
    let mut selection = ComparisonSelection::new();

    for paper in papers.iter().take(MAX_COMPARED) {
        assert_eq!(selection.add(paper.clone()), AddOutcome::Added);
    }
    assert!(selection.is_full());
    assert_eq!(selection.add(papers[MAX_COMPARED].clone()), AddOutcome::Full);
    assert_eq!(selection.len(), MAX_COMPARED);

    // Freeing a slot lets the rejected paper in.
    assert!(selection.remove(&papers[0].id));
    assert_eq!(selection.add(papers[MAX_COMPARED].clone()), AddOutcome::Added);
}

#[test]
fn test_duplicate_reported_even_when_full() {
    let papers = every_paper();
    let mut selection = ComparisonSelection::new();
    for paper in papers.iter().take(MAX_COMPARED) {
        selection.add(paper.clone());
    }

    assert_eq!(selection.add(papers[1].clone()), AddOutcome::AlreadySelected);
}

#[test]
fn test_mock_comparison_statistics() {
    let papers = catalog::comparison_papers();

    let stats = aggregate_stats(&papers).unwrap();
    assert!((stats.avg_citations - 266.0).abs() < 1e-9);

    let table = metric_table(&papers);
    assert_eq!(table.columns, vec!["Deep Learn", "Quantum Co", "Sustainabl"]);
    assert_eq!(table.rows.len(), 4);
    assert!(table.rows.iter().all(|row| row.values.iter().all(Option::is_some)));

    // paper_3: 267 citations over 2023..=2025.
    let timeline = citation_timeline(&papers, 2025);
    assert_eq!(timeline[0].paper_id, "paper_3");
    assert_eq!(timeline[0].citations_per_year, 89);

    let last_year = citation_timeline(&papers, 2024);
    assert_eq!(last_year[0].citations_per_year, 134);
}

#[test]
fn test_citations_per_year_never_divides_by_zero() {
    assert!((citations_per_year(342, 2025, 2025) - 342.0).abs() < f64::EPSILON);
    assert!((citations_per_year(342, 2030, 2025) - 342.0).abs() < f64::EPSILON);
    assert!((citations_per_year(100, 2021, 2025) - 20.0).abs() < f64::EPSILON);
}

#[test]
fn test_annotations_follow_selection() {
    let papers = catalog::comparison_papers();
    let mut selection = ComparisonSelection::new();
    selection.add(papers[0].clone());

    assert!(selection.annotate("paper_1", ComparisonSection::Results, "strong baseline"));
    assert!(!selection.annotate("paper_2", ComparisonSection::Results, "not selected"));
    assert_eq!(selection.annotation("paper_1", ComparisonSection::Results), Some("strong baseline"));

    selection.remove("paper_1");
    selection.add(papers[0].clone());
    assert_eq!(selection.annotation("paper_1", ComparisonSection::Results), None);
}

#[test]
fn test_comparison_exports() {
    let papers = catalog::comparison_papers();
    let timestamp = chrono::DateTime::parse_from_rfc3339("2024-03-01T12:00:00Z")
        .unwrap()
        .with_timezone(&chrono::Utc);

    let csv = export::export_comparison(&papers, ExportFormat::Csv, timestamp).unwrap();
    assert_eq!(csv.lines().count(), papers.len() + 1);
    assert!(csv.starts_with(&export::COMPARISON_CSV_HEADER.join(",")));

    let json = export::export_comparison(&papers, ExportFormat::Json, timestamp).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["timestamp"], "2024-03-01T12:00:00.000Z");
    assert_eq!(value["papers"].as_array().map(Vec::len), Some(3));

    let citations = export::export_comparison(&papers, ExportFormat::Citation, timestamp).unwrap();
    assert_eq!(citations.split("\n\n").count(), 3);
}

proptest! {
    /// No sequence of adds and removes exceeds the cap or duplicates a paper.
    #[test]
    fn selection_respects_cap(ops in prop::collection::vec((any::<bool>(), 0usize..18), 0..60)) {
        let papers = every_paper();
        let mut selection = ComparisonSelection::new();

        for (add, index) in ops {
            let paper = &papers[index % papers.len()];
            if add {
                let before = selection.len();
                match selection.add(paper.clone()) {
                    AddOutcome::Added => prop_assert_eq!(selection.len(), before + 1),
                    AddOutcome::AlreadySelected | AddOutcome::Full => {
                        prop_assert_eq!(selection.len(), before);
                    }
                }
            } else {
                selection.remove(&paper.id);
            }

            prop_assert!(selection.len() <= MAX_COMPARED);
            let mut ids: Vec<&str> = selection.papers().iter().map(|p| p.id.as_str()).collect();
            ids.sort_unstable();
            ids.dedup();
            prop_assert_eq!(ids.len(), selection.len());
        }
    }
}
