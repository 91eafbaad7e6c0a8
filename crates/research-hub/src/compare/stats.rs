//! Derived comparison statistics.

use serde::Serialize;

use crate::models::{Metric, Paper};

/// Characters kept from a title for a column or chart label.
pub const LABEL_CHARS: usize = 10;

/// Metric values laid out as rows of metrics by columns of papers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricTable {
    /// Short label per paper column.
    pub columns: Vec<String>,
    /// One row per metric in [`Metric::ALL`] order.
    pub rows: Vec<MetricRow>,
}

/// Values of a single metric across papers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricRow {
    /// Metric kind.
    pub metric: Metric,
    /// Value per column; `None` when the paper has no metrics.
    pub values: Vec<Option<f64>>,
}

/// Build the metric table for `papers`.
#[must_use]
pub fn metric_table(papers: &[Paper]) -> MetricTable {
    MetricTable {
        columns: papers.iter().map(|p| p.short_title(LABEL_CHARS)).collect(),
        rows: Metric::ALL
            .into_iter()
            .map(|metric| MetricRow {
                metric,
                values: papers.iter().map(|p| p.metric(metric)).collect(),
            })
            .collect(),
    }
}

/// Arithmetic means over the compared papers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateStats {
    /// Mean accuracy over papers with metrics.
    pub avg_accuracy: Option<f64>,
    /// Mean citation count.
    pub avg_citations: f64,
    /// Mean publication year.
    pub avg_year: f64,
    /// Mean F1 score over papers with metrics.
    pub avg_f1: Option<f64>,
}

/// Means of accuracy, citations, year and F1. `None` for no papers.
#[must_use]
pub fn aggregate_stats(papers: &[Paper]) -> Option<AggregateStats> {
    if papers.is_empty() {
        return None;
    }
    let count = papers.len() as f64;

    Some(AggregateStats {
        avg_accuracy: mean(papers.iter().filter_map(|p| p.metric(Metric::Accuracy))),
        avg_citations: papers.iter().map(|p| f64::from(p.citations)).sum::<f64>() / count,
        avg_year: papers.iter().map(|p| f64::from(p.year())).sum::<f64>() / count,
        avg_f1: mean(papers.iter().filter_map(|p| p.metric(Metric::F1))),
    })
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0_u32), |(sum, n), v| (sum + v, n + 1));
    (count > 0).then(|| sum / f64::from(count))
}

/// Citations divided by the paper's age in years, counting the current year.
#[must_use]
pub fn citations_per_year(citations: u32, year: i32, current_year: i32) -> f64 {
    let years = (current_year - year + 1).max(1);
    f64::from(citations) / f64::from(years)
}

/// One point of the citation timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
    /// Paper ID.
    pub paper_id: String,
    /// Short title.
    pub label: String,
    /// Publication year.
    pub year: i32,
    /// Total citations.
    pub citations: u32,
    /// Citations per year, rounded.
    pub citations_per_year: u32,
}

/// Papers ordered by publication year, oldest first.
#[must_use]
pub fn citation_timeline(papers: &[Paper], current_year: i32) -> Vec<TimelineEntry> {
    let mut entries: Vec<TimelineEntry> = papers
        .iter()
        .map(|p| TimelineEntry {
            paper_id: p.id.clone(),
            label: p.short_title(LABEL_CHARS),
            year: p.year(),
            citations: p.citations,
            citations_per_year: round_count(citations_per_year(p.citations, p.year(), current_year)),
        })
        .collect();
    entries.sort_by_key(|e| e.year);
    entries
}

fn round_count(value: f64) -> u32 {
    value.round().max(0.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn test_citations_per_year() {
        assert!((citations_per_year(342, 2024, 2024) - 342.0).abs() < f64::EPSILON);
        assert!((citations_per_year(267, 2023, 2024) - 133.5).abs() < f64::EPSILON);
        // Future-dated papers clamp to one year.
        assert!((citations_per_year(10, 2030, 2024) - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_timeline_sorted_by_year() {
        let timeline = citation_timeline(&catalog::comparison_papers(), 2024);
        let years: Vec<i32> = timeline.iter().map(|e| e.year).collect();
        assert_eq!(years, vec![2023, 2024, 2024]);
        assert_eq!(timeline[0].paper_id, "paper_3");
        assert_eq!(timeline[0].citations_per_year, 134);
        assert_eq!(timeline[1].paper_id, "paper_1");
    }

    #[test]
    fn test_metric_table_layout() {
        let mut papers = catalog::comparison_papers();
        papers.truncate(2);
        papers.push(catalog::showcase_paper());

        let table = metric_table(&papers);
        assert_eq!(table.columns, vec!["Deep Learn", "Quantum Co", "Attention "]);
        assert_eq!(table.rows.len(), 4);
        assert_eq!(table.rows[3].metric, Metric::F1);
        assert_eq!(table.rows[0].values, vec![Some(94.2), Some(99.9), None]);
    }

    #[test]
    fn test_aggregate_stats() {
        let stats = aggregate_stats(&catalog::comparison_papers()).unwrap();
        assert!((stats.avg_citations - 266.0).abs() < 1e-9);
        assert_eq!(stats.avg_year.round(), 2024.0);
        assert_eq!(stats.avg_accuracy.map(f64::round), Some(94.0));
        assert_eq!(stats.avg_f1.map(f64::round), Some(93.0));

        assert!(aggregate_stats(&[]).is_none());
    }

    #[test]
    fn test_aggregate_without_metrics() {
        let stats = aggregate_stats(&[catalog::showcase_paper()]).unwrap();
        assert_eq!(stats.avg_accuracy, None);
        assert_eq!(stats.avg_year, 2017.0);
    }
}
