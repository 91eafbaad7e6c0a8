//! Side-by-side comparison of up to four papers.

mod stats;

pub use stats::{
    AggregateStats, MetricRow, MetricTable, TimelineEntry, aggregate_stats, citation_timeline,
    citations_per_year, metric_table,
};

use std::collections::BTreeMap;

use crate::models::{ComparisonSection, Paper};

/// Maximum number of papers compared at once.
pub const MAX_COMPARED: usize = 4;

/// Result of [`ComparisonSelection::add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The paper joined the selection.
    Added,
    /// The paper was already selected; nothing changed.
    AlreadySelected,
    /// The selection holds [`MAX_COMPARED`] papers; nothing changed.
    Full,
}

/// Selected papers with their per-section notes and highlighted differences.
#[derive(Debug, Clone, Default)]
pub struct ComparisonSelection {
    papers: Vec<Paper>,
    annotations: BTreeMap<(String, ComparisonSection), String>,
    highlights: Vec<String>,
}

impl ComparisonSelection {
    /// Empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a paper unless it is already selected or the selection is full.
    pub fn add(&mut self, paper: Paper) -> AddOutcome {
        if self.contains(&paper.id) {
            return AddOutcome::AlreadySelected;
        }
        if self.papers.len() >= MAX_COMPARED {
            return AddOutcome::Full;
        }
        self.papers.push(paper);
        AddOutcome::Added
    }

    /// Remove a paper and all of its notes. Returns whether it was selected.
    pub fn remove(&mut self, paper_id: &str) -> bool {
        let before = self.papers.len();
        self.papers.retain(|p| p.id != paper_id);
        self.annotations.retain(|(id, _), _| id != paper_id);
        self.papers.len() != before
    }

    /// Insert or overwrite a note. Returns `false` if the paper is not selected.
    pub fn annotate(
        &mut self,
        paper_id: &str,
        section: ComparisonSection,
        note: impl Into<String>,
    ) -> bool {
        if !self.contains(paper_id) {
            return false;
        }
        self.annotations.insert((paper_id.to_string(), section), note.into());
        true
    }

    /// Note for a paper section.
    #[must_use]
    pub fn annotation(&self, paper_id: &str, section: ComparisonSection) -> Option<&str> {
        self.annotations
            .get(&(paper_id.to_string(), section))
            .map(String::as_str)
    }

    /// Every note of a paper, in section order.
    pub fn annotations_for<'a>(
        &'a self,
        paper_id: &'a str,
    ) -> impl Iterator<Item = (ComparisonSection, &'a str)> + 'a {
        self.annotations
            .iter()
            .filter(move |((id, _), _)| id == paper_id)
            .map(|((_, section), note)| (*section, note.as_str()))
    }

    /// Add the difference label if absent, remove it otherwise.
    ///
    /// Returns whether the label is highlighted afterwards.
    pub fn toggle_highlight(&mut self, label: &str) -> bool {
        if let Some(pos) = self.highlights.iter().position(|h| h == label) {
            self.highlights.remove(pos);
            false
        } else {
            self.highlights.push(label.to_string());
            true
        }
    }

    /// Highlighted difference labels, in toggle order.
    #[must_use]
    pub fn highlights(&self) -> &[String] {
        &self.highlights
    }

    /// Selected papers, in insertion order.
    #[must_use]
    pub fn papers(&self) -> &[Paper] {
        &self.papers
    }

    /// Whether a paper is selected.
    #[must_use]
    pub fn contains(&self, paper_id: &str) -> bool {
        self.papers.iter().any(|p| p.id == paper_id)
    }

    /// Number of selected papers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.papers.len()
    }

    /// True when nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.papers.is_empty()
    }

    /// True when no more papers fit.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.papers.len() >= MAX_COMPARED
    }
}
