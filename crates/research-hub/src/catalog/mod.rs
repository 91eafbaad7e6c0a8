//! In-memory mock catalog.
//!
//! Every record is literal data; nothing here is ever mutated after construction.

mod papers;

pub use papers::{
    comparison_papers, discovery_papers, saved_searches, search_papers, showcase_diagrams,
    showcase_paper,
};

use crate::models::{Diagram, Paper};

/// ID of the paper shown when the detail view gets no `id`.
pub const SHOWCASE_ID: &str = "1";

/// Option lists offered by the advanced search form.
pub mod facets {
    /// Selectable categories.
    pub const CATEGORIES: &[&str] = &[
        "Machine Learning",
        "Artificial Intelligence",
        "Computer Science",
        "Quantum Computing",
        "Energy Systems",
        "Biotechnology",
        "Materials Science",
        "Environmental Science",
        "Physics",
        "Chemistry",
        "Mathematics",
        "Engineering",
    ];

    /// Selectable authors.
    pub const AUTHORS: &[&str] = &[
        "Dr. Sarah Chen",
        "Prof. Michael Rodriguez",
        "Dr. Emily Watson",
        "Dr. James Liu",
        "Prof. Anna Kowalski",
        "Dr. Maria Gonzalez",
        "Prof. David Kim",
        "Dr. Robert Thompson",
    ];

    /// Selectable institutions.
    pub const INSTITUTIONS: &[&str] = &[
        "MIT",
        "Stanford University",
        "Harvard University",
        "UC Berkeley",
        "Carnegie Mellon University",
        "Oxford University",
        "Cambridge University",
        "ETH Zurich",
    ];

    /// Selectable publication venues.
    pub const PUBLICATIONS: &[&str] = &[
        "Nature",
        "Science",
        "Cell",
        "Journal of Artificial Intelligence Research",
        "Nature Quantum Information",
        "Energy & Environmental Science",
        "Physical Review Letters",
        "IEEE Transactions",
    ];
}

/// All mock datasets bundled together.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Dashboard discovery set.
    pub discovery: Vec<Paper>,
    /// Advanced search set.
    pub search: Vec<Paper>,
    /// Comparison tool set.
    pub comparison: Vec<Paper>,
    /// Detail view paper.
    pub showcase: Paper,
    /// Diagrams of the detail view paper.
    pub showcase_diagrams: Vec<Diagram>,
}

impl Catalog {
    /// Build the mock catalog.
    #[must_use]
    pub fn mock() -> Self {
        Self {
            discovery: discovery_papers(),
            search: search_papers(),
            comparison: comparison_papers(),
            showcase: showcase_paper(),
            showcase_diagrams: showcase_diagrams(),
        }
    }

    /// Find a paper by ID across every dataset.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Paper> {
        std::iter::once(&self.showcase)
            .chain(&self.discovery)
            .chain(&self.search)
            .chain(&self.comparison)
            .find(|p| p.id == id)
    }

    /// Local diagrams held for a paper.
    #[must_use]
    pub fn diagrams_for(&self, id: &str) -> &[Diagram] {
        if id == self.showcase.id { self.showcase_diagrams.as_slice() } else { &[] }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::mock()
    }
}
