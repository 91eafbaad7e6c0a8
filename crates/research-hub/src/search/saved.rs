//! Saved search book.

use chrono::NaiveDate;

use crate::catalog;
use crate::models::{FilterCriteria, SavedSearch};

/// Ordered collection of saved searches, newest first.
#[derive(Debug, Clone, Default)]
pub struct SavedSearchBook {
    searches: Vec<SavedSearch>,
}

impl SavedSearchBook {
    /// Book holding the mock saved searches.
    #[must_use]
    pub fn seeded() -> Self {
        Self { searches: catalog::saved_searches() }
    }

    /// Save a snapshot of `criteria` under `name`.
    ///
    /// A blank name saves nothing.
    pub fn save(
        &mut self,
        name: &str,
        criteria: &FilterCriteria,
        result_count: usize,
        today: NaiveDate,
    ) -> Option<&SavedSearch> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        let search = SavedSearch {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.to_string(),
            filters: criteria.clone(),
            result_count,
            last_used: today,
        };
        tracing::debug!(id = %search.id, name = %search.name, "Saved search");
        self.searches.insert(0, search);
        self.searches.first()
    }

    /// All saved searches, newest first.
    #[must_use]
    pub fn list(&self) -> &[SavedSearch] {
        &self.searches
    }

    /// Look up a saved search.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&SavedSearch> {
        self.searches.iter().find(|s| s.id == id)
    }

    /// Criteria snapshot of a saved search.
    #[must_use]
    pub fn load(&self, id: &str) -> Option<FilterCriteria> {
        self.get(id).map(|s| s.filters.clone())
    }

    /// Number of saved searches.
    #[must_use]
    pub fn len(&self) -> usize {
        self.searches.len()
    }

    /// True when nothing is saved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.searches.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[test]
    fn test_seeded_book() {
        let book = SavedSearchBook::seeded();
        assert_eq!(book.len(), 2);
        assert_eq!(book.get("2").map(|s| s.name.as_str()), Some("Quantum Computing Research"));
    }

    #[test]
    fn test_save_prepends_snapshot() {
        let mut book = SavedSearchBook::seeded();
        let mut criteria = FilterCriteria { keywords: "battery".into(), ..Default::default() };

        let id = book.save("  Storage  ", &criteria, 1, today()).map(|s| s.id.clone()).unwrap();
        criteria.keywords = "changed".into();

        assert_eq!(book.len(), 3);
        let first = &book.list()[0];
        assert_eq!(first.id, id);
        assert_eq!(first.name, "Storage");
        assert_eq!(first.last_used, today());
        assert_eq!(book.load(&id).map(|c| c.keywords), Some("battery".to_string()));
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let mut book = SavedSearchBook::default();
        assert!(book.save("   ", &FilterCriteria::default(), 0, today()).is_none());
        assert!(book.is_empty());
    }

    #[test]
    fn test_load_unknown_id() {
        assert!(SavedSearchBook::seeded().load("nope").is_none());
    }
}
