//! Durable user preferences: navigation history and bookmarks.

use serde::{Deserialize, Serialize};

use super::store::KeyValueStore;
use crate::config::storage;
use crate::error::StoreResult;

/// Navigation preferences, persisted as a single JSON blob.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationPreferences {
    /// Sidebar collapsed on wide layouts.
    #[serde(default)]
    pub sidebar_collapsed: bool,
    /// Recent search queries, newest first.
    #[serde(default)]
    pub search_history: Vec<String>,
    /// Recently visited route paths, newest first.
    #[serde(default)]
    pub recent_routes: Vec<String>,
}

/// Preferences backed by an injected [`KeyValueStore`].
pub struct PreferenceStore {
    store: Box<dyn KeyValueStore>,
    navigation: NavigationPreferences,
}

impl PreferenceStore {
    /// Load navigation preferences from `store`.
    ///
    /// Unparseable data is logged and replaced by the defaults.
    #[must_use]
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        let navigation = match store.get(storage::NAVIGATION_KEY) {
            None => NavigationPreferences::default(),
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|err| {
                tracing::warn!(error = %err, "Failed to parse navigation preferences; using defaults");
                NavigationPreferences::default()
            }),
        };
        Self { store, navigation }
    }

    /// Current navigation preferences.
    #[must_use]
    pub fn navigation(&self) -> &NavigationPreferences {
        &self.navigation
    }

    /// Move `path` to the front of the recent routes.
    pub fn record_route(&mut self, path: &str) -> StoreResult<()> {
        self.update_navigation(|nav| {
            push_front_capped(&mut nav.recent_routes, path, storage::RECENT_ROUTES_CAP);
        })
    }

    /// Move `query` to the front of the search history. Blank queries are ignored.
    pub fn record_search(&mut self, query: &str) -> StoreResult<()> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(());
        }
        self.update_navigation(|nav| {
            push_front_capped(&mut nav.search_history, query, storage::SEARCH_HISTORY_CAP);
        })
    }

    /// Forget every recorded search.
    pub fn clear_search_history(&mut self) -> StoreResult<()> {
        self.update_navigation(|nav| nav.search_history.clear())
    }

    /// Set the collapsed-sidebar preference.
    pub fn set_sidebar_collapsed(&mut self, collapsed: bool) -> StoreResult<()> {
        self.update_navigation(|nav| nav.sidebar_collapsed = collapsed)
    }

    /// Whether `paper_id` is bookmarked.
    #[must_use]
    pub fn is_bookmarked(&self, paper_id: &str) -> bool {
        self.store.get(&bookmark_key(paper_id)).is_some_and(|v| v == "true")
    }

    /// Flip the bookmark flag of `paper_id`, returning the new state.
    pub fn toggle_bookmark(&mut self, paper_id: &str) -> StoreResult<bool> {
        let bookmarked = !self.is_bookmarked(paper_id);
        self.store.set(&bookmark_key(paper_id), bookmarked.to_string())?;
        Ok(bookmarked)
    }

    /// Apply `change` to a copy, persist it, and keep it only if the write succeeded.
    fn update_navigation(&mut self, change: impl FnOnce(&mut NavigationPreferences)) -> StoreResult<()> {
        let mut next = self.navigation.clone();
        change(&mut next);
        let blob = serde_json::to_string(&next)?;
        self.store.set(storage::NAVIGATION_KEY, blob)?;
        self.navigation = next;
        Ok(())
    }
}

impl std::fmt::Debug for PreferenceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreferenceStore").field("navigation", &self.navigation).finish_non_exhaustive()
    }
}

fn bookmark_key(paper_id: &str) -> String {
    format!("{}{paper_id}", storage::BOOKMARK_PREFIX)
}

fn push_front_capped(items: &mut Vec<String>, item: &str, cap: usize) {
    items.retain(|existing| existing != item);
    items.insert(0, item.to_string());
    items.truncate(cap);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::MemoryStore;

    fn fresh() -> PreferenceStore {
        PreferenceStore::new(Box::new(MemoryStore::new()))
    }

    #[test]
    fn test_recent_routes_dedupe_and_cap() {
        let mut prefs = fresh();
        for path in ["/a", "/b", "/c", "/d", "/e", "/f"] {
            prefs.record_route(path).unwrap();
        }
        prefs.record_route("/d").unwrap();

        assert_eq!(prefs.navigation().recent_routes, vec!["/d", "/f", "/e", "/c", "/b"]);
    }

    #[test]
    fn test_search_history_ignores_blank_and_caps() {
        let mut prefs = fresh();
        prefs.record_search("   ").unwrap();
        assert!(prefs.navigation().search_history.is_empty());

        for n in 0..12 {
            prefs.record_search(&format!("query {n}")).unwrap();
        }
        prefs.record_search(" query 5 ").unwrap();

        let history = &prefs.navigation().search_history;
        assert_eq!(history.len(), 10);
        assert_eq!(history[0], "query 5");
        assert_eq!(history.iter().filter(|q| *q == "query 5").count(), 1);
    }

    #[test]
    fn test_corrupt_blob_falls_back_to_defaults() {
        let mut store = MemoryStore::new();
        store.set(storage::NAVIGATION_KEY, "{not json".into()).unwrap();

        let prefs = PreferenceStore::new(Box::new(store));
        assert_eq!(prefs.navigation(), &NavigationPreferences::default());
    }

    #[test]
    fn test_blob_wire_format() {
        let mut store = MemoryStore::new();
        store
            .set(
                storage::NAVIGATION_KEY,
                r#"{"sidebarCollapsed":true,"searchHistory":["q"],"recentRoutes":["/"]}"#.into(),
            )
            .unwrap();

        let prefs = PreferenceStore::new(Box::new(store));
        assert!(prefs.navigation().sidebar_collapsed);
        assert_eq!(prefs.navigation().search_history, vec!["q"]);
    }

    #[test]
    fn test_bookmark_toggle() {
        let mut prefs = fresh();
        assert!(!prefs.is_bookmarked("1"));
        assert!(prefs.toggle_bookmark("1").unwrap());
        assert!(prefs.is_bookmarked("1"));
        assert!(!prefs.toggle_bookmark("1").unwrap());
        assert!(!prefs.is_bookmarked("1"));
    }
}
