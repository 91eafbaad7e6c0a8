//! Presentation-layer state and persistence.
//!
//! Ephemeral state (sidebar, summary panel) lives only in memory. Preferences
//! are written through a [`KeyValueStore`] on every change.

mod preferences;
mod routes;
mod store;
mod summary_panel;

pub use preferences::{NavigationPreferences, PreferenceStore};
pub use routes::{DEFAULT_TITLE, Route};
pub use store::{FileStore, KeyValueStore, MemoryStore};
pub use summary_panel::{PanelStatus, RequestTicket, SummaryPanel};

/// Open/closed flag of the navigation sidebar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SidebarState {
    open: bool,
}

impl SidebarState {
    /// Flip the sidebar, returning whether it is now open.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Close the sidebar.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Whether the sidebar is open.
    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sidebar_toggle_and_close() {
        let mut sidebar = SidebarState::default();
        assert!(sidebar.toggle());
        assert!(!sidebar.toggle());
        sidebar.toggle();
        sidebar.close();
        assert!(!sidebar.is_open());
    }
}
