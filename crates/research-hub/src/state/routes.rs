//! Application routes.

use url::{Url, form_urlencoded};

use crate::catalog::SHOWCASE_ID;

/// Title shown for paths outside the known route table.
pub const DEFAULT_TITLE: &str = "Academic Research Platform";

/// A navigable view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Paper discovery dashboard (also served at `/`).
    Dashboard,
    /// Advanced search and filter interface.
    AdvancedSearch,
    /// Detailed analysis of one paper.
    PaperDetail {
        /// Paper ID from the `id` query parameter.
        id: String,
    },
    /// Paper comparison and analysis tools.
    Comparison,
    /// User profile and research preferences.
    Profile,
    /// Any other path.
    NotFound(String),
}

impl Route {
    /// Parse a path with optional query string.
    #[must_use]
    pub fn parse(path: &str) -> Self {
        // Relative paths are resolved against a dummy origin to reuse `url`'s query parsing.
        let Ok(url) = Url::parse("http://local").and_then(|base| base.join(path)) else {
            return Self::NotFound(path.to_string());
        };

        match url.path().trim_end_matches('/') {
            "" | "/research-paper-discovery-dashboard" => Self::Dashboard,
            "/advanced-search-and-filter-interface" => Self::AdvancedSearch,
            "/detailed-paper-analysis-view" => {
                let id = url
                    .query_pairs()
                    .find(|(k, _)| k == "id")
                    .map(|(_, v)| v.into_owned())
                    .filter(|v| !v.is_empty())
                    .unwrap_or_else(|| SHOWCASE_ID.to_string());
                Self::PaperDetail { id }
            }
            "/paper-comparison-and-analysis-tools" => Self::Comparison,
            "/user-profile-and-research-preferences" => Self::Profile,
            _ => Self::NotFound(path.to_string()),
        }
    }

    /// Detail route for `id`.
    #[must_use]
    pub fn paper(id: impl Into<String>) -> Self {
        Self::PaperDetail { id: id.into() }
    }

    /// Canonical path, including the `id` query for detail routes.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Dashboard => "/research-paper-discovery-dashboard".to_string(),
            Self::AdvancedSearch => "/advanced-search-and-filter-interface".to_string(),
            Self::PaperDetail { id } => format!(
                "/detailed-paper-analysis-view?id={}",
                form_urlencoded::byte_serialize(id.as_bytes()).collect::<String>()
            ),
            Self::Comparison => "/paper-comparison-and-analysis-tools".to_string(),
            Self::Profile => "/user-profile-and-research-preferences".to_string(),
            Self::NotFound(path) => path.clone(),
        }
    }

    /// Path without the query string.
    #[must_use]
    pub fn pathname(&self) -> String {
        let path = self.path();
        path.split('?').next().unwrap_or_default().to_string()
    }

    /// Page title.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::Dashboard => "Research Paper Discovery Dashboard",
            Self::AdvancedSearch => "Advanced Search & Filter Interface",
            Self::PaperDetail { .. } => "Detailed Paper Analysis View",
            Self::Comparison => "Paper Comparison & Analysis Tools",
            Self::Profile => "User Profile & Research Preferences",
            Self::NotFound(_) => DEFAULT_TITLE,
        }
    }
}
