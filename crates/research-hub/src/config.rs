//! Configuration for the research hub server.

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

/// Completion API configuration constants.
pub mod api {
    use std::time::Duration;

    /// Base URL for the hosted chat-completion API.
    pub const BASE_URL: &str = "https://api.openai.com/v1";

    /// Model used for paper summaries.
    pub const MODEL: &str = "gpt-4o";

    /// Sampling temperature for summaries.
    pub const TEMPERATURE: f64 = 0.7;

    /// Output token cap for summaries.
    pub const MAX_TOKENS: u32 = 1000;

    /// Request timeout. A hung completion surfaces as a network failure after this.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Maximum keepalive connections.
    pub const MAX_KEEPALIVE: usize = 4;

    /// Keepalive expiry.
    pub const KEEPALIVE_EXPIRY: Duration = Duration::from_secs(30);
}

/// Persistence configuration constants.
pub mod storage {
    /// Key under which navigation preferences are stored as one JSON blob.
    pub const NAVIGATION_KEY: &str = "navigation-preferences";

    /// Prefix for per-paper bookmark flags (`bookmark_{paper id}`).
    pub const BOOKMARK_PREFIX: &str = "bookmark_";

    /// Default file name of the on-disk preference store.
    pub const DEFAULT_FILE: &str = "research-hub-preferences.json";

    /// Maximum number of recent routes kept.
    pub const RECENT_ROUTES_CAP: usize = 5;

    /// Maximum number of search history entries kept.
    pub const SEARCH_HISTORY_CAP: usize = 10;
}

/// Server configuration.
#[derive(Clone)]
pub struct Config {
    /// API key for the completion endpoint (optional; summaries fail without it).
    pub api_key: Option<String>,

    /// Base URL of the chat-completion API (for testing with mock servers).
    pub api_base_url: String,

    /// Model identifier.
    pub model: String,

    /// Sampling temperature.
    pub temperature: f64,

    /// Output token cap.
    pub max_tokens: u32,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Preference store file. `None` keeps preferences in memory only.
    pub store_path: Option<PathBuf>,
}

impl Config {
    /// Create a new configuration with optional API key and defaults elsewhere.
    #[must_use]
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            api_base_url: api::BASE_URL.to_string(),
            model: api::MODEL.to_string(),
            temperature: api::TEMPERATURE,
            max_tokens: api::MAX_TOKENS,
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
            store_path: None,
        }
    }

    /// Create a test configuration pointed at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            api_key: Some("test-key".to_string()),
            api_base_url: format!("{}/v1", base_url.trim_end_matches('/')),
            model: api::MODEL.to_string(),
            temperature: api::TEMPERATURE,
            max_tokens: api::MAX_TOKENS,
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            store_path: None,
        }
    }

    /// Create configuration from environment variables (and `.env`, if present).
    ///
    /// # Errors
    ///
    /// Returns error if `OPENAI_BASE_URL` is not a valid URL.
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = Self::new(dotenv::var("OPENAI_API_KEY").ok());

        if let Ok(base_url) = dotenv::var("OPENAI_BASE_URL") {
            config = config.with_base_url(&base_url)?;
        }
        if let Ok(model) = dotenv::var("OPENAI_MODEL") {
            config.model = model;
        }
        config.store_path = dotenv::var("RESEARCH_HUB_STORE").ok().map(PathBuf::from);

        Ok(config)
    }

    /// Replace the API base URL after validating it.
    ///
    /// # Errors
    ///
    /// Returns error if `base_url` is not an absolute http(s) URL.
    pub fn with_base_url(mut self, base_url: &str) -> anyhow::Result<Self> {
        let parsed = Url::parse(base_url)?;
        if !matches!(parsed.scheme(), "http" | "https") {
            anyhow::bail!("unsupported URL scheme for API base URL: {}", parsed.scheme());
        }
        self.api_base_url = base_url.trim_end_matches('/').to_string();
        Ok(self)
    }

    /// Full URL of the chat-completion endpoint.
    #[must_use]
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.api_base_url)
    }

    /// Check if an API key is configured.
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None)
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("has_api_key", &self.has_api_key())
            .field("api_base_url", &self.api_base_url)
            .field("model", &self.model)
            .field("request_timeout", &self.request_timeout)
            .field("store_path", &self.store_path)
            .finish()
    }
}
