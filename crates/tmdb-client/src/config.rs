//! Connection settings for the discover endpoint.

use std::fmt;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_SORT_BY: &str = "vote_average.desc";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Settings handed to `DiscoverClient::new`.
///
/// The provider-side `sort_by` only decides which page of results comes
/// back; the pipeline re-ranks by vote count regardless.
#[derive(Clone, PartialEq, Eq)]
pub struct TmdbConfig {
    pub api_key: String,
    pub base_url: String,
    pub sort_by: String,
    pub timeout: Duration,
}

impl TmdbConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            sort_by: DEFAULT_SORT_BY.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_sort_by(mut self, sort_by: impl Into<String>) -> Self {
        self.sort_by = sort_by.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Full URL of the discover endpoint, without query string.
    pub fn discover_url(&self) -> String {
        format!("{}/discover/movie", self.base_url.trim_end_matches('/'))
    }
}

// Keeps the key out of logs
impl fmt::Debug for TmdbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TmdbConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("sort_by", &self.sort_by)
            .field("timeout", &self.timeout)
            .finish()
    }
}
