//! Client configuration domain model.
//!
//! Persisted as `config.toml` in the Familia config directory. The
//! infrastructure layer owns loading and the `FAMILIA_API_URL` override.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use version_migrate::DeriveQueryable as Queryable;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api/v1";

/// Environment variable that overrides the configured API base URL.
pub const API_URL_ENV: &str = "FAMILIA_API_URL";

/// Pacing of the quick-match search loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickMatchSettings {
    /// Delay between browse attempts.
    pub poll_interval_ms: u64,
    /// Upper bound on browse requests per search.
    pub max_attempts: u32,
    /// Results are never shown before this much time has passed.
    pub min_search_duration_ms: u64,
}

impl Default for QuickMatchSettings {
    fn default() -> Self {
        Self {
            poll_interval_ms: 2000,
            max_attempts: 12,
            min_search_duration_ms: 3000,
        }
    }
}

impl QuickMatchSettings {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn min_search_duration(&self) -> Duration {
        Duration::from_millis(self.min_search_duration_ms)
    }
}

/// Settings shared by every client component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Queryable)]
#[queryable(entity = "client_config")]
pub struct ClientConfig {
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    pub chat_poll_interval_ms: u64,
    pub chat_history_limit: u32,
    #[serde(default)]
    pub quick_match: QuickMatchSettings,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: 30,
            chat_poll_interval_ms: 3000,
            chat_history_limit: 50,
            quick_match: QuickMatchSettings::default(),
        }
    }
}

impl ClientConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn chat_poll_interval(&self) -> Duration {
        Duration::from_millis(self.chat_poll_interval_ms)
    }

    /// Applies an API URL override when one is set and non-blank.
    pub fn with_api_url_override(mut self, api_url: Option<String>) -> Self {
        if let Some(url) = api_url
            && !url.trim().is_empty()
        {
            self.api_base_url = url.trim().to_string();
        }
        self
    }

    /// Base URL without a trailing slash.
    pub fn api_base(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:8000/api/v1");
        assert_eq!(config.chat_poll_interval(), Duration::from_millis(3000));
        assert_eq!(config.chat_history_limit, 50);
        assert_eq!(config.quick_match.max_attempts, 12);
        assert_eq!(config.quick_match.poll_interval(), Duration::from_secs(2));
        assert_eq!(config.quick_match.min_search_duration(), Duration::from_secs(3));
    }

    #[test]
    fn test_api_url_override() {
        let config = ClientConfig::default()
            .with_api_url_override(Some(" https://api.familia.app/api/v1/ ".into()));
        assert_eq!(config.api_base(), "https://api.familia.app/api/v1");

        let untouched = ClientConfig::default().with_api_url_override(Some("  ".into()));
        assert_eq!(untouched.api_base_url, DEFAULT_API_BASE_URL);
        let untouched = ClientConfig::default().with_api_url_override(None);
        assert_eq!(untouched.api_base_url, DEFAULT_API_BASE_URL);
    }
}
