//! Remote API configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration of the single HTTP client that talks to the marketplace API
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base address every relative path is joined onto
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Process-wide request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Clear the credential store when the server answers 401
    #[serde(default = "default_invalidate_session")]
    pub invalidate_session_on_unauthorized: bool,

    /// User-Agent header value
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            invalidate_session_on_unauthorized: default_invalidate_session(),
            user_agent: default_user_agent(),
        }
    }
}

impl ApiConfig {
    /// Create a configuration pointing at the given base address
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Override the request timeout
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Keep the session alive on 401 responses
    pub fn without_session_invalidation(mut self) -> Self {
        self.invalidate_session_on_unauthorized = false;
        self
    }

    /// Request timeout as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Join a relative path onto the base address
    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

fn default_base_url() -> String {
    // Android emulator alias for the host machine
    String::from("http://10.0.2.2:8000/api")
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_invalidate_session() -> bool {
    true
}

fn default_user_agent() -> String {
    format!("bengkel-connect/{}", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_config_default() {
        let config = ApiConfig::default();
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.invalidate_session_on_unauthorized);
    }

    #[test]
    fn test_url_for_normalizes_slashes() {
        let config = ApiConfig::new("http://localhost:8000/api/");
        assert_eq!(config.url_for("/login"), "http://localhost:8000/api/login");
        assert_eq!(config.url_for("profil"), "http://localhost:8000/api/profil");
    }

    #[test]
    fn test_builder_overrides() {
        let config = ApiConfig::new("http://example.test")
            .with_timeout_secs(5)
            .without_session_invalidation();
        assert_eq!(config.timeout_secs, 5);
        assert!(!config.invalidate_session_on_unauthorized);
    }
}
