use crate::constants::{DEFAULT_BASE_URL, DEFAULT_HTTP_TIMEOUT_SECONDS};

/// Settings for the API client. There is no persisted configuration file;
/// every run starts from the built-in defaults, optionally overridden through
/// the environment.
///
/// # Environment Variables
/// - `NBA_STATS_BASE_URL` - Override the API base URL
/// - `NBA_STATS_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 30)
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL for API requests. Should include the https:// prefix.
    pub base_url: String,
    /// HTTP timeout in seconds for API requests.
    pub http_timeout_seconds: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            http_timeout_seconds: DEFAULT_HTTP_TIMEOUT_SECONDS,
        }
    }
}

impl ClientConfig {
    /// Builds a config from the defaults, applying any environment overrides.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(base_url) = std::env::var("NBA_STATS_BASE_URL") {
            let trimmed = base_url.trim().trim_end_matches('/');
            if !trimmed.is_empty() {
                config.base_url = trimmed.to_string();
            }
        }

        if let Ok(timeout) = std::env::var("NBA_STATS_HTTP_TIMEOUT") {
            if let Ok(seconds) = timeout.trim().parse::<u64>() {
                config.http_timeout_seconds = seconds;
            }
        }

        config
    }
}
