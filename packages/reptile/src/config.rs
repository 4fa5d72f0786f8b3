//! Fetch configuration and source validation.

use std::time::Duration;

use reqwest::Url;

use crate::error::FetchError;

/// HTTP timeout in seconds.
pub const HTTP_TIMEOUT_SECS: u64 = 30;

/// Default maximum HTTP response size in bytes (100 MB).
pub const DEFAULT_MAX_RESPONSE_SIZE: u64 = 100 * 1024 * 1024;

/// User agent string identifying this crate.
pub const USER_AGENT: &str = concat!("reptile/", env!("CARGO_PKG_VERSION"));

/// Settings for the blocking HTTP client behind [`crate::Fetcher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    pub timeout: Duration,
    pub user_agent: String,
    pub max_response_size: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(HTTP_TIMEOUT_SECS),
            user_agent: USER_AGENT.to_string(),
            max_response_size: DEFAULT_MAX_RESPONSE_SIZE,
        }
    }
}

impl FetchConfig {
    /// Build a config from `REPTILE_*` environment variables.
    ///
    /// Unset or unparsable variables keep their default.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let timeout = std::env::var("REPTILE_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.timeout);

        let user_agent = std::env::var("REPTILE_USER_AGENT")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.user_agent);

        let max_response_size = std::env::var("REPTILE_MAX_RESPONSE_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.max_response_size);

        Self {
            timeout,
            user_agent,
            max_response_size,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_max_response_size(mut self, max_response_size: u64) -> Self {
        self.max_response_size = max_response_size;
        self
    }
}

/// Validate a source location before any request is made.
///
/// # Arguments
/// * `source` - The page URL
///
/// # Returns
/// * `Ok(Url)` if `source` is an absolute http or https URL
/// * `Err(FetchError::InvalidSource)` otherwise
///
/// # Examples
/// ```
/// use reptile::config::validate_source;
///
/// assert!(validate_source("https://www.qidian.com").is_ok());
/// assert!(validate_source("").is_err());
/// assert!(validate_source("ftp://example.com/file").is_err());
/// ```
pub fn validate_source(source: &str) -> Result<Url, FetchError> {
    let invalid = |reason: String| FetchError::InvalidSource {
        source_url: source.to_string(),
        reason,
    };

    if source.trim().is_empty() {
        return Err(invalid("source is empty".to_string()));
    }

    let url = Url::parse(source.trim()).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(invalid(format!("unsupported scheme '{other}'"))),
    }
}
