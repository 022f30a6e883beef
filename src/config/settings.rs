//! Configuration structure and per-field validation.
//!
//! Values are sourced from environment variables (see the module docs in
//! [`crate::config`]); this file holds the validated, type-safe form.

use std::time::Duration;

use url::Url;

use crate::error::ConfigError;

/// Default Mouser API base URL (version 1).
pub const DEFAULT_BASE_URL: &str = "https://api.mouser.com/api/v1";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Upper bound on the configurable timeout, in seconds.
pub const MAX_TIMEOUT_SECS: u64 = 300;

/// Validated runtime configuration.
///
/// Both API keys are required: any tool may be invoked at any time, and
/// refusing to start beats discovering a missing credential mid-session.
#[derive(Clone)]
pub struct Settings {
    /// API key for the Part Search API.
    pub part_api_key: String,

    /// API key for the Order/Cart/OrderHistory API.
    pub order_api_key: String,

    /// Base URL all endpoint paths are resolved against.
    pub base_url: Url,

    /// Total per-request timeout.
    pub timeout: Duration,

    /// Whether debug logging was requested via the environment.
    pub debug: bool,
}

// Keys are deliberately absent from Debug output.
impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("part_api_key", &"<redacted>")
            .field("order_api_key", &"<redacted>")
            .field("base_url", &self.base_url.as_str())
            .field("timeout", &self.timeout)
            .field("debug", &self.debug)
            .finish()
    }
}

/// Validates an API key value read from the environment.
///
/// Mouser keys are opaque UUID-like strings; no structural validation is
/// performed beyond rejecting values that cannot be a key at all.
///
/// # Errors
///
/// Returns an error if the value is blank or contains whitespace or
/// control characters. The error names the variable, never the value.
pub fn validate_api_key(name: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::MissingVar { name });
    }
    if value.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(ConfigError::InvalidVar {
            name,
            message: "API key must not contain whitespace or control characters".to_string(),
        });
    }
    Ok(())
}

/// Parses and bounds-checks a timeout value in seconds.
///
/// # Errors
///
/// Returns an error if the value is not an integer or is outside
/// `1..=MAX_TIMEOUT_SECS`.
pub fn parse_timeout(name: &'static str, value: &str) -> Result<Duration, ConfigError> {
    let secs: u64 = value.trim().parse().map_err(|_| ConfigError::InvalidVar {
        name,
        message: format!("expected an integer number of seconds, got '{value}'"),
    })?;

    if secs == 0 || secs > MAX_TIMEOUT_SECS {
        return Err(ConfigError::InvalidVar {
            name,
            message: format!("timeout must be between 1 and {MAX_TIMEOUT_SECS} seconds"),
        });
    }

    Ok(Duration::from_secs(secs))
}

/// Parses the base URL override.
///
/// # Errors
///
/// Returns an error if the value is not an absolute http(s) URL.
pub fn parse_base_url(name: &'static str, value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value.trim())
        .map_err(|source| ConfigError::InvalidBaseUrl { source })?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidVar {
            name,
            message: format!("base URL must use http or https, got '{}'", url.scheme()),
        });
    }
    if url.host_str().is_none() {
        return Err(ConfigError::InvalidVar {
            name,
            message: "base URL has no host".to_string(),
        });
    }

    Ok(url)
}

/// Parses a boolean flag value ("true"/"1" enable, anything else disables).
#[must_use]
pub fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "true" | "1")
}
