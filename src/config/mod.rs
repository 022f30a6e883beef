//! Configuration loading from the process environment.
//!
//! All configuration is sourced from environment variables, optionally
//! populated from a `.env` file:
//!
//! | Variable | Required | Default |
//! |---|---|---|
//! | `MOUSER_PART_API_KEY` | yes | - |
//! | `MOUSER_ORDER_API_KEY` | yes | - |
//! | `MOUSER_API_BASE_URL` | no | `https://api.mouser.com/api/v1` |
//! | `MOUSER_API_TIMEOUT` | no | `30` (seconds, 1–300) |
//! | `MOUSER_DEBUG` | no | `false` |
//!
//! # `.env` Discovery
//!
//! Unless an explicit file is given on the command line, a `.env` file is
//! looked for in the current directory and then in the home directory.
//! A missing `.env` file is not an error; missing key variables are.

mod settings;

pub use settings::{Settings, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, MAX_TIMEOUT_SECS};

use std::path::Path;
use std::time::Duration;

use crate::error::ConfigError;

/// Environment variable holding the Part Search API key.
pub const ENV_PART_API_KEY: &str = "MOUSER_PART_API_KEY";

/// Environment variable holding the Order/Cart API key.
pub const ENV_ORDER_API_KEY: &str = "MOUSER_ORDER_API_KEY";

/// Environment variable overriding the API base URL.
pub const ENV_BASE_URL: &str = "MOUSER_API_BASE_URL";

/// Environment variable overriding the request timeout (seconds).
pub const ENV_TIMEOUT: &str = "MOUSER_API_TIMEOUT";

/// Environment variable enabling debug logging.
pub const ENV_DEBUG: &str = "MOUSER_DEBUG";

/// Populates the process environment from a `.env` file.
///
/// With an explicit path the file must exist and parse; with `None`, the
/// current directory and then the home directory are tried and absence is
/// silently accepted.
///
/// # Errors
///
/// Returns an error if an explicitly named file cannot be loaded.
pub fn load_env_file(path: Option<&Path>) -> Result<(), ConfigError> {
    if let Some(path) = path {
        dotenvy::from_path(path).map_err(|e| ConfigError::InvalidVar {
            name: "--env-file",
            message: format!("failed to load '{}': {e}", path.display()),
        })?;
        return Ok(());
    }

    for candidate in env_file_candidates() {
        if candidate.exists() && dotenvy::from_path(&candidate).is_ok() {
            tracing::debug!(path = %candidate.display(), "loaded .env file");
            break;
        }
    }
    Ok(())
}

fn env_file_candidates() -> Vec<std::path::PathBuf> {
    let mut candidates = Vec::with_capacity(2);
    if let Ok(cwd) = std::env::current_dir() {
        candidates.push(cwd.join(".env"));
    }
    if let Some(home) = std::env::var_os("HOME") {
        candidates.push(std::path::PathBuf::from(home).join(".env"));
    }
    candidates
}

/// Builds validated [`Settings`] from the current process environment.
///
/// # Errors
///
/// Returns an error if either API key is missing or malformed, or if an
/// optional override fails validation. Key values themselves never appear
/// in error messages.
pub fn from_env() -> Result<Settings, ConfigError> {
    let part_api_key = require_var(ENV_PART_API_KEY)?;
    settings::validate_api_key(ENV_PART_API_KEY, &part_api_key)?;

    let order_api_key = require_var(ENV_ORDER_API_KEY)?;
    settings::validate_api_key(ENV_ORDER_API_KEY, &order_api_key)?;

    let base_url = match optional_var(ENV_BASE_URL) {
        Some(value) => settings::parse_base_url(ENV_BASE_URL, &value)?,
        None => settings::parse_base_url(ENV_BASE_URL, DEFAULT_BASE_URL)?,
    };

    let timeout = match optional_var(ENV_TIMEOUT) {
        Some(value) => settings::parse_timeout(ENV_TIMEOUT, &value)?,
        None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
    };

    let debug = optional_var(ENV_DEBUG).is_some_and(|v| settings::parse_flag(&v));

    Ok(Settings {
        part_api_key,
        order_api_key,
        base_url,
        timeout,
        debug,
    })
}

/// Reads a required environment variable.
fn require_var(name: &'static str) -> Result<String, ConfigError> {
    optional_var(name).ok_or(ConfigError::MissingVar { name })
}

/// Reads an optional environment variable, treating blank values as unset.
fn optional_var(name: &str) -> Option<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Some(value),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Environment-variable manipulation is process-global, so these tests
    // only exercise the pure helpers. from_env() is covered end to end by
    // the settings validation tests plus the helpers below.

    #[test]
    fn optional_var_treats_blank_as_unset() {
        // PATH is always set and non-blank in test environments.
        assert!(optional_var("PATH").is_some());
        assert!(optional_var("MOUSER_MCP_TEST_UNSET_VARIABLE").is_none());
    }

    #[test]
    fn env_file_candidates_prefer_cwd() {
        let candidates = env_file_candidates();
        assert!(!candidates.is_empty());
        assert!(candidates[0].ends_with(".env"));
    }

    #[test]
    fn missing_env_file_is_not_an_error() {
        assert!(load_env_file(None).is_ok());
    }

    #[test]
    fn explicit_missing_env_file_is_an_error() {
        let result = load_env_file(Some(Path::new("/nonexistent/.env")));
        assert!(result.is_err());
    }
}
