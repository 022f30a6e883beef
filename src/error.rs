//! Error types for mouser-mcp startup.
//!
//! # Security Note
//!
//! Error messages are carefully crafted to NEVER include credentials.
//! Variants that relate to API keys name the environment variable, not
//! the value that was read from it.

use thiserror::Error;

/// Errors that can occur while loading configuration from the environment.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is not set or is blank.
    #[error("missing required environment variable: {name}")]
    MissingVar {
        /// Name of the environment variable.
        name: &'static str,
    },

    /// An environment variable is set but its value is not usable.
    #[error("invalid value for {name}: {message}")]
    InvalidVar {
        /// Name of the environment variable.
        name: &'static str,
        /// Description of the validation failure. Never contains the value
        /// when the variable holds key material.
        message: String,
    },

    /// The configured base URL could not be parsed.
    #[error("invalid API base URL")]
    InvalidBaseUrl {
        /// The underlying URL parse error.
        #[source]
        source: url::ParseError,
    },
}
