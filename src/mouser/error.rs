//! Error types for Mouser API operations.
//!
//! The taxonomy separates failures the caller can fix (parameter
//! validation, upstream validation) from failures of the transport.
//! Upstream validation errors arrive inside an HTTP 200 response and are
//! never retried; they carry the upstream records verbatim.

use thiserror::Error;

use super::types::ApiErrorDetail;

/// Result type for Mouser API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors that can occur while calling the Mouser API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A caller-supplied parameter failed local validation. Nothing was
    /// sent upstream.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the constraint that was violated.
        message: String,
    },

    /// The upstream API accepted the request at the HTTP level but
    /// returned a populated `Errors` array.
    #[error("Mouser API rejected the request: {}", format_error_details(.errors))]
    Upstream {
        /// The upstream error records, verbatim.
        errors: Vec<ApiErrorDetail>,
    },

    /// The upstream API returned a non-success HTTP status.
    #[error("Mouser API returned HTTP {status}")]
    Status {
        /// The HTTP status code.
        status: u16,
    },

    /// The request could not be sent or timed out.
    #[error("request to Mouser API failed")]
    Transport(#[source] reqwest::Error),

    /// The response body was not the expected JSON.
    #[error("failed to decode Mouser API response")]
    Decode(#[source] reqwest::Error),

    /// An endpoint path could not be resolved against the base URL.
    #[error("failed to resolve endpoint URL")]
    Url(#[from] url::ParseError),
}

impl ApiError {
    /// Convenience constructor for local validation failures.
    pub(crate) fn invalid_parameter(name: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            message: message.into(),
        }
    }
}

/// Renders upstream error records as `Code (PropertyName): Message` pairs.
fn format_error_details(errors: &[ApiErrorDetail]) -> String {
    if errors.is_empty() {
        return "no error details provided".to_string();
    }
    errors
        .iter()
        .map(|e| {
            if e.property_name.is_empty() {
                format!("{}: {}", e.code, e.message)
            } else {
                format!("{} ({}): {}", e.code, e.property_name, e.message)
            }
        })
        .collect::<Vec<_>>()
        .join("; ")
}
