//! HTTP request dispatcher for the Mouser API.
//!
//! One dispatcher instance is shared by all domain operations. It is
//! stateless between calls: every dispatch selects its key from the
//! endpoint table, so interleaved search and cart calls can never leak a
//! key from one category to the other.
//!
//! # Authentication
//!
//! The upstream API authenticates exclusively through the `apiKey` query
//! parameter. Keys must never be sent as headers; that is a protocol
//! requirement, not a style choice.

use reqwest::StatusCode;
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::config::Settings;

use super::endpoint::{Endpoint, KeyCategory};
use super::error::{ApiError, ApiResult};
use super::types::ApiErrorDetail;

/// The two process-lifetime API keys, immutable after construction.
#[derive(Clone)]
pub struct ApiKeys {
    part: String,
    order: String,
}

impl ApiKeys {
    /// Creates a key store from the two key strings.
    #[must_use]
    pub const fn new(part: String, order: String) -> Self {
        Self { part, order }
    }

    /// Returns the key for the given endpoint category.
    #[must_use]
    pub fn for_category(&self, category: KeyCategory) -> &str {
        match category {
            KeyCategory::PartSearch => &self.part,
            KeyCategory::OrderCart => &self.order,
        }
    }
}

// Key material is deliberately absent from Debug output.
impl std::fmt::Debug for ApiKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeys")
            .field("part", &"<redacted>")
            .field("order", &"<redacted>")
            .finish()
    }
}

/// HTTP client for the Mouser Electronics API.
///
/// Cheap to clone (the underlying connection pool is shared) and safe to
/// use concurrently; it holds no mutable state.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    keys: ApiKeys,
}

impl ApiClient {
    /// Builds a client from validated settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be
    /// constructed (e.g. no TLS backend available).
    pub fn new(settings: &Settings) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(ApiError::Transport)?;

        let mut base_url = settings.base_url.clone();
        // Url::join replaces the final path segment unless the base ends
        // with a separator, which would silently drop the API version.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            http,
            base_url,
            keys: ApiKeys::new(settings.part_api_key.clone(), settings.order_api_key.clone()),
        })
    }

    /// The resolved base URL (trailing separator normalised).
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Performs one upstream call and classifies the response.
    ///
    /// The key for `endpoint`'s category is appended as the `apiKey`
    /// query parameter, followed by any extra query parameters. A JSON
    /// body is attached when present.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Upstream`]: HTTP 200 with a non-empty `Errors`
    ///   array; the records are surfaced verbatim and never retried
    /// - [`ApiError::Status`]: non-success HTTP status
    /// - [`ApiError::Transport`]: timeout or connection failure
    /// - [`ApiError::Decode`]: response body was not the expected JSON
    pub(crate) async fn dispatch<B: Serialize + Sync>(
        &self,
        endpoint: Endpoint,
        query: &[(&str, &str)],
        body: Option<&B>,
    ) -> ApiResult<Value> {
        let mut url = self.base_url.join(endpoint.path())?;

        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("apiKey", self.keys.for_category(endpoint.key_category()));
            for (name, value) in query {
                pairs.append_pair(name, value);
            }
        }

        // Log the path only; the full URL carries the key.
        tracing::debug!(
            method = %endpoint.method(),
            path = endpoint.path(),
            "dispatching Mouser API request"
        );

        let mut request = self.http.request(endpoint.method(), url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(ApiError::Transport)?;
        let status = response.status();

        if status != StatusCode::OK {
            tracing::warn!(
                path = endpoint.path(),
                status = status.as_u16(),
                "Mouser API returned non-success status"
            );
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }

        let payload: Value = response.json().await.map_err(ApiError::Decode)?;

        if let Some(errors) = payload.get("Errors").and_then(Value::as_array) {
            if !errors.is_empty() {
                let errors: Vec<ApiErrorDetail> = errors
                    .iter()
                    .map(|entry| serde_json::from_value(entry.clone()).unwrap_or_default())
                    .collect();
                tracing::debug!(
                    path = endpoint.path(),
                    count = errors.len(),
                    "Mouser API returned validation errors"
                );
                return Err(ApiError::Upstream { errors });
            }
        }

        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn test_settings(base_url: &str) -> Settings {
        Settings {
            part_api_key: "part-key".to_string(),
            order_api_key: "order-key".to_string(),
            base_url: Url::parse(base_url).unwrap(),
            timeout: Duration::from_secs(5),
            debug: false,
        }
    }

    #[test]
    fn keys_debug_is_redacted() {
        let keys = ApiKeys::new("secret-part".to_string(), "secret-order".to_string());
        let rendered = format!("{keys:?}");
        assert!(rendered.contains("<redacted>"));
        assert!(!rendered.contains("secret-part"));
        assert!(!rendered.contains("secret-order"));
    }

    #[test]
    fn keys_select_by_category() {
        let keys = ApiKeys::new("p".to_string(), "o".to_string());
        assert_eq!(keys.for_category(KeyCategory::PartSearch), "p");
        assert_eq!(keys.for_category(KeyCategory::OrderCart), "o");
    }

    #[test]
    fn base_url_gets_trailing_separator() {
        let client = ApiClient::new(&test_settings("https://api.mouser.com/api/v1")).unwrap();
        assert_eq!(client.base_url().path(), "/api/v1/");

        // Endpoint paths now resolve under the version prefix.
        let url = client.base_url().join(Endpoint::SearchByKeyword.path()).unwrap();
        assert_eq!(url.path(), "/api/v1/search/keyword");
    }

    #[test]
    fn base_url_with_separator_is_untouched() {
        let client = ApiClient::new(&test_settings("https://api.mouser.com/api/v1/")).unwrap();
        assert_eq!(client.base_url().path(), "/api/v1/");
    }
}
