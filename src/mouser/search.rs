//! Part Search API operations.
//!
//! Both operations use the Part Search key. Caller input is validated
//! locally first; a request that would be rejected upstream for a
//! malformed parameter never leaves the process.

use serde_json::Value;

use super::client::ApiClient;
use super::endpoint::Endpoint;
use super::error::{ApiError, ApiResult};
use super::types::{
    KeywordSearchEnvelope, KeywordSearchRequest, PartNumberSearchEnvelope, PartNumberSearchRequest,
};

/// Upstream cap on results per search request.
pub const MAX_SEARCH_RECORDS: u32 = 50;

impl ApiClient {
    /// Searches for parts by keyword across part numbers, manufacturers,
    /// and descriptions.
    ///
    /// `records` selects how many results to return (1–50);
    /// `starting_record` is the zero-based pagination offset.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidParameter`] if the keyword is blank or
    /// `records` is outside `1..=50`, or a dispatch error otherwise.
    pub async fn search_by_keyword(
        &self,
        keyword: &str,
        records: u32,
        starting_record: u32,
    ) -> ApiResult<Value> {
        if keyword.trim().is_empty() {
            return Err(ApiError::invalid_parameter("keyword", "keyword cannot be empty"));
        }
        if records < 1 {
            return Err(ApiError::invalid_parameter("records", "records must be at least 1"));
        }
        if records > MAX_SEARCH_RECORDS {
            return Err(ApiError::invalid_parameter(
                "records",
                format!("maximum {MAX_SEARCH_RECORDS} records per request (API limit)"),
            ));
        }

        let envelope = KeywordSearchEnvelope {
            request: KeywordSearchRequest {
                keyword,
                records,
                starting_record,
            },
        };
        self.dispatch(Endpoint::SearchByKeyword, &[], Some(&envelope)).await
    }

    /// Looks up a part by exact Mouser or manufacturer part number.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidParameter`] if the part number is
    /// blank, or a dispatch error otherwise.
    pub async fn search_by_part_number(&self, part_number: &str) -> ApiResult<Value> {
        if part_number.trim().is_empty() {
            return Err(ApiError::invalid_parameter(
                "part_number",
                "part number cannot be empty",
            ));
        }

        let envelope = PartNumberSearchEnvelope {
            request: PartNumberSearchRequest {
                mouser_part_number: part_number,
            },
        };
        self.dispatch(Endpoint::SearchByPartNumber, &[], Some(&envelope)).await
    }
}
