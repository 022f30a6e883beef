//! Order and order-history API operations.
//!
//! All three endpoints use the Order/Cart key.

use serde_json::Value;

use super::cart::validate_cart_key;
use super::client::ApiClient;
use super::endpoint::Endpoint;
use super::error::{ApiError, ApiResult};
use super::types::{OrderHistoryRequest, OrderOptionsRequest, OrderRequest};

impl ApiClient {
    /// Retrieves billing/shipping addresses, payment methods, and
    /// shipping options available for a cart.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidParameter`] if the cart key is blank,
    /// or a dispatch error otherwise.
    pub async fn get_order_options(&self, cart_key: &str) -> ApiResult<Value> {
        validate_cart_key(cart_key)?;

        let body = OrderOptionsRequest { cart_key };
        self.dispatch(Endpoint::OrderOptionsQuery, &[], Some(&body)).await
    }

    /// Retrieves order details by Mouser order number or web order number.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidParameter`] if the order number is
    /// blank, or a dispatch error otherwise.
    pub async fn get_order(&self, order_number: &str) -> ApiResult<Value> {
        if order_number.trim().is_empty() {
            return Err(ApiError::invalid_parameter(
                "order_number",
                "order number cannot be empty",
            ));
        }

        let body = OrderRequest { order_number };
        self.dispatch(Endpoint::OrderGet, &[], Some(&body)).await
    }

    /// Lists past orders placed within the last `days` days.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidParameter`] if `days` is zero, or a
    /// dispatch error otherwise.
    pub async fn list_order_history(&self, days: u32) -> ApiResult<Value> {
        if days < 1 {
            return Err(ApiError::invalid_parameter("days", "days must be at least 1"));
        }

        let body = OrderHistoryRequest { days };
        self.dispatch(Endpoint::OrderHistoryQuery, &[], Some(&body)).await
    }
}
