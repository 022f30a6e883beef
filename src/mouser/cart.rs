//! Cart API operations.
//!
//! All cart endpoints use the Order/Cart key. The cart key is supplied
//! and retained by the caller; this server never persists it.

use serde_json::Value;

use super::client::ApiClient;
use super::endpoint::Endpoint;
use super::error::{ApiError, ApiResult};
use super::types::{CartItem, CartItemsEnvelope};

impl ApiClient {
    /// Retrieves cart contents, pricing, and totals by cart key.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidParameter`] if the cart key is blank,
    /// or a dispatch error otherwise.
    pub async fn get_cart(&self, cart_key: &str) -> ApiResult<Value> {
        validate_cart_key(cart_key)?;

        // GET cart?cartKey={key}; the API key is appended by the dispatcher.
        self.dispatch::<()>(Endpoint::CartGet, &[("cartKey", cart_key)], None)
            .await
    }

    /// Adds a part to an existing cart. If the part is already present the
    /// upstream API updates its quantity.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidParameter`] if the cart key or part
    /// number is blank or the quantity is zero, or a dispatch error
    /// otherwise.
    pub async fn add_to_cart(
        &self,
        cart_key: &str,
        mouser_part_number: &str,
        quantity: u32,
        customer_part_number: Option<&str>,
    ) -> ApiResult<Value> {
        validate_cart_key(cart_key)?;
        validate_part_number(mouser_part_number)?;
        if quantity < 1 {
            return Err(ApiError::invalid_parameter(
                "quantity",
                "quantity must be at least 1",
            ));
        }

        let envelope = CartItemsEnvelope {
            cart_key,
            cart_items: vec![CartItem {
                mouser_part_number,
                quantity,
                // The insert endpoint expects the field to be present.
                customer_part_number: Some(customer_part_number.unwrap_or("")),
            }],
        };
        self.dispatch(Endpoint::CartItemsInsert, &[], Some(&envelope)).await
    }

    /// Updates the quantity of an existing cart item. A quantity of 0
    /// removes the item.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidParameter`] if the cart key or part
    /// number is blank, or a dispatch error otherwise.
    pub async fn update_cart_item(
        &self,
        cart_key: &str,
        mouser_part_number: &str,
        quantity: u32,
    ) -> ApiResult<Value> {
        validate_cart_key(cart_key)?;
        validate_part_number(mouser_part_number)?;

        let envelope = CartItemsEnvelope {
            cart_key,
            cart_items: vec![CartItem {
                mouser_part_number,
                quantity,
                customer_part_number: None,
            }],
        };
        self.dispatch(Endpoint::CartItemsUpdate, &[], Some(&envelope)).await
    }
}

pub(super) fn validate_cart_key(cart_key: &str) -> ApiResult<()> {
    if cart_key.trim().is_empty() {
        return Err(ApiError::invalid_parameter("cart_key", "cart key cannot be empty"));
    }
    Ok(())
}

fn validate_part_number(part_number: &str) -> ApiResult<()> {
    if part_number.trim().is_empty() {
        return Err(ApiError::invalid_parameter(
            "mouser_part_number",
            "Mouser part number cannot be empty",
        ));
    }
    Ok(())
}
