//! Request and response envelopes for the Mouser API.
//!
//! Field names and nesting here are fixed by the upstream contract; they
//! are not negotiable and must not be "improved". Requests are modelled
//! as explicit types so a malformed envelope is a compile error rather
//! than a runtime surprise. Success payloads stay as [`serde_json::Value`]
//! because the tool surface passes them through unchanged; only the error
//! envelope is re-typed on the way in.

use serde::{Deserialize, Serialize};

/// One record of the upstream `Errors` array.
///
/// The upstream API signals validation failures with HTTP 200 and a
/// populated `Errors` array; an empty array means success.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiErrorDetail {
    /// Upstream error code, e.g. `Invalid`.
    #[serde(rename = "Code")]
    pub code: String,

    /// Human-readable message.
    #[serde(rename = "Message")]
    pub message: String,

    /// The request property the error refers to, e.g. `API Key`.
    #[serde(rename = "PropertyName")]
    pub property_name: String,
}

/// Body of `POST search/keyword`.
#[derive(Debug, Serialize)]
pub struct KeywordSearchEnvelope<'a> {
    /// The wrapped request object, as the upstream API requires.
    #[serde(rename = "SearchByKeywordRequest")]
    pub request: KeywordSearchRequest<'a>,
}

/// Keyword search parameters.
#[derive(Debug, Serialize)]
pub struct KeywordSearchRequest<'a> {
    /// Search term: part number, manufacturer, description.
    pub keyword: &'a str,
    /// Number of records to return (upstream cap: 50).
    pub records: u32,
    /// Zero-based starting record for pagination.
    #[serde(rename = "startingRecord")]
    pub starting_record: u32,
}

/// Body of `POST search/partnumber`.
#[derive(Debug, Serialize)]
pub struct PartNumberSearchEnvelope<'a> {
    /// The wrapped request object, as the upstream API requires.
    #[serde(rename = "SearchByPartRequest")]
    pub request: PartNumberSearchRequest<'a>,
}

/// Exact part number lookup parameters.
#[derive(Debug, Serialize)]
pub struct PartNumberSearchRequest<'a> {
    /// Mouser or manufacturer part number.
    #[serde(rename = "mouserPartNumber")]
    pub mouser_part_number: &'a str,
}

/// Body of `POST cart/items/insert` and `POST cart/items/update`.
#[derive(Debug, Serialize)]
pub struct CartItemsEnvelope<'a> {
    /// The cart to modify.
    #[serde(rename = "CartKey")]
    pub cart_key: &'a str,

    /// Items to insert or update.
    #[serde(rename = "CartItems")]
    pub cart_items: Vec<CartItem<'a>>,
}

/// One cart line item.
#[derive(Debug, Serialize)]
pub struct CartItem<'a> {
    /// Mouser part number.
    #[serde(rename = "MouserPartNumber")]
    pub mouser_part_number: &'a str,

    /// Quantity; 0 removes the item on update.
    #[serde(rename = "Quantity")]
    pub quantity: u32,

    /// Optional customer reference number; omitted when not supplied.
    #[serde(rename = "CustomerPartNumber", skip_serializing_if = "Option::is_none")]
    pub customer_part_number: Option<&'a str>,
}

/// Body of `POST order/options/query`.
#[derive(Debug, Serialize)]
pub struct OrderOptionsRequest<'a> {
    /// The cart to query options for.
    #[serde(rename = "CartKey")]
    pub cart_key: &'a str,
}

/// Body of `POST order/get`.
#[derive(Debug, Serialize)]
pub struct OrderRequest<'a> {
    /// Mouser order number or web order number.
    #[serde(rename = "OrderNumber")]
    pub order_number: &'a str,
}

/// Body of `POST orderhistory/query`.
#[derive(Debug, Serialize)]
pub struct OrderHistoryRequest {
    /// How many days to look back.
    #[serde(rename = "Days")]
    pub days: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn keyword_envelope_matches_contract() {
        let envelope = KeywordSearchEnvelope {
            request: KeywordSearchRequest {
                keyword: "Arduino",
                records: 10,
                starting_record: 0,
            },
        };
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            value,
            json!({
                "SearchByKeywordRequest": {
                    "keyword": "Arduino",
                    "records": 10,
                    "startingRecord": 0,
                }
            })
        );
    }

    #[test]
    fn part_number_envelope_matches_contract() {
        let envelope = PartNumberSearchEnvelope {
            request: PartNumberSearchRequest {
                mouser_part_number: "595-TPS54360DDAR",
            },
        };
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            value,
            json!({
                "SearchByPartRequest": {
                    "mouserPartNumber": "595-TPS54360DDAR",
                }
            })
        );
    }

    #[test]
    fn cart_envelope_includes_customer_part_number_when_present() {
        let envelope = CartItemsEnvelope {
            cart_key: "cart-123",
            cart_items: vec![CartItem {
                mouser_part_number: "595-TPS54360DDAR",
                quantity: 10,
                customer_part_number: Some(""),
            }],
        };
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            value,
            json!({
                "CartKey": "cart-123",
                "CartItems": [{
                    "MouserPartNumber": "595-TPS54360DDAR",
                    "Quantity": 10,
                    "CustomerPartNumber": "",
                }]
            })
        );
    }

    #[test]
    fn cart_envelope_omits_customer_part_number_when_absent() {
        let envelope = CartItemsEnvelope {
            cart_key: "cart-123",
            cart_items: vec![CartItem {
                mouser_part_number: "595-TPS54360DDAR",
                quantity: 0,
                customer_part_number: None,
            }],
        };
        let value = serde_json::to_value(&envelope).unwrap();
        assert!(value["CartItems"][0].get("CustomerPartNumber").is_none());
    }

    #[test]
    fn order_request_bodies_match_contract() {
        let options = serde_json::to_value(OrderOptionsRequest { cart_key: "k" }).unwrap();
        assert_eq!(options, json!({"CartKey": "k"}));

        let order = serde_json::to_value(OrderRequest {
            order_number: "WEB12345678",
        })
        .unwrap();
        assert_eq!(order, json!({"OrderNumber": "WEB12345678"}));

        let history = serde_json::to_value(OrderHistoryRequest { days: 30 }).unwrap();
        assert_eq!(history, json!({"Days": 30}));
    }

    #[test]
    fn error_detail_deserialises_from_upstream_shape() {
        let detail: ApiErrorDetail = serde_json::from_value(json!({
            "Code": "Invalid",
            "Message": "Invalid unique identifier.",
            "PropertyName": "API Key",
        }))
        .unwrap();
        assert_eq!(detail.code, "Invalid");
        assert_eq!(detail.message, "Invalid unique identifier.");
        assert_eq!(detail.property_name, "API Key");
    }

    #[test]
    fn error_detail_tolerates_missing_fields() {
        let detail: ApiErrorDetail = serde_json::from_value(json!({"Code": "X"})).unwrap();
        assert_eq!(detail.code, "X");
        assert!(detail.message.is_empty());
        assert!(detail.property_name.is_empty());
    }
}
