//! Endpoint table for the Mouser API.
//!
//! Mouser issues two independent API keys and every endpoint accepts
//! exactly one of them. An earlier generation of this bridge classified
//! endpoints by substring-matching the path, which silently picked the
//! wrong key when a caller wrote `search/keyword` instead of
//! `/search/keyword`. The [`Endpoint`] enum replaces that: each supported
//! operation carries its HTTP method, path, and key category as data, so
//! there is no string matching on the dispatch path at all.
//!
//! [`KeyCategory::classify`] still exists for classifying raw path
//! strings (diagnostics, tests against the documented contract). It is
//! segment-based and insensitive to a leading separator.

use reqwest::Method;

/// Which of the two Mouser API keys an endpoint requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCategory {
    /// The Part Search API key (`search/*` endpoints).
    PartSearch,
    /// The Order/Cart/OrderHistory API key (everything else).
    OrderCart,
}

impl KeyCategory {
    /// Classifies a relative endpoint path by its segments.
    ///
    /// A path belongs to [`Self::PartSearch`] iff one of its `/`-separated
    /// segments equals `search`; a leading separator is ignored, and a
    /// segment that merely contains the token (e.g. `research`) does not
    /// match. Every other path falls back to [`Self::OrderCart`].
    ///
    /// The fallback mirrors the upstream API surface, where all non-search
    /// endpoints take the order key. Unknown paths cannot reach the
    /// dispatcher, which only accepts [`Endpoint`] values, so the fallback
    /// is never used to guess a key for an unrecognised operation.
    #[must_use]
    pub fn classify(path: &str) -> Self {
        let normalised = path.trim_start_matches('/');
        if normalised.split('/').any(|segment| segment == "search") {
            Self::PartSearch
        } else {
            Self::OrderCart
        }
    }
}

/// One supported upstream operation.
///
/// The variants enumerate the full API surface this server talks to;
/// method, path, and key category are fixed per variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// `POST search/keyword`: keyword part search.
    SearchByKeyword,
    /// `POST search/partnumber`: exact part number lookup.
    SearchByPartNumber,
    /// `GET cart`: retrieve cart contents (cart key as query parameter).
    CartGet,
    /// `POST cart/items/insert`: add items to a cart.
    CartItemsInsert,
    /// `POST cart/items/update`: change item quantities in a cart.
    CartItemsUpdate,
    /// `POST order/options/query`: addresses, shipping and payment options.
    OrderOptionsQuery,
    /// `POST order/get`: order details by order number.
    OrderGet,
    /// `POST orderhistory/query`: past orders for the account.
    OrderHistoryQuery,
}

impl Endpoint {
    /// All supported endpoints.
    pub const ALL: [Self; 8] = [
        Self::SearchByKeyword,
        Self::SearchByPartNumber,
        Self::CartGet,
        Self::CartItemsInsert,
        Self::CartItemsUpdate,
        Self::OrderOptionsQuery,
        Self::OrderGet,
        Self::OrderHistoryQuery,
    ];

    /// The path relative to the API base URL, without a leading separator.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::SearchByKeyword => "search/keyword",
            Self::SearchByPartNumber => "search/partnumber",
            Self::CartGet => "cart",
            Self::CartItemsInsert => "cart/items/insert",
            Self::CartItemsUpdate => "cart/items/update",
            Self::OrderOptionsQuery => "order/options/query",
            Self::OrderGet => "order/get",
            Self::OrderHistoryQuery => "orderhistory/query",
        }
    }

    /// The HTTP method for this endpoint.
    #[must_use]
    pub fn method(self) -> Method {
        match self {
            Self::CartGet => Method::GET,
            _ => Method::POST,
        }
    }

    /// Which API key this endpoint authenticates with.
    ///
    /// This is the authoritative mapping; [`KeyCategory::classify`] must
    /// agree with it for every variant (verified by test).
    #[must_use]
    pub const fn key_category(self) -> KeyCategory {
        match self {
            Self::SearchByKeyword | Self::SearchByPartNumber => KeyCategory::PartSearch,
            Self::CartGet
            | Self::CartItemsInsert
            | Self::CartItemsUpdate
            | Self::OrderOptionsQuery
            | Self::OrderGet
            | Self::OrderHistoryQuery => KeyCategory::OrderCart,
        }
    }
}
