//! Mouser Electronics API client.
//!
//! This module owns everything between a tool invocation and the wire:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                      mouser module                        │
//! │                                                          │
//! │   ┌────────────┐   ┌────────────┐   ┌───────────────┐    │
//! │   │ operations │──▶│ dispatcher │──▶│ endpoint table │    │
//! │   │ (search,   │   │ (ApiClient)│   │ (key category, │    │
//! │   │ cart,order)│   │            │   │ method, path)  │    │
//! │   └────────────┘   └────────────┘   └───────────────┘    │
//! │         │                │                               │
//! │         ▼                ▼                               │
//! │   ┌────────────┐   ┌────────────┐                        │
//! │   │  envelopes │   │  ApiKeys   │                        │
//! │   │  (types)   │   │ (redacted) │                        │
//! │   └────────────┘   └────────────┘                        │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Every operation is a single stateless request/response exchange. The
//! upstream rate limits (30 requests/minute, 1000/day, 50 results per
//! search) are documented on the tool surface but not enforced here.

pub mod cart;
pub mod client;
pub mod endpoint;
pub mod error;
pub mod order;
pub mod search;
pub mod types;

pub use client::{ApiClient, ApiKeys};
pub use endpoint::{Endpoint, KeyCategory};
pub use error::{ApiError, ApiResult};
pub use search::MAX_SEARCH_RECORDS;
pub use types::ApiErrorDetail;
