//! mouser-mcp: MCP server for the Mouser Electronics API
//!
//! This library exposes the Mouser Electronics parts-search, cart, and order
//! REST API as callable tools for AI assistants via the Model Context
//! Protocol.
//!
//! # Architecture
//!
//! The server is a thin, stateless bridge:
//!
//! - **Tool layer**: translates MCP tool calls into domain operations
//! - **Domain operations**: one request-shaping adapter per upstream operation
//! - **Dispatcher**: builds and sends the HTTP request, attaching the API key
//!   for the endpoint's category as the `apiKey` query parameter
//!
//! Mouser issues two independent API keys: one for the Part Search API and
//! one for the Order/Cart API. Every endpoint is mapped to its key category
//! through an enumerated table rather than path-string matching, so a call
//! can never go out with the wrong credential.
//!
//! # Modules
//!
//! - [`config`]: Environment-sourced configuration
//! - [`error`]: Startup error types
//! - [`mcp`]: MCP protocol implementation
//! - [`mouser`]: Mouser API client and domain operations

pub mod config;
pub mod error;
pub mod mcp;
pub mod mouser;
