//! Search API MCP Library
//!
//! Exposes a single `search_api` tool that forwards a query (plus optional
//! pagination and geographic filters) to a configured search endpoint over
//! HTTP GET and returns the parsed response or a structured error payload.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use search_api_mcp::{Config, SearchApiMcpServer};
//!
//! let server = SearchApiMcpServer::new(Config::load()?);
//! // Use with in-memory transport or serve via stdio
//! ```
//!
//! # Configuration
//! Set `NB_SEARCH_URL` env var or configure in `~/.config/search-api-mcp/config.toml`

pub mod backend;
pub mod coerce;
pub mod config;
pub mod error;
pub mod logging;
pub mod server;
pub mod types;

// Re-export main server type
pub use server::SearchApiMcpServer;

// Re-export parameter and payload types for direct API usage
pub use config::Config;
pub use server::SearchApiParams;
pub use types::{ErrorPayload, QueryParams};
