//! Search API MCP Server
//!
//! Forwards search queries to a configured HTTP search endpoint.
//!
//! # Configuration
//! Set `NB_SEARCH_URL` env var or configure in `~/.config/search-api-mcp/config.toml`

use rmcp::{transport::stdio, ServiceExt};

mod backend;
mod coerce;
mod config;
mod error;
mod logging;
mod server;
mod types;

use config::Config;
use server::SearchApiMcpServer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_tracing()?;

    tracing::info!("Starting Search API MCP Server");

    let config = Config::load()?;
    tracing::info!("Search endpoint URL: {}", config.search_api.url);

    let server = SearchApiMcpServer::new(config);
    let service = server.serve(stdio()).await?;

    tracing::info!("Server running, waiting for requests...");
    service.waiting().await?;

    tracing::info!("Server shutting down");
    Ok(())
}
