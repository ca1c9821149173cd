//! MCP Server implementation for the search API tool
//!
//! Exposes a single `search_api` tool that validates and normalizes loosely
//! typed caller input, forwards it to the configured endpoint, and returns
//! the upstream JSON or a structured error payload.

use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ErrorData as McpError,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::backend::SearchApiBackend;
use crate::coerce;
use crate::config::Config;
use crate::error::SearchError;
use crate::types::{normalize_location, ErrorPayload, QueryParams};

/// The main Search API MCP Server
#[derive(Clone)]
pub struct SearchApiMcpServer {
    backend: SearchApiBackend,
    tool_router: ToolRouter<Self>,
}

// ============================================================================
// Parameter Types
// ============================================================================

/// Caller-facing parameters for the `search_api` tool.
///
/// Fields are accepted as raw JSON values and coerced application-side, so a
/// host sending `"10"` where a number is declared degrades gracefully instead
/// of failing schema validation.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SearchApiParams {
    #[schemars(description = "Search query string. This is the main search parameter.")]
    pub q: Value,

    #[schemars(
        description = "Number of results to return. Default is 10, maximum recommended is 100."
    )]
    #[serde(default = "default_size")]
    pub size: Value,

    #[schemars(
        description = "Location filter for search results. Can be a city, state, country, or geographic area."
    )]
    #[serde(default)]
    pub location: Option<Value>,

    #[schemars(description = "Latitude coordinate for geographic search filtering.")]
    #[serde(default)]
    pub latitude: Option<Value>,

    #[schemars(description = "Longitude coordinate for geographic search filtering.")]
    #[serde(default)]
    pub longitude: Option<Value>,
}

fn default_size() -> Value {
    Value::from(10)
}

impl SearchApiParams {
    /// Coerce the loosely typed inputs into the outbound parameter set.
    ///
    /// Coercion failure degrades each field to absent; `q` and `size` remain
    /// members of the set regardless, the geographic fields do not. Location
    /// text is normalized and dropped when empty.
    pub fn to_query(&self) -> QueryParams {
        let location = self
            .location
            .as_ref()
            .and_then(coerce::to_text)
            .map(|loc| normalize_location(&loc))
            .filter(|loc| !loc.is_empty());

        QueryParams {
            q: coerce::to_text(&self.q),
            size: coerce::to_int(&self.size),
            location,
            latitude: self.latitude.as_ref().and_then(coerce::to_float),
            longitude: self.longitude.as_ref().and_then(coerce::to_float),
        }
    }
}

// ============================================================================
// Tool Router Implementation
// ============================================================================

#[tool_router]
impl SearchApiMcpServer {
    pub fn new(config: Config) -> Self {
        let backend = SearchApiBackend::new(config.search_api);

        if !backend.is_available() {
            tracing::warn!("Search endpoint URL missing or unparseable (set NB_SEARCH_URL)");
        }

        Self {
            backend,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "Search API that provides comprehensive search results with optional geographic filtering. Supports text queries with location-based refinement using either location names or coordinates."
    )]
    pub async fn search_api(
        &self,
        Parameters(params): Parameters<SearchApiParams>,
    ) -> Result<CallToolResult, McpError> {
        let query = params.to_query();

        tracing::info!(q = ?query.q, size = ?query.size, "Forwarding search request");

        let payload = match self.backend.search(&query).await {
            Ok(body) => body,
            Err(err) => {
                tracing::warn!(error = %err, "Search request failed");
                serde_json::to_value(ErrorPayload::from(err))
                    .map_err(|e| McpError::internal_error(e.to_string(), None))?
            }
        };

        let json = match serde_json::to_string_pretty(&payload) {
            Ok(json) => json,
            Err(err) => {
                let fallback = ErrorPayload::from(SearchError::Unexpected(err.to_string()));
                serde_json::to_string_pretty(&fallback)
                    .map_err(|e| McpError::internal_error(e.to_string(), None))?
            }
        };

        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

// ============================================================================
// Server Handler Implementation
// ============================================================================

#[tool_handler]
impl rmcp::ServerHandler for SearchApiMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Search API MCP Server - forwards search queries to a configured \
                 HTTP endpoint with optional location or coordinate filtering. \
                 Set NB_SEARCH_URL to the endpoint base URL."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(value: Value) -> SearchApiParams {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_router_advertises_single_search_tool() {
        let server = SearchApiMcpServer::new(Config::default());
        let tools = server.tool_router.list_all();
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].name.as_ref(), "search_api");
    }

    #[test]
    fn test_size_defaults_to_ten() {
        let params = params(json!({ "q": "coffee" }));
        let query = params.to_query();
        assert_eq!(query.q, Some("coffee".to_string()));
        assert_eq!(query.size, Some(10));
    }

    #[test]
    fn test_non_numeric_size_degrades_to_absent() {
        let params = params(json!({ "q": "coffee", "size": "lots" }));
        let query = params.to_query();
        // size stays a member of the parameter set, just absent
        assert_eq!(query.size, None);
        assert_eq!(query.q, Some("coffee".to_string()));
    }

    #[test]
    fn test_float_size_truncates() {
        let params = params(json!({ "q": "coffee", "size": 5.9 }));
        assert_eq!(params.to_query().size, Some(5));
    }

    #[test]
    fn test_location_is_normalized() {
        let params = params(json!({ "q": "pizza", "location": "San_Francisco,_CA" }));
        let query = params.to_query();
        assert_eq!(query.location, Some("San Francisco  CA".to_string()));
    }

    #[test]
    fn test_empty_location_is_dropped() {
        let params = params(json!({ "q": "pizza", "location": "" }));
        assert_eq!(params.to_query().location, None);
    }

    #[test]
    fn test_coordinates_included_only_when_coercible() {
        let coerced = params(json!({
            "q": "tacos",
            "latitude": 37.7,
            "longitude": "-122.4"
        }));
        let query = coerced.to_query();
        assert_eq!(query.latitude, Some(37.7));
        assert_eq!(query.longitude, Some(-122.4));

        let params = params(json!({ "q": "tacos", "latitude": "north" }));
        let query = params.to_query();
        assert_eq!(query.latitude, None);
        assert_eq!(query.longitude, None);
    }

    #[test]
    fn test_numeric_query_is_stringified() {
        let params = params(json!({ "q": 42 }));
        assert_eq!(params.to_query().q, Some("42".to_string()));
    }

    #[test]
    fn test_null_query_degrades_to_absent() {
        let params = params(json!({ "q": null }));
        assert_eq!(params.to_query().q, None);
    }
}
