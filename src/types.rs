//! Request and response payload types for the search tool

use serde::{Deserialize, Serialize};

/// Outbound query parameter set for the upstream search endpoint.
///
/// `q` and `size` are unconditional members of the set: when coercion left
/// them absent they stay `None` and are dropped only at URL encoding. The
/// geographic fields are excluded from the set entirely when absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryParams {
    pub q: Option<String>,
    pub size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

/// Error payload returned to the caller in place of search results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorPayload {
    /// Human-readable error message
    pub error: String,
    /// Upstream HTTP status code, present only for HTTP-level failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
}

/// Normalize a human-entered place name: every underscore and comma becomes
/// a single space (`"San_Francisco,_CA"` -> `"San Francisco  CA"`).
pub fn normalize_location(location: &str) -> String {
    location.replace('_', " ").replace(',', " ")
}
