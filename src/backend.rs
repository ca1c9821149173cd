//! Upstream search endpoint client
//!
//! Issues the single outbound GET per tool invocation and classifies the
//! outcome into [`SearchError`] branches. No retries, no caching.

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use url::Url;

use crate::config::SearchApiConfig;
use crate::error::SearchError;
use crate::types::QueryParams;

/// Search endpoint client
#[derive(Clone)]
pub struct SearchApiBackend {
    client: Client,
    config: SearchApiConfig,
}

impl SearchApiBackend {
    pub fn new(config: SearchApiConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(&config.user_agent)
            .build()
            .expect("Failed to build HTTP client");

        Self { client, config }
    }

    /// Check if the endpoint is configured with a parseable URL
    pub fn is_available(&self) -> bool {
        !self.config.url.is_empty() && Url::parse(&self.config.url).is_ok()
    }

    /// Forward a search request to the configured endpoint.
    ///
    /// A successful response body is returned verbatim as decoded JSON; every
    /// failure maps to exactly one [`SearchError`] branch. An unconfigured or
    /// malformed URL surfaces here as a request error, not earlier.
    pub async fn search(&self, params: &QueryParams) -> Result<Value, SearchError> {
        let response = self
            .client
            .get(&self.config.url)
            .query(params)
            .send()
            .await?;

        // Upstream contract treats anything but 200 as a failure
        let status = response.status();
        if status.as_u16() != 200 {
            return Err(SearchError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| SearchError::Parse(e.to_string()))
    }
}
