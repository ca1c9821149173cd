//! Search failure taxonomy
//!
//! Each variant's display string is the exact message callers receive. The
//! tool boundary converts these into an [`ErrorPayload`] result rather than a
//! protocol-level fault, so the hosting runtime never sees a search failure
//! as anything but a normal structured return value.

use thiserror::Error;

use crate::types::ErrorPayload;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("API request failed with status code: {0}")]
    Status(u16),

    #[error("Request timeout - API took too long to respond")]
    Timeout,

    #[error("Connection error - Unable to connect to the API")]
    Connect,

    #[error("Request error: {0}")]
    Request(String),

    #[error("JSON parsing error: {0}")]
    Parse(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl SearchError {
    /// Upstream HTTP status code, for HTTP-level failures only.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status(code) => Some(*code),
            _ => None,
        }
    }
}

impl From<SearchError> for ErrorPayload {
    fn from(err: SearchError) -> Self {
        Self {
            status_code: err.status_code(),
            error: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        // A timed-out connect reports both flags; timeout wins
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            Self::Connect
        } else {
            Self::Request(err.to_string())
        }
    }
}
