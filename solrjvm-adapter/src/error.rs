//! Error types for the Solr adapter.

use thiserror::Error;

/// Errors that can occur when fetching metrics from Solr.
///
/// Every variant aborts the current poll cycle; no partial metrics are
/// returned alongside an error.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The base URL could not be turned into a request.
    #[error("Invalid request: {0}")]
    RequestConstruction(String),

    /// Connecting, sending or reading the response failed.
    #[error("Network error: {0}")]
    Network(String),

    /// The response body did not match the metrics schema.
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            FetchError::RequestConstruction(err.to_string())
        } else if err.is_timeout() {
            FetchError::Network(format!("request timed out: {}", err))
        } else {
            FetchError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}
