//! Error types for the listings data crate.

use thiserror::Error;

/// Errors that can occur while talking to the listings data service.
///
/// The domain layer collapses all of these into a single surfaced failure
/// kind; the variants exist so logs keep enough detail to tell a rate limit
/// from a decode problem.
#[derive(Error, Debug)]
pub enum ListingsDataError {
    /// The requested record does not exist on the data service.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// The data service rate limited the request (HTTP 429).
    #[error("Rate limited by listings data service")]
    RateLimited,

    /// The request timed out before the service responded.
    #[error("Timeout calling {endpoint}")]
    Timeout {
        /// The endpoint path that timed out
        endpoint: String,
    },

    /// The service answered with a non-success status.
    #[error("Data service error: {status} - {message}")]
    Api {
        /// HTTP status code returned by the service
        status: u16,
        /// Response body or status text
        message: String,
    },

    /// The response body could not be decoded into the expected shape.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// A network error occurred while communicating with the service.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl ListingsDataError {
    /// Classifies a non-success HTTP status into an error variant.
    pub fn from_status(status: u16, endpoint: &str, message: String) -> Self {
        match status {
            404 => Self::NotFound(endpoint.to_string()),
            429 => Self::RateLimited,
            _ => Self::Api { status, message },
        }
    }

    /// Wraps a reqwest error, promoting timeouts to the `Timeout` variant.
    pub fn from_reqwest(err: reqwest::Error, endpoint: &str) -> Self {
        if err.is_timeout() {
            Self::Timeout {
                endpoint: endpoint.to_string(),
            }
        } else {
            Self::Network(err)
        }
    }
}
