//! Core error types for the Staylist favorites client.
//!
//! This module defines transport-agnostic error types. Wire-level errors
//! (from the listings data service) are wrapped by the root error so that
//! services surface a single failure kind to callers.

use thiserror::Error;

use staylist_listings_data::ListingsDataError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the favorites client.
#[derive(Error, Debug)]
pub enum Error {
    /// The listings data service rejected, timed out, or failed a request.
    /// This is the only error kind surfaced to the user; it carries no
    /// retry metadata, retry is a manual refresh.
    #[error("Listings data service error: {0}")]
    ListingsData(#[from] ListingsDataError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse date/time: {0}")]
    DateTimeParse(#[from] chrono::ParseError),
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
