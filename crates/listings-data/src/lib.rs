//! Staylist Listings Data Crate
//!
//! This crate is the wire client for the listings data service. It is the
//! only place in the workspace that knows the remote schema: endpoint paths,
//! query constraints, auth headers, and the loosely-typed record format the
//! service returns.
//!
//! # Overview
//!
//! The listings data crate supports:
//! - Querying a user's favorited listings with pagination and sorting
//! - Favorite mutations (add / remove) via the workflow API
//! - Favorite-status lookups against the user record
//! - Total raw-to-record field mapping with named defaults
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +------------------+
//! |   Domain Layer   | --> | ListingsApiClient|  (HTTP, auth, timeouts)
//! +------------------+     +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |    RawListing    |  (loose remote payload)
//!                          +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |  ListingRecord   |  (typed wire record)
//!                          +------------------+
//! ```
//!
//! Raw payload fields that are absent or carry an unexpected JSON type decode
//! to documented defaults; a single malformed field never fails a whole page.

pub mod client;
pub mod config;
pub mod errors;
pub mod models;

pub use client::ListingsApiClient;
pub use config::ClientConfig;
pub use errors::ListingsDataError;
pub use models::{
    AddressRecord, FavoritedListings, ListingRecord, ListingSort, PageInfo, PhotoRecord,
    RawListing,
};
