//! Favorites repository and service traits.
//!
//! The repository trait is the contract with the remote listings data
//! service; everything the store knows about the outside world goes through
//! it. The user id is an explicit argument on every call so the store can be
//! exercised with multiple simulated users and no hidden session state.

use async_trait::async_trait;

use super::favorites_model::{FavoritesFetch, FavoritesPage, SortOrder};
use crate::errors::Result;

/// Trait defining the contract for favorites repository operations.
#[async_trait]
pub trait FavoritesRepositoryTrait: Send + Sync {
    /// Fetches one page of the user's favorited listings.
    ///
    /// `page` is 1-based. Listings arrive in server sort order with ids
    /// unique across pages.
    async fn fetch_favorites(
        &self,
        user_id: &str,
        page: u32,
        per_page: u32,
        sort: SortOrder,
    ) -> Result<FavoritesFetch>;

    /// Removes a listing from the user's favorites.
    async fn remove_favorite(&self, user_id: &str, listing_id: &str) -> Result<()>;

    /// Adds a listing to the user's favorites.
    async fn add_favorite(&self, user_id: &str, listing_id: &str) -> Result<()>;

    /// Whether the user currently has the listing favorited.
    async fn is_favorited(&self, user_id: &str, listing_id: &str) -> Result<bool>;

    /// Subscribes the user to new-listing email notifications.
    async fn subscribe_new_listings(&self, user_id: &str, email: &str) -> Result<()>;
}

/// Trait defining the contract for the favorites list store.
///
/// Load operations absorb remote failures into the returned state (a
/// user-facing `error` message) instead of propagating them; only lock
/// poisoning surfaces as `Err`. Mutations return `Err` on remote failure so
/// the caller can toast, with rollback already applied.
#[async_trait]
pub trait FavoritesServiceTrait: Send + Sync {
    /// Loads page 1, replacing the whole list on success.
    async fn load(&self) -> Result<FavoritesPage>;

    /// Reloads page 1. Identical to `load` except for the surfaced message.
    async fn refresh(&self) -> Result<FavoritesPage>;

    /// Fetches the next page and appends it.
    async fn load_more(&self) -> Result<FavoritesPage>;

    /// Optimistically removes the listing, then confirms remotely; rolls the
    /// removal back if the remote rejects it. Removing an id that is not in
    /// the list is a no-op.
    async fn remove_favorite(&self, listing_id: &str) -> Result<()>;

    /// Adds the listing to the user's favorites on the remote service.
    async fn add_favorite(&self, listing_id: &str) -> Result<()>;

    /// Whether the listing is currently favorited on the remote service.
    async fn is_favorited(&self, listing_id: &str) -> Result<bool>;

    /// Subscribes the user to new-listing email notifications.
    async fn subscribe_new_listings(&self, email: &str) -> Result<()>;

    /// Snapshot of the current store state.
    fn page(&self) -> Result<FavoritesPage>;
}
