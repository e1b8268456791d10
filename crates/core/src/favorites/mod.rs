//! Favorites module - the favorites list store, its traits, and the remote
//! repository adapter.

mod favorites_client;
mod favorites_constants;
mod favorites_model;
mod favorites_service;
mod favorites_traits;

// Re-export the public interface
pub use favorites_client::RemoteFavoritesRepository;
pub use favorites_constants::*;
pub use favorites_model::{FavoritesFetch, FavoritesPage, FavoritesViewState, PageInfo, SortOrder};
pub use favorites_service::FavoritesService;
pub use favorites_traits::{FavoritesRepositoryTrait, FavoritesServiceTrait};
