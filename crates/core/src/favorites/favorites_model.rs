//! Favorites store state models.

use serde::{Deserialize, Serialize};

use crate::listings::Listing;

/// Sort order for the favorites feed. The feed always sorts on the lister
/// display price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    PriceAsc,
    PriceDesc,
}

/// Pagination metadata reported by the repository for one fetched page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub total: u64,
    pub page: u32,
    pub per_page: u32,
    pub total_pages: u32,
}

impl PageInfo {
    /// Whether more records remain after `accumulated` have been loaded.
    ///
    /// Always derived from the reported total, never guessed from page
    /// fullness.
    pub fn has_more(&self, accumulated: usize) -> bool {
        (accumulated as u64) < self.total
    }
}

/// One fetched page of favorites plus its pagination metadata.
#[derive(Debug, Clone)]
pub struct FavoritesFetch {
    pub listings: Vec<Listing>,
    pub pagination: PageInfo,
}

/// What the view should render for the current store state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FavoritesViewState {
    /// Initial load in flight with nothing to show yet.
    Loading,
    /// Load failed with nothing to show: blocking error panel with retry.
    Error(String),
    /// Nothing favorited: call-to-action.
    Empty,
    /// Listing grid; `FavoritesPage::error` may still carry a non-fatal
    /// message to toast.
    Loaded,
}

/// State of the favorites list store.
///
/// `items` keeps the server sort order and never holds duplicate ids; it is
/// owned exclusively by the store, all mutation goes through the store's
/// operations.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoritesPage {
    pub items: Vec<Listing>,
    /// 1-based cursor of the last successfully loaded page; 0 before the
    /// first load.
    pub current_page: u32,
    pub has_more: bool,
    pub loading: bool,
    pub error: Option<String>,
}

impl FavoritesPage {
    /// Maps the state onto the view contract: loading indicator, blocking
    /// error panel, empty-state call-to-action, or the listing grid.
    pub fn view_state(&self) -> FavoritesViewState {
        if self.items.is_empty() {
            if self.loading {
                return FavoritesViewState::Loading;
            }
            if let Some(message) = &self.error {
                return FavoritesViewState::Error(message.clone());
            }
            return FavoritesViewState::Empty;
        }
        FavoritesViewState::Loaded
    }

    /// Whether a listing with the given id is currently in the list.
    pub fn contains(&self, listing_id: &str) -> bool {
        self.items.iter().any(|listing| listing.id == listing_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_more_tracks_reported_total() {
        let info = PageInfo {
            total: 45,
            page: 1,
            per_page: 20,
            total_pages: 3,
        };
        assert!(info.has_more(20));
        assert!(info.has_more(44));
        assert!(!info.has_more(45));
    }

    #[test]
    fn test_view_state_transitions() {
        let mut page = FavoritesPage {
            loading: true,
            ..Default::default()
        };
        assert_eq!(page.view_state(), FavoritesViewState::Loading);

        page.loading = false;
        page.error = Some("boom".to_string());
        assert_eq!(
            page.view_state(),
            FavoritesViewState::Error("boom".to_string())
        );

        page.error = None;
        assert_eq!(page.view_state(), FavoritesViewState::Empty);
    }
}
