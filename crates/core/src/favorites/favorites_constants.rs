/// Default page size for the favorites feed.
pub const DEFAULT_PER_PAGE: u32 = 20;

/// Surfaced when the initial load of the favorites list fails.
pub const LOAD_ERROR_MESSAGE: &str =
    "Failed to load your favorite listings. Please try again.";

/// Surfaced when a refresh of an already-loaded list fails.
pub const REFRESH_ERROR_MESSAGE: &str = "Failed to refresh listings. Please try again.";

/// Surfaced when fetching the next page fails.
pub const LOAD_MORE_ERROR_MESSAGE: &str = "Failed to load more listings. Please try again.";

/// Surfaced when an optimistic removal has to be rolled back.
pub const REMOVE_ERROR_MESSAGE: &str = "Failed to remove from favorites. Please try again.";

/// Shown by the view when the list is empty with no error.
pub const EMPTY_STATE_MESSAGE: &str = "You don't have any favorite listings yet. \
We invite you to search listings and submit proposals with the weekly schedule you have in mind";
