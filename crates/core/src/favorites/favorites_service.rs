//! Favorites list store.
//!
//! A state machine over `{loading, error, items, current_page, has_more}`.
//! All transitions happen atomically under the state lock; network calls are
//! the only suspension points and never hold the lock. Responses are keyed
//! to a generation counter so a response that lost the race to a newer
//! load is discarded instead of clobbering fresher state.

use log::{debug, info, warn};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock, RwLockWriteGuard};

use super::favorites_constants::{
    DEFAULT_PER_PAGE, LOAD_ERROR_MESSAGE, LOAD_MORE_ERROR_MESSAGE, REFRESH_ERROR_MESSAGE,
};
use super::favorites_model::{FavoritesPage, SortOrder};
use super::favorites_traits::{FavoritesRepositoryTrait, FavoritesServiceTrait};
use crate::errors::{Error, Result};
use crate::events::{DomainEvent, DomainEventSink, NoOpDomainEventSink};
use crate::listings::Listing;

/// Pre-mutation snapshot captured by an optimistic removal. Applying it is
/// the exact inverse of the removal.
struct RemovalSnapshot {
    index: usize,
    listing: Listing,
}

/// Service owning the favorites list for one user session.
pub struct FavoritesService {
    repository: Arc<dyn FavoritesRepositoryTrait>,
    /// Explicit session user; passed into every repository call.
    user_id: String,
    sort: SortOrder,
    per_page: u32,
    state: Arc<RwLock<FavoritesPage>>,
    /// Generation of the newest issued load/load-more request. A response
    /// is applied only while its generation is still the newest.
    generation: AtomicU64,
    event_sink: Arc<dyn DomainEventSink>,
}

impl FavoritesService {
    /// Creates a store for the given user backed by the given repository.
    pub fn new(repository: Arc<dyn FavoritesRepositoryTrait>, user_id: impl Into<String>) -> Self {
        Self {
            repository,
            user_id: user_id.into(),
            sort: SortOrder::default(),
            per_page: DEFAULT_PER_PAGE,
            state: Arc::new(RwLock::new(FavoritesPage::default())),
            generation: AtomicU64::new(0),
            event_sink: Arc::new(NoOpDomainEventSink),
        }
    }

    /// Sets the feed sort order.
    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    /// Sets the page size.
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    /// Sets the domain event sink for this service.
    pub fn with_event_sink(mut self, event_sink: Arc<dyn DomainEventSink>) -> Self {
        self.event_sink = event_sink;
        self
    }

    fn write_state(&self) -> Result<RwLockWriteGuard<'_, FavoritesPage>> {
        self.state
            .write()
            .map_err(|e| Error::Unexpected(format!("favorites state lock poisoned: {e}")))
    }

    /// Issues a new request generation, superseding everything in flight.
    fn next_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }

    /// Shared implementation of load and refresh: fetch page 1 and replace
    /// the list wholesale on success.
    async fn load_first_page(&self, failure_message: &str) -> Result<FavoritesPage> {
        let generation = self.next_generation();
        {
            let mut state = self.write_state()?;
            state.loading = true;
            state.error = None;
        }

        debug!(
            "loading favorites page 1 for user {} (generation {})",
            self.user_id, generation
        );
        let result = self
            .repository
            .fetch_favorites(&self.user_id, 1, self.per_page, self.sort)
            .await;

        let mut state = self.write_state()?;
        if !self.is_current(generation) {
            debug!("discarding superseded load response (generation {})", generation);
            return Ok(state.clone());
        }

        match result {
            Ok(fetch) => {
                state.has_more = fetch.pagination.has_more(fetch.listings.len());
                state.items = fetch.listings;
                state.current_page = 1;
                state.loading = false;
                state.error = None;
                info!(
                    "loaded {} favorite listings for user {}",
                    state.items.len(),
                    self.user_id
                );
            }
            Err(e) => {
                warn!("failed to load favorites for user {}: {}", self.user_id, e);
                state.loading = false;
                state.error = Some(failure_message.to_string());
            }
        }
        Ok(state.clone())
    }
}

#[async_trait::async_trait]
impl FavoritesServiceTrait for FavoritesService {
    async fn load(&self) -> Result<FavoritesPage> {
        self.load_first_page(LOAD_ERROR_MESSAGE).await
    }

    async fn refresh(&self) -> Result<FavoritesPage> {
        self.load_first_page(REFRESH_ERROR_MESSAGE).await
    }

    async fn load_more(&self) -> Result<FavoritesPage> {
        let generation = self.next_generation();
        let next_page = self.page()?.current_page + 1;

        debug!(
            "loading favorites page {} for user {} (generation {})",
            next_page, self.user_id, generation
        );
        let result = self
            .repository
            .fetch_favorites(&self.user_id, next_page, self.per_page, self.sort)
            .await;

        let mut state = self.write_state()?;
        if !self.is_current(generation) {
            debug!(
                "discarding superseded load-more response (generation {})",
                generation
            );
            return Ok(state.clone());
        }

        match result {
            Ok(fetch) => {
                state.items.extend(fetch.listings);
                state.current_page = next_page;
                state.has_more = fetch.pagination.has_more(state.items.len());
                info!(
                    "appended page {}, {} favorite listings total",
                    next_page,
                    state.items.len()
                );
            }
            Err(e) => {
                // A failed load-more never rolls back what is already loaded.
                warn!(
                    "failed to load page {} for user {}: {}",
                    next_page, self.user_id, e
                );
                state.error = Some(LOAD_MORE_ERROR_MESSAGE.to_string());
            }
        }
        Ok(state.clone())
    }

    async fn remove_favorite(&self, listing_id: &str) -> Result<()> {
        let snapshot = {
            let mut state = self.write_state()?;
            let Some(index) = state
                .items
                .iter()
                .position(|listing| listing.id == listing_id)
            else {
                debug!(
                    "remove_favorite: listing {} not in the list, nothing to do",
                    listing_id
                );
                return Ok(());
            };
            let listing = state.items.remove(index);
            RemovalSnapshot { index, listing }
        };

        match self
            .repository
            .remove_favorite(&self.user_id, listing_id)
            .await
        {
            Ok(()) => {
                info!(
                    "removed listing {} from favorites of user {}",
                    listing_id, self.user_id
                );
                self.event_sink.emit(DomainEvent::favorite_removed(
                    self.user_id.clone(),
                    listing_id.to_string(),
                ));
                Ok(())
            }
            Err(e) => {
                warn!(
                    "failed to remove listing {} from favorites, rolling back: {}",
                    listing_id, e
                );
                let mut state = self.write_state()?;
                // A refresh racing the removal may already have brought the
                // listing back; never create a duplicate id.
                if !state.contains(&snapshot.listing.id) {
                    let index = snapshot.index.min(state.items.len());
                    state.items.insert(index, snapshot.listing);
                }
                Err(e)
            }
        }
    }

    async fn add_favorite(&self, listing_id: &str) -> Result<()> {
        self.repository
            .add_favorite(&self.user_id, listing_id)
            .await?;
        info!(
            "added listing {} to favorites of user {}",
            listing_id, self.user_id
        );
        self.event_sink.emit(DomainEvent::favorite_added(
            self.user_id.clone(),
            listing_id.to_string(),
        ));
        Ok(())
    }

    async fn is_favorited(&self, listing_id: &str) -> Result<bool> {
        self.repository
            .is_favorited(&self.user_id, listing_id)
            .await
    }

    async fn subscribe_new_listings(&self, email: &str) -> Result<()> {
        self.repository
            .subscribe_new_listings(&self.user_id, email)
            .await
    }

    fn page(&self) -> Result<FavoritesPage> {
        Ok(self
            .state
            .read()
            .map_err(|e| Error::Unexpected(format!("favorites state lock poisoned: {e}")))?
            .clone())
    }
}
