//! Domain event types.

use serde::{Deserialize, Serialize};

/// Domain events emitted by core services after confirmed mutations.
///
/// Events describe facts the remote service has acknowledged, never
/// optimistic local state: an optimistic removal that later rolls back emits
/// nothing.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainEvent {
    /// The user's favorites set changed on the remote service.
    FavoritesChanged {
        user_id: String,
        removed_ids: Vec<String>,
        added_ids: Vec<String>,
    },
}

impl DomainEvent {
    /// Creates a FavoritesChanged event for a confirmed removal.
    pub fn favorite_removed(user_id: String, listing_id: String) -> Self {
        Self::FavoritesChanged {
            user_id,
            removed_ids: vec![listing_id],
            added_ids: Vec::new(),
        }
    }

    /// Creates a FavoritesChanged event for a confirmed addition.
    pub fn favorite_added(user_id: String, listing_id: String) -> Self {
        Self::FavoritesChanged {
            user_id,
            removed_ids: Vec::new(),
            added_ids: vec![listing_id],
        }
    }
}
