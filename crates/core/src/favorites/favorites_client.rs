//! Remote favorites repository - facade over the listings-data crate.
//!
//! This is the only place where wire records become canonical listings. The
//! conversion is a fixed field-for-field table: option-set strings parse
//! into their enums with documented fallbacks, everything else copies over.

use async_trait::async_trait;
use log::debug;

use staylist_listings_data::{
    ClientConfig, ListingRecord, ListingSort, ListingsApiClient, PageInfo as WirePageInfo,
};

use super::favorites_model::{FavoritesFetch, PageInfo, SortOrder};
use super::favorites_traits::FavoritesRepositoryTrait;
use crate::errors::Result;
use crate::listings::{
    CancellationPolicy, GeographicAddress, KitchenType, Listing, ListingAvailability,
    ListingFeatures, ListingLocation, ListingPhoto, PricingList, SpaceType,
};

/// Favorites repository backed by the listings data service.
pub struct RemoteFavoritesRepository {
    client: ListingsApiClient,
}

impl RemoteFavoritesRepository {
    /// Wraps an already-configured API client.
    pub fn new(client: ListingsApiClient) -> Self {
        Self { client }
    }

    /// Builds a repository configured from environment variables.
    pub fn from_env() -> Self {
        Self::new(ListingsApiClient::new(ClientConfig::from_env()))
    }
}

#[async_trait]
impl FavoritesRepositoryTrait for RemoteFavoritesRepository {
    async fn fetch_favorites(
        &self,
        user_id: &str,
        page: u32,
        per_page: u32,
        sort: SortOrder,
    ) -> Result<FavoritesFetch> {
        let fetched = self
            .client
            .fetch_favorited_listings(user_id, page, per_page, sort_to_wire(sort))
            .await?;

        Ok(FavoritesFetch {
            listings: fetched
                .listings
                .into_iter()
                .map(listing_from_record)
                .collect(),
            pagination: page_info_from_wire(fetched.pagination),
        })
    }

    async fn remove_favorite(&self, user_id: &str, listing_id: &str) -> Result<()> {
        self.client.remove_favorite(user_id, listing_id).await?;
        Ok(())
    }

    async fn add_favorite(&self, user_id: &str, listing_id: &str) -> Result<()> {
        self.client.add_favorite(user_id, listing_id).await?;
        Ok(())
    }

    async fn is_favorited(&self, user_id: &str, listing_id: &str) -> Result<bool> {
        let favorited = self.client.fetch_favorited_ids(user_id).await?;
        Ok(favorited.iter().any(|id| id == listing_id))
    }

    async fn subscribe_new_listings(&self, user_id: &str, email: &str) -> Result<()> {
        self.client.subscribe_new_listings(user_id, email).await?;
        Ok(())
    }
}

fn sort_to_wire(sort: SortOrder) -> ListingSort {
    match sort {
        SortOrder::PriceAsc => ListingSort::PriceAsc,
        SortOrder::PriceDesc => ListingSort::PriceDesc,
    }
}

fn page_info_from_wire(info: WirePageInfo) -> PageInfo {
    PageInfo {
        total: info.total,
        page: info.page,
        per_page: info.per_page,
        total_pages: info.total_pages,
    }
}

/// Fixed field-for-field mapping from a wire record to the canonical
/// listing. No business logic beyond option-set fallbacks lives here.
fn listing_from_record(record: ListingRecord) -> Listing {
    let type_of_space = match record.type_of_space.as_deref() {
        None => SpaceType::default(),
        Some(value) => SpaceType::from_wire(value).unwrap_or_else(|| {
            debug!("unknown space type '{}', defaulting", value);
            SpaceType::default()
        }),
    };
    let kitchen_type = record
        .kitchen_type
        .as_deref()
        .and_then(|value| match KitchenType::from_wire(value) {
            Some(kitchen) => Some(kitchen),
            None => {
                debug!("unknown kitchen type '{}', dropping", value);
                None
            }
        });
    let cancellation_policy = CancellationPolicy::from_wire(&record.cancellation_policy)
        .unwrap_or_else(|| {
            debug!(
                "unknown cancellation policy '{}', defaulting",
                record.cancellation_policy
            );
            CancellationPolicy::default()
        });

    Listing {
        id: record.id,
        name: record.name,
        active: record.active,
        approved: record.approved,
        listing_code: record.listing_code,
        features: ListingFeatures {
            qty_bedrooms: record.qty_bedrooms,
            qty_bathrooms: record.qty_bathrooms,
            qty_beds: record.qty_beds,
            qty_guests: record.qty_guests,
            sqft_area: record.sqft_area,
            type_of_space,
            photos: record
                .photos
                .into_iter()
                .map(|photo| ListingPhoto {
                    url: photo.url,
                    order: photo.order,
                    alt_text: photo.alt_text,
                })
                .collect(),
        },
        kitchen_type,
        location: ListingLocation {
            address: GeographicAddress {
                address: record.address.address,
                lat: record.address.lat,
                lng: record.address.lng,
            },
            borough: record.borough,
            hood: record.hood,
            city: record.city,
            state: record.state,
            zip_code: record.zip_code,
        },
        availability: ListingAvailability {
            first_available: record.first_available,
            last_available: record.last_available,
            nights_available: record.nights_available,
        },
        lister_price_display: record.lister_price_display,
        pricing_list: PricingList {
            starting_nightly_price: record.starting_nightly_price,
            weekly_price: record.weekly_price,
            monthly_price: record.monthly_price,
            currency: record.currency,
        },
        cancellation_policy,
        check_in_time: record.check_in_time,
        check_out_time: record.check_out_time,
        created_at: record.created,
        updated_at: record.modified,
        // The feed only ever returns favorited records.
        is_favorited: true,
    }
}
