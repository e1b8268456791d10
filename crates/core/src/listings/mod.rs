//! Listings module - canonical listing domain models.

mod listings_model;

// Re-export the public interface
pub use listings_model::{
    CancellationPolicy, GeographicAddress, KitchenType, Listing, ListingAvailability,
    ListingFeatures, ListingLocation, ListingPhoto, PricingList, SpaceType,
};
