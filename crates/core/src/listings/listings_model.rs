//! Listing domain models.
//!
//! A `Listing` is immutable per fetch: it is created by the repository's
//! response mapping, lives while it is part of the favorites list, and is
//! replaced wholesale on refresh. Only the favorites store mutates the
//! collection it belongs to.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// What kind of space a listing offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SpaceType {
    #[default]
    #[serde(rename = "Entire Place")]
    EntirePlace,
    #[serde(rename = "Private Room")]
    PrivateRoom,
    #[serde(rename = "Shared Room")]
    SharedRoom,
}

impl SpaceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpaceType::EntirePlace => "Entire Place",
            SpaceType::PrivateRoom => "Private Room",
            SpaceType::SharedRoom => "Shared Room",
        }
    }

    /// Parses the data service's option-set string.
    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "Entire Place" => Some(SpaceType::EntirePlace),
            "Private Room" => Some(SpaceType::PrivateRoom),
            "Shared Room" => Some(SpaceType::SharedRoom),
            _ => None,
        }
    }
}

/// Kitchen option set. The display formatter prints these verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KitchenType {
    #[serde(rename = "Full Kitchen")]
    FullKitchen,
    #[serde(rename = "Kitchenette")]
    Kitchenette,
    #[serde(rename = "No Kitchen")]
    NoKitchen,
    #[serde(rename = "Shared Kitchen")]
    SharedKitchen,
}

impl KitchenType {
    pub fn as_str(&self) -> &'static str {
        match self {
            KitchenType::FullKitchen => "Full Kitchen",
            KitchenType::Kitchenette => "Kitchenette",
            KitchenType::NoKitchen => "No Kitchen",
            KitchenType::SharedKitchen => "Shared Kitchen",
        }
    }

    /// Parses the data service's option-set string.
    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "Full Kitchen" => Some(KitchenType::FullKitchen),
            "Kitchenette" => Some(KitchenType::Kitchenette),
            "No Kitchen" => Some(KitchenType::NoKitchen),
            "Shared Kitchen" => Some(KitchenType::SharedKitchen),
            _ => None,
        }
    }
}

/// Cancellation policy option set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CancellationPolicy {
    #[default]
    Flexible,
    Moderate,
    Strict,
}

impl CancellationPolicy {
    /// Parses the data service's option-set string.
    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "Flexible" => Some(CancellationPolicy::Flexible),
            "Moderate" => Some(CancellationPolicy::Moderate),
            "Strict" => Some(CancellationPolicy::Strict),
            _ => None,
        }
    }
}

/// A photo attached to a listing. Photos form an ordered sequence the view
/// can page through independently of listing pagination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingPhoto {
    pub url: String,
    pub order: u32,
    pub alt_text: Option<String>,
}

/// Geocoded street address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GeographicAddress {
    pub address: String,
    pub lat: f64,
    pub lng: f64,
}

/// Structured features of a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListingFeatures {
    pub qty_bedrooms: u32,
    /// Bathrooms can be half counts (1.5, 2.5, ...).
    pub qty_bathrooms: Decimal,
    pub qty_beds: u32,
    pub qty_guests: u32,
    pub sqft_area: Option<u32>,
    pub type_of_space: SpaceType,
    pub photos: Vec<ListingPhoto>,
}

/// Where a listing is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListingLocation {
    pub address: GeographicAddress,
    pub borough: Option<String>,
    pub hood: Option<String>,
    pub city: Option<String>,
    pub state: String,
    pub zip_code: String,
}

/// Availability window of a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListingAvailability {
    pub first_available: Option<DateTime<Utc>>,
    pub last_available: Option<DateTime<Utc>>,
    pub nights_available: u32,
}

/// Pricing attached to a listing. `starting_nightly_price` is the displayed
/// nightly price and is recomputed by the price tiering engine whenever the
/// selected stay length changes; `lister_price_display` on the listing is
/// the untiered input it is derived from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PricingList {
    pub starting_nightly_price: Decimal,
    pub weekly_price: Option<Decimal>,
    pub monthly_price: Option<Decimal>,
    pub currency: String,
}

/// Domain model representing a favorited listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub name: String,
    pub active: bool,
    pub approved: bool,
    pub listing_code: String,
    pub features: ListingFeatures,
    pub kitchen_type: Option<KitchenType>,
    pub location: ListingLocation,
    pub availability: ListingAvailability,
    /// Untiered nightly price set by the lister; input to price tiering.
    pub lister_price_display: Decimal,
    pub pricing_list: PricingList,
    pub cancellation_policy: CancellationPolicy,
    pub check_in_time: String,
    pub check_out_time: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Always true for records obtained through the favorites feed.
    pub is_favorited: bool,
}

impl Listing {
    /// Validates the listing invariants that the mapping cannot encode in
    /// the type system.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "id".to_string(),
            )));
        }
        if self.features.qty_bathrooms < Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Bathroom count cannot be negative".to_string(),
            )));
        }
        if self.pricing_list.starting_nightly_price < Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Nightly price cannot be negative".to_string(),
            )));
        }
        Ok(())
    }
}
