//! Typed wire records produced by the raw-payload mapping.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Sort order accepted by the favorited-listings query.
///
/// The data service sorts on the lister display price; the flag only
/// controls direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingSort {
    #[default]
    PriceAsc,
    PriceDesc,
}

impl ListingSort {
    /// Whether the data service should sort descending.
    pub fn descending(&self) -> bool {
        matches!(self, ListingSort::PriceDesc)
    }
}

/// Pagination metadata reported alongside a page of listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    /// Total matching records on the service.
    pub total: u64,
    /// 1-based page number this response covers.
    pub page: u32,
    /// Requested page size.
    pub per_page: u32,
    /// Total pages at this page size.
    pub total_pages: u32,
}

impl PageInfo {
    /// Derives page metadata from the service-reported total.
    pub fn compute(total: u64, page: u32, per_page: u32) -> Self {
        let total_pages = if per_page == 0 {
            0
        } else {
            total.div_ceil(per_page as u64) as u32
        };
        Self {
            total,
            page,
            per_page,
            total_pages,
        }
    }
}

/// One page of favorited listings plus its pagination metadata.
#[derive(Debug, Clone)]
pub struct FavoritedListings {
    pub listings: Vec<ListingRecord>,
    pub pagination: PageInfo,
}

/// A photo attached to a listing, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoRecord {
    pub url: String,
    pub order: u32,
    pub alt_text: Option<String>,
}

/// Geocoded street address of a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressRecord {
    pub address: String,
    pub lat: f64,
    pub lng: f64,
}

/// Typed wire record for a single listing.
///
/// Every field is the result of the fixed raw-to-record mapping in
/// [`RawListing::to_record`](crate::models::RawListing::to_record); optional
/// fields stay optional, everything else carries its documented default.
/// Enumerated values (space type, kitchen type, cancellation policy) are kept
/// as the service's strings; the domain layer owns the enum conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingRecord {
    pub id: String,
    pub name: String,
    pub active: bool,
    pub approved: bool,
    pub listing_code: String,

    pub qty_bedrooms: u32,
    pub qty_bathrooms: Decimal,
    pub qty_beds: u32,
    pub qty_guests: u32,
    pub sqft_area: Option<u32>,
    pub type_of_space: Option<String>,
    pub kitchen_type: Option<String>,
    pub photos: Vec<PhotoRecord>,

    pub address: AddressRecord,
    pub borough: Option<String>,
    pub hood: Option<String>,
    pub city: Option<String>,
    pub state: String,
    pub zip_code: String,

    pub first_available: Option<DateTime<Utc>>,
    pub last_available: Option<DateTime<Utc>>,
    pub nights_available: u32,

    pub lister_price_display: Decimal,
    pub starting_nightly_price: Decimal,
    pub weekly_price: Option<Decimal>,
    pub monthly_price: Option<Decimal>,
    pub currency: String,

    pub check_in_time: String,
    pub check_out_time: String,
    pub cancellation_policy: String,

    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}
