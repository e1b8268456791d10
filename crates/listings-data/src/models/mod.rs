//! Wire models for the listings data service.

mod raw;
mod record;

pub use raw::{RawListing, RawListingQueryResponse, RawQueryResults, RawUser, RawUserResponse};
pub use record::{
    AddressRecord, FavoritedListings, ListingRecord, ListingSort, PageInfo, PhotoRecord,
};
