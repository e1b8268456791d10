//! Stay-length price tiering engine.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::pricing_constants::{MONTHLY_STAY_MIN_NIGHTS, WEEKLY_STAY_MIN_NIGHTS};
use crate::listings::Listing;

/// Returns the displayed nightly price for a stay of `nights` nights.
///
/// - 30+ nights: 20% off, floored to a whole amount
/// - 7-29 nights: 10% off, floored to a whole amount
/// - below 7 nights (including non-positive): the base price unchanged
pub fn calculate_dynamic_price(base_price: Decimal, nights: i64) -> Decimal {
    let discounted = if nights >= MONTHLY_STAY_MIN_NIGHTS {
        base_price * dec!(0.8)
    } else if nights >= WEEKLY_STAY_MIN_NIGHTS {
        base_price * dec!(0.9)
    } else {
        return base_price;
    };
    discounted.floor()
}

/// Reprices every listing's displayed nightly price from its lister price
/// for the given stay length.
///
/// Produces fresh copies so the store's authoritative items keep their
/// untiered input price; call again whenever the selected nights change, the
/// result is never cached against a stale stay length.
pub fn repriced(listings: &[Listing], nights: i64) -> Vec<Listing> {
    listings
        .iter()
        .map(|listing| {
            let mut priced = listing.clone();
            priced.pricing_list.starting_nightly_price =
                calculate_dynamic_price(listing.lister_price_display, nights);
            priced
        })
        .collect()
}
