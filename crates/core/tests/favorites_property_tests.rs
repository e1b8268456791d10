//! Property-based tests for the favorites core.
//!
//! These tests verify that universal properties hold across all valid
//! inputs, using the `proptest` crate for random test case generation.

use async_trait::async_trait;
use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;
use std::collections::HashSet;
use std::sync::Arc;

use staylist_core::errors::{Error, Result};
use staylist_core::favorites::{
    FavoritesFetch, FavoritesRepositoryTrait, FavoritesService, FavoritesServiceTrait, PageInfo,
    SortOrder,
};
use staylist_core::listings::{Listing, ListingFeatures, PricingList};
use staylist_core::pricing::calculate_dynamic_price;
use staylist_core::schedule::StaySchedule;

// =============================================================================
// Mock repository
// =============================================================================

/// Repository serving a fixed collection in a single page, with a
/// configurable set of listings whose removal the remote rejects.
struct FixedRepository {
    listings: Vec<Listing>,
    failing_removals: HashSet<String>,
}

#[async_trait]
impl FavoritesRepositoryTrait for FixedRepository {
    async fn fetch_favorites(
        &self,
        _user_id: &str,
        page: u32,
        per_page: u32,
        _sort: SortOrder,
    ) -> Result<FavoritesFetch> {
        Ok(FavoritesFetch {
            listings: self.listings.clone(),
            pagination: PageInfo {
                total: self.listings.len() as u64,
                page,
                per_page,
                total_pages: 1,
            },
        })
    }

    async fn remove_favorite(&self, _user_id: &str, listing_id: &str) -> Result<()> {
        if self.failing_removals.contains(listing_id) {
            return Err(Error::Repository(format!(
                "removal of {} rejected",
                listing_id
            )));
        }
        Ok(())
    }

    async fn add_favorite(&self, _user_id: &str, _listing_id: &str) -> Result<()> {
        Ok(())
    }

    async fn is_favorited(&self, _user_id: &str, listing_id: &str) -> Result<bool> {
        Ok(self.listings.iter().any(|l| l.id == listing_id))
    }

    async fn subscribe_new_listings(&self, _user_id: &str, _email: &str) -> Result<()> {
        Ok(())
    }
}

fn make_listing(id: &str, price: Decimal) -> Listing {
    Listing {
        id: id.to_string(),
        name: format!("Listing {}", id),
        active: true,
        approved: true,
        listing_code: String::new(),
        features: ListingFeatures::default(),
        kitchen_type: None,
        location: Default::default(),
        availability: Default::default(),
        lister_price_display: price,
        pricing_list: PricingList {
            starting_nightly_price: price,
            weekly_price: None,
            monthly_price: None,
            currency: "USD".to_string(),
        },
        cancellation_policy: Default::default(),
        check_in_time: "2:00 pm".to_string(),
        check_out_time: "11:00 am".to_string(),
        created_at: chrono::Utc::now(),
        updated_at: chrono::Utc::now(),
        is_favorited: true,
    }
}

// =============================================================================
// Generators
// =============================================================================

fn arb_price() -> impl Strategy<Value = Decimal> {
    (0u64..1_000_000).prop_map(Decimal::from)
}

fn arb_nights() -> impl Strategy<Value = i64> {
    -30i64..400
}

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (0i64..700).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2026, 1, 1).unwrap() + Duration::days(offset)
    })
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// A stay-length discount never increases the displayed price.
    #[test]
    fn prop_discount_never_increases_price(
        price in arb_price(),
        nights in arb_nights(),
    ) {
        prop_assert!(calculate_dynamic_price(price, nights) <= price);
    }

    /// Longer stays never display a higher nightly price.
    #[test]
    fn prop_price_weakly_decreases_with_stay_length(
        price in arb_price(),
        nights in arb_nights(),
    ) {
        let shorter = calculate_dynamic_price(price, nights);
        let longer = calculate_dynamic_price(price, nights + 1);
        prop_assert!(longer <= shorter);
    }

    /// Every price inside a tier is identical, and discounted tiers floor to
    /// whole amounts.
    #[test]
    fn prop_tiers_are_flat_and_whole(price in arb_price()) {
        prop_assert_eq!(
            calculate_dynamic_price(price, 7),
            calculate_dynamic_price(price, 29)
        );
        prop_assert_eq!(
            calculate_dynamic_price(price, 30),
            calculate_dynamic_price(price, 365)
        );
        prop_assert_eq!(calculate_dynamic_price(price, -5), price);
        prop_assert_eq!(calculate_dynamic_price(price, 6), price);

        let weekly = calculate_dynamic_price(price, 7);
        prop_assert_eq!(weekly, weekly.floor());
        let monthly = calculate_dynamic_price(price, 30);
        prop_assert_eq!(monthly, monthly.floor());
    }

    /// After any pair of date edits the schedule invariants hold: check-out
    /// strictly after check-in, nights positive and equal to the whole-day
    /// difference.
    #[test]
    fn prop_schedule_invariants_survive_any_edits(
        start in arb_date(),
        end in arb_date(),
        new_check_in in arb_date(),
        new_check_out in arb_date(),
    ) {
        let mut schedule = StaySchedule::new(start, end);
        schedule.set_check_in(new_check_in);
        schedule.set_check_out(new_check_out);

        prop_assert!(schedule.check_out() > schedule.check_in());
        prop_assert!(schedule.nights() >= 1);
        prop_assert_eq!(
            schedule.nights(),
            (schedule.check_out() - schedule.check_in()).num_days()
        );
    }

    /// Moving check-in onto or past check-out always yields a one-night stay
    /// ending the following day.
    #[test]
    fn prop_check_in_autocorrect_yields_one_night(
        start in arb_date(),
        end in arb_date(),
        jump in 0i64..300,
    ) {
        let mut schedule = StaySchedule::new(start, end);
        let late_check_in = schedule.check_out() + Duration::days(jump);
        schedule.set_check_in(late_check_in);

        prop_assert_eq!(schedule.check_out(), late_check_in + Duration::days(1));
        prop_assert_eq!(schedule.nights(), 1);
    }

    /// For any set of removals over distinct ids, the final list equals the
    /// initial list minus exactly the ids whose remote removal succeeded,
    /// regardless of which removals the remote rejected.
    #[test]
    fn prop_removals_compose(
        count in 2usize..8,
        failing_mask in proptest::collection::vec(any::<bool>(), 8),
        removal_mask in proptest::collection::vec(any::<bool>(), 8),
    ) {
        let listings: Vec<Listing> = (0..count)
            .map(|i| make_listing(&format!("lst-{}", i), Decimal::from(100 + i as u32)))
            .collect();
        let failing: HashSet<String> = (0..count)
            .filter(|i| failing_mask[*i])
            .map(|i| format!("lst-{}", i))
            .collect();
        let to_remove: Vec<String> = (0..count)
            .filter(|i| removal_mask[*i])
            .map(|i| format!("lst-{}", i))
            .collect();

        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();

        let final_ids: HashSet<String> = runtime.block_on(async {
            let repository = Arc::new(FixedRepository {
                listings: listings.clone(),
                failing_removals: failing.clone(),
            });
            let service = FavoritesService::new(repository, "user-1");
            service.load().await.unwrap();

            futures::future::join_all(
                to_remove.iter().map(|id| service.remove_favorite(id)),
            )
            .await;

            service
                .page()
                .unwrap()
                .items
                .iter()
                .map(|l| l.id.clone())
                .collect()
        });

        let expected: HashSet<String> = listings
            .iter()
            .map(|l| l.id.clone())
            .filter(|id| !to_remove.contains(id) || failing.contains(id))
            .collect();

        prop_assert_eq!(final_ids, expected);
    }
}
