//! Tests for the price tiering engine.

#[cfg(test)]
mod tests {
    use crate::pricing::{calculate_dynamic_price, repriced};
    use crate::listings::{Listing, ListingFeatures, PricingList};
    use rust_decimal_macros::dec;

    fn create_test_listing(id: &str, lister_price: rust_decimal::Decimal) -> Listing {
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
            lister_price_display: lister_price,
            pricing_list: PricingList {
                starting_nightly_price: lister_price,
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

    // ==================== Tier boundaries ====================

    #[test]
    fn test_short_stay_is_undiscounted() {
        assert_eq!(calculate_dynamic_price(dec!(1000), 1), dec!(1000));
        assert_eq!(calculate_dynamic_price(dec!(1000), 6), dec!(1000));
    }

    #[test]
    fn test_weekly_tier_starts_at_seven_nights() {
        assert_eq!(calculate_dynamic_price(dec!(1000), 7), dec!(900));
        assert_eq!(calculate_dynamic_price(dec!(1000), 29), dec!(900));
    }

    #[test]
    fn test_monthly_tier_starts_at_thirty_nights() {
        assert_eq!(calculate_dynamic_price(dec!(1000), 30), dec!(800));
        assert_eq!(calculate_dynamic_price(dec!(1000), 365), dec!(800));
    }

    #[test]
    fn test_discounted_price_is_floored() {
        // 999 * 0.9 = 899.1
        assert_eq!(calculate_dynamic_price(dec!(999), 7), dec!(899));
        // 125 * 0.8 = 100.0
        assert_eq!(calculate_dynamic_price(dec!(125), 30), dec!(100));
        // 121 * 0.8 = 96.8
        assert_eq!(calculate_dynamic_price(dec!(121), 30), dec!(96));
    }

    #[test]
    fn test_non_positive_nights_take_lowest_tier() {
        assert_eq!(calculate_dynamic_price(dec!(1000), 0), dec!(1000));
        assert_eq!(calculate_dynamic_price(dec!(1000), -3), dec!(1000));
    }

    #[test]
    fn test_zero_price_stays_zero_in_every_tier() {
        for nights in [1, 7, 30] {
            assert_eq!(
                calculate_dynamic_price(rust_decimal::Decimal::ZERO, nights),
                rust_decimal::Decimal::ZERO
            );
        }
    }

    // ==================== Repricing a collection ====================

    #[test]
    fn test_repriced_updates_every_listing_from_lister_price() {
        let listings = vec![
            create_test_listing("a", dec!(100)),
            create_test_listing("b", dec!(250)),
        ];

        let priced = repriced(&listings, 7);
        assert_eq!(priced[0].pricing_list.starting_nightly_price, dec!(90));
        assert_eq!(priced[1].pricing_list.starting_nightly_price, dec!(225));

        // The authoritative items keep their untiered price.
        assert_eq!(listings[0].pricing_list.starting_nightly_price, dec!(100));
    }

    #[test]
    fn test_repriced_recomputes_rather_than_compounds() {
        let listings = vec![create_test_listing("a", dec!(100))];

        let monthly = repriced(&listings, 30);
        assert_eq!(monthly[0].pricing_list.starting_nightly_price, dec!(80));

        // Going back to a short stay restores the base price because the
        // input is always the lister price, never a previously tiered value.
        let short = repriced(&listings, 2);
        assert_eq!(short[0].pricing_list.starting_nightly_price, dec!(100));
    }
}
