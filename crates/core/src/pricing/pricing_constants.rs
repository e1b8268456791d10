//! Stay-length tier boundaries.
//!
//! Tiers are inclusive at their lower bound and mutually exclusive:
//! monthly stays (30+ nights), weekly stays (7-29 nights), and short stays
//! (everything below, including degenerate non-positive nights).

/// Minimum nights for the monthly-stay discount tier.
pub const MONTHLY_STAY_MIN_NIGHTS: i64 = 30;

/// Minimum nights for the weekly-stay discount tier.
pub const WEEKLY_STAY_MIN_NIGHTS: i64 = 7;
