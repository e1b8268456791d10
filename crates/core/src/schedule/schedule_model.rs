//! Stay schedule selection state.

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::utils::time_utils::{market_date_today, nights_between};

/// The currently selected check-in/check-out dates and the derived stay
/// length that feeds the price tiering engine.
///
/// Invariants, maintained by every mutation:
/// - `check_out` is strictly after `check_in`
/// - `nights` equals the whole-day difference between the two dates and is
///   never stale relative to them
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StaySchedule {
    check_in: NaiveDate,
    check_out: NaiveDate,
    nights: i64,
}

impl Default for StaySchedule {
    /// Today through tomorrow in the market timezone, one night.
    fn default() -> Self {
        let today = market_date_today();
        Self {
            check_in: today,
            check_out: today + Duration::days(1),
            nights: 1,
        }
    }
}

impl StaySchedule {
    /// Builds a schedule from the given dates, applying the same correction
    /// rules as the setters. A check-out on or before check-in collapses to
    /// check-in plus one night.
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Self {
        let mut schedule = Self {
            check_in,
            check_out: check_in + Duration::days(1),
            nights: 1,
        };
        schedule.set_check_out(check_out);
        schedule
    }

    pub fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    pub fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    pub fn nights(&self) -> i64 {
        self.nights
    }

    /// Moves the check-in date. A check-in landing on or after the current
    /// check-out auto-advances check-out to the following day before nights
    /// are recomputed.
    pub fn set_check_in(&mut self, check_in: NaiveDate) {
        if check_in >= self.check_out {
            self.check_out = check_in + Duration::days(1);
        }
        self.check_in = check_in;
        self.recompute_nights();
    }

    /// Moves the check-out date. A date that would make the stay zero or
    /// negative nights is rejected: both the previous check-out and the
    /// previous nights are retained, keeping nights consistent with the
    /// displayed dates.
    pub fn set_check_out(&mut self, check_out: NaiveDate) {
        if nights_between(self.check_in, check_out) <= 0 {
            return;
        }
        self.check_out = check_out;
        self.recompute_nights();
    }

    /// Resets the selection to the defaults.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn recompute_nights(&mut self) {
        let nights = nights_between(self.check_in, self.check_out);
        if nights > 0 {
            self.nights = nights;
        }
    }
}
