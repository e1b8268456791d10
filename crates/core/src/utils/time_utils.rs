use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

/// Default timezone for stay dates.
/// This is the canonical timezone used to convert UTC instants to calendar
/// dates. The marketplace operates in the New York metro area, so
/// America/New_York is the market timezone.
pub const MARKET_TZ: Tz = chrono_tz::America::New_York;

/// Converts a UTC instant to a calendar date in the given timezone.
///
/// Use this whenever a "today" needs to be derived from a timestamp, so the
/// stay schedule never rolls over at UTC midnight instead of local midnight.
pub fn market_date_from_utc(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

/// Convenience function that uses the market timezone.
/// Equivalent to `market_date_from_utc(instant, MARKET_TZ)`.
pub fn market_date_today() -> NaiveDate {
    market_date_from_utc(Utc::now(), MARKET_TZ)
}

/// Whole nights between a check-in and a check-out date.
/// Negative when `check_out` is not after `check_in`.
pub fn nights_between(check_in: NaiveDate, check_out: NaiveDate) -> i64 {
    check_out.signed_duration_since(check_in).num_days()
}
