//! Loose raw payloads and the total raw-to-record mapping.
//!
//! The data service's schema uses display-style field names and makes no
//! type guarantees: optional fields are simply absent, and a few fields have
//! drifted shape across old records (photos as bare URL strings or objects).
//! Every field is read through a typed extractor with a named default, so a
//! single malformed field never fails a whole page.

use chrono::{DateTime, Utc};
use log::debug;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{Map, Value};

use super::record::{AddressRecord, ListingRecord, PhotoRecord};

const DEFAULT_STATE: &str = "NY";
const DEFAULT_CURRENCY: &str = "USD";
const DEFAULT_CHECK_IN_TIME: &str = "2:00 pm";
const DEFAULT_CHECK_OUT_TIME: &str = "11:00 am";
const DEFAULT_CANCELLATION_POLICY: &str = "Flexible";
const DEFAULT_NIGHTS_AVAILABLE: u32 = 7;

/// Envelope of a data-API listing query response.
#[derive(Debug, Deserialize)]
pub struct RawListingQueryResponse {
    pub response: RawQueryResults,
}

/// Result block of a data-API query.
#[derive(Debug, Deserialize)]
pub struct RawQueryResults {
    #[serde(default)]
    pub results: Vec<RawListing>,
    /// Total matching records, when the service reports it.
    #[serde(default)]
    pub count: Option<u64>,
}

/// Envelope of a data-API user fetch.
#[derive(Debug, Deserialize)]
pub struct RawUserResponse {
    pub response: RawUser,
}

/// A user record as the data service returns it.
#[derive(Debug, Clone, Deserialize)]
pub struct RawUser {
    #[serde(flatten)]
    fields: Map<String, Value>,
}

impl RawUser {
    /// Ids of the listings this user has favorited.
    pub fn favorited_listing_ids(&self) -> Vec<String> {
        match self.fields.get("Favorited Listings") {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// A listing exactly as the data service returns it.
#[derive(Debug, Clone, Deserialize)]
pub struct RawListing {
    #[serde(flatten)]
    fields: Map<String, Value>,
}

impl RawListing {
    /// Maps the raw payload into a typed [`ListingRecord`].
    ///
    /// This is a fixed, total, per-field table: absent or wrong-typed fields
    /// take their documented default, nothing else happens here.
    pub fn to_record(&self) -> ListingRecord {
        let name = self.str_field("Name").unwrap_or_default();
        let lister_price_display = self
            .decimal_field("Lister Price Display")
            .unwrap_or(Decimal::ZERO);
        let pricing = self.object_field("pricing_list");
        let starting_nightly_price = pricing
            .and_then(|p| decimal_in(p, "Starting Nightly Price"))
            .unwrap_or(lister_price_display);

        ListingRecord {
            id: self.str_field("_id").unwrap_or_default(),
            name: name.clone(),
            active: self.bool_field("Active", true),
            approved: self.bool_field("Approved", false),
            listing_code: self.str_field("Listing Code OP").unwrap_or_default(),

            qty_bedrooms: self.u32_field("Features - Qty Bedrooms").unwrap_or(0),
            qty_bathrooms: self
                .decimal_field("Features - Qty Bathrooms")
                .unwrap_or(Decimal::ZERO),
            qty_beds: self.u32_field("Features - Qty Beds").unwrap_or(0),
            qty_guests: self.u32_field("Features - Qty Guests").unwrap_or(0),
            sqft_area: self.u32_field("Features - SQFT Area"),
            type_of_space: self.str_field("Features - Type of Space"),
            kitchen_type: self.str_field("Kitchen Type"),
            photos: self.photos(&name),

            address: self.address(),
            borough: self.str_field("Location - Borough"),
            hood: self.str_field("Location - Hood"),
            city: self.str_field("Location - City"),
            state: self
                .str_field("Location - State")
                .unwrap_or_else(|| DEFAULT_STATE.to_string()),
            zip_code: self.str_field("Location - Zip Code").unwrap_or_default(),

            first_available: self.datetime_field("First Available"),
            last_available: self.datetime_field("Last Available"),
            nights_available: self
                .u32_field("# of nights available")
                .unwrap_or(DEFAULT_NIGHTS_AVAILABLE),

            lister_price_display,
            starting_nightly_price,
            weekly_price: pricing.and_then(|p| decimal_in(p, "Weekly Price")),
            monthly_price: pricing.and_then(|p| decimal_in(p, "Monthly Price")),
            currency: DEFAULT_CURRENCY.to_string(),

            check_in_time: self
                .str_field("NEW Date Check-in Time")
                .unwrap_or_else(|| DEFAULT_CHECK_IN_TIME.to_string()),
            check_out_time: self
                .str_field("NEW Date Check-out Time")
                .unwrap_or_else(|| DEFAULT_CHECK_OUT_TIME.to_string()),
            cancellation_policy: self
                .str_field("Cancellation Policy")
                .unwrap_or_else(|| DEFAULT_CANCELLATION_POLICY.to_string()),

            created: self.datetime_field("Created").unwrap_or_else(Utc::now),
            modified: self.datetime_field("Modified").unwrap_or_else(Utc::now),
        }
    }

    /// Photos arrive either as bare URL strings or as `{url, ...}` objects.
    /// Order is the array index; entries without a usable URL are dropped.
    fn photos(&self, listing_name: &str) -> Vec<PhotoRecord> {
        let Some(Value::Array(items)) = self.fields.get("Features - Photos") else {
            return Vec::new();
        };
        items
            .iter()
            .enumerate()
            .filter_map(|(index, item)| {
                let url = match item {
                    Value::String(url) => Some(url.clone()),
                    Value::Object(obj) => str_in(obj, "url"),
                    _ => None,
                }?;
                Some(PhotoRecord {
                    url,
                    order: index as u32,
                    alt_text: if listing_name.is_empty() {
                        None
                    } else {
                        Some(listing_name.to_string())
                    },
                })
            })
            .collect()
    }

    fn address(&self) -> AddressRecord {
        match self.object_field("Location - Address") {
            Some(obj) => AddressRecord {
                address: str_in(obj, "address").unwrap_or_default(),
                lat: f64_in(obj, "lat").unwrap_or(0.0),
                lng: f64_in(obj, "lng").unwrap_or(0.0),
            },
            None => AddressRecord {
                address: String::new(),
                lat: 0.0,
                lng: 0.0,
            },
        }
    }

    fn str_field(&self, key: &str) -> Option<String> {
        match self.fields.get(key) {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) if s.is_empty() => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => {
                debug!("field '{}' is not a string ({}), defaulting", key, other);
                None
            }
        }
    }

    fn bool_field(&self, key: &str, default: bool) -> bool {
        match self.fields.get(key) {
            None | Some(Value::Null) => default,
            Some(Value::Bool(b)) => *b,
            Some(other) => {
                debug!("field '{}' is not a bool ({}), defaulting", key, other);
                default
            }
        }
    }

    fn u32_field(&self, key: &str) -> Option<u32> {
        match self.fields.get(key) {
            None | Some(Value::Null) => None,
            Some(Value::Number(n)) => n
                .as_u64()
                .and_then(|v| u32::try_from(v).ok())
                .or_else(|| n.as_f64().map(|f| f.max(0.0) as u32)),
            Some(other) => {
                debug!("field '{}' is not a number ({}), defaulting", key, other);
                None
            }
        }
    }

    fn decimal_field(&self, key: &str) -> Option<Decimal> {
        match self.fields.get(key) {
            None | Some(Value::Null) => None,
            Some(value) => decimal_from_value(key, value),
        }
    }

    fn datetime_field(&self, key: &str) -> Option<DateTime<Utc>> {
        match self.fields.get(key) {
            Some(Value::String(s)) => DateTime::parse_from_rfc3339(s)
                .map(|dt| dt.with_timezone(&Utc))
                .ok(),
            _ => None,
        }
    }

    fn object_field(&self, key: &str) -> Option<&Map<String, Value>> {
        match self.fields.get(key) {
            Some(Value::Object(obj)) => Some(obj),
            _ => None,
        }
    }
}

fn str_in(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn f64_in(obj: &Map<String, Value>, key: &str) -> Option<f64> {
    obj.get(key).and_then(Value::as_f64)
}

fn decimal_in(obj: &Map<String, Value>, key: &str) -> Option<Decimal> {
    obj.get(key).and_then(|v| decimal_from_value(key, v))
}

/// The service emits prices as JSON numbers, but very old records carry them
/// as strings; accept both.
fn decimal_from_value(key: &str, value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => n.to_string().parse().ok(),
        Value::String(s) => s.parse().ok(),
        Value::Null => None,
        other => {
            debug!("field '{}' is not numeric ({}), defaulting", key, other);
            None
        }
    }
}
