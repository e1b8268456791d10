//! Pure display formatters.
//!
//! Every function here is total and side-effect-free: identical input yields
//! identical output, there is no hidden state, and no input fails. The view
//! layer calls these on already-priced listings.

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// Separator between phrase fragments on a listing card.
const FRAGMENT_SEPARATOR: &str = " • ";

/// Bathroom display strings for the half-integer option set. Values outside
/// the set fall back to "{n} Baths".
pub fn bathroom_display(count: Decimal) -> String {
    let table: [(Decimal, &str); 10] = [
        (dec!(1), "1 Bath"),
        (dec!(1.5), "1.5 Baths"),
        (dec!(2), "2 Baths"),
        (dec!(2.5), "2.5 Baths"),
        (dec!(3), "3 Baths"),
        (dec!(3.5), "3.5 Baths"),
        (dec!(4), "4 Baths"),
        (dec!(4.5), "4.5 Baths"),
        (dec!(5), "5 Baths"),
        (dec!(6), "6 Baths"),
    ];
    table
        .iter()
        .find(|(value, _)| *value == count)
        .map(|(_, display)| (*display).to_string())
        .unwrap_or_else(|| format!("{} Baths", count.normalize()))
}

/// Formats the bedroom/bathroom/kitchen phrase for a listing card.
///
/// Rules, in priority order:
/// 1. Zero bathrooms: bedroom info only, no bullet prefix, no kitchen.
/// 2. Otherwise bedroom fragment (omitted at zero), bathroom fragment from
///    the option-set table, kitchen fragment when present, joined with
///    bullets and prefixed with one.
pub fn format_bedroom_bathroom(
    bedrooms: u32,
    bathrooms: Decimal,
    kitchen_type: Option<&str>,
) -> String {
    if bathrooms <= Decimal::ZERO {
        return match bedrooms {
            0 => String::new(),
            1 => "1 bedroom".to_string(),
            n => format!("{} bedrooms", n),
        };
    }

    let mut parts: Vec<String> = Vec::new();
    match bedrooms {
        0 => {}
        1 => parts.push("1 bedroom".to_string()),
        n => parts.push(format!("{} bedrooms", n)),
    }
    parts.push(bathroom_display(bathrooms));
    if let Some(kitchen) = kitchen_type {
        if !kitchen.is_empty() {
            parts.push(kitchen.to_string());
        }
    }

    if parts.is_empty() {
        String::new()
    } else {
        format!("• {}", parts.join(FRAGMENT_SEPARATOR))
    }
}

/// Formats a nightly price for display, e.g. `$1,029/night`.
///
/// Zero decimal places, thousands separators, currency symbol for the
/// common codes and the code itself otherwise.
pub fn format_price(price: Decimal, currency: &str) -> String {
    let rounded = price
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let grouped = group_thousands(&rounded.to_string());
    match currency {
        "USD" => format!("${}/night", grouped),
        "EUR" => format!("€{}/night", grouped),
        "GBP" => format!("£{}/night", grouped),
        code => format!("{} {}/night", code, grouped),
    }
}

/// Joins whichever of borough/hood/city are present, in that order.
pub fn format_location(borough: Option<&str>, hood: Option<&str>, city: Option<&str>) -> String {
    [borough, hood, city]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Formats a date for display, e.g. `Jan 15, 2024`.
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Formats an availability window, e.g. `Available Jan 15, 2024 - Dec 31, 2024`.
pub fn format_availability(
    first_available: Option<&DateTime<Utc>>,
    last_available: Option<&DateTime<Utc>>,
) -> String {
    if first_available.is_none() && last_available.is_none() {
        return "Availability not specified".to_string();
    }

    let mut parts = vec!["Available".to_string()];
    if let Some(first) = first_available {
        parts.push(format_date(first));
    }
    if let Some(last) = last_available {
        parts.push("-".to_string());
        parts.push(format_date(last));
    }
    parts.join(" ")
}

/// Truncates text to `max_length` characters, ellipsized.
pub fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_length.saturating_sub(3)).collect();
    format!("{}...", kept)
}

/// Appends resize parameters for URLs served by the image-processing CDN;
/// every other URL passes through unchanged. Empty input stays empty.
pub fn processed_image_url(url: &str, width: Option<u32>, height: Option<u32>) -> String {
    if url.is_empty() {
        return String::new();
    }
    if !url.contains("imgix") {
        return url.to_string();
    }

    let mut params: Vec<String> = Vec::new();
    if let Some(w) = width {
        params.push(format!("w={}", w));
    }
    if let Some(h) = height {
        params.push(format!("h={}", h));
    }
    params.push("fit=crop".to_string());
    params.push("auto=format,compress".to_string());

    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{}{}{}", url, separator, params.join("&"))
}

/// Inserts thousands separators into a plain integer string.
fn group_thousands(digits: &str) -> String {
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("{}{}", sign, grouped)
}
