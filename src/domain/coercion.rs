//! Best-effort cell coercion.
//!
//! None of these functions fail: malformed cells collapse to a designated
//! default so one bad value never aborts a batch import.

use chrono::{NaiveDate, NaiveDateTime};

#[derive(Debug, Clone, Copy)]
enum DateFormat {
    DateOnly(&'static str),
    DateTime(&'static str),
}

/// Accepted date layouts, tried in this order.
const DATE_FORMATS: [DateFormat; 6] = [
    DateFormat::DateOnly("%Y-%m-%d"),
    DateFormat::DateTime("%Y-%m-%d %H:%M"),
    DateFormat::DateTime("%Y-%m-%d %H:%M:%S"),
    DateFormat::DateOnly("%d.%m.%Y"),
    DateFormat::DateTime("%d.%m.%Y %H:%M"),
    DateFormat::DateTime("%d.%m.%Y %H:%M:%S"),
];

impl DateFormat {
    fn parse(self, text: &str) -> Option<NaiveDateTime> {
        match self {
            DateFormat::DateOnly(fmt) => NaiveDate::parse_from_str(text, fmt)
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0)),
            // A chrono format space also matches nothing; the time must be set apart.
            DateFormat::DateTime(fmt) => text
                .contains(char::is_whitespace)
                .then(|| NaiveDateTime::parse_from_str(text, fmt).ok())
                .flatten(),
        }
    }
}

/// Parse a timestamp, returning the first format that matches.
///
/// Date-only inputs resolve to midnight.
pub fn parse_date(text: &str) -> Option<NaiveDateTime> {
    if text.is_empty() {
        return None;
    }
    let trimmed = text.trim();
    DATE_FORMATS.iter().find_map(|fmt| fmt.parse(trimmed))
}

/// Monetary amount; comma decimal separators are accepted. Falls back to 0.0.
pub fn to_amount(text: &str) -> f64 {
    if text.is_empty() {
        return 0.0;
    }
    parse_amount(text).unwrap_or(0.0)
}

/// Strict form of [`to_amount`]: `None` when the text is not a number.
pub fn parse_amount(text: &str) -> Option<f64> {
    text.trim().replace(',', ".").parse().ok()
}

/// Integer count such as placement or field size.
///
/// Returns `None` for empty or unparseable input, never zero.
pub fn to_count(text: &str) -> Option<u32> {
    if text.is_empty() {
        return None;
    }
    text.trim().parse().ok()
}
