use chrono::{DateTime, NaiveDate, TimeZone};
use std::fmt::Display;

const DATE_FORMAT: &str = "%b %-d, %Y";

/// Formats an API timestamp as a calendar date in `tz`.
///
/// Accepts RFC 3339 timestamps and bare `YYYY-MM-DD` dates. Anything else is
/// shown as given.
///
/// # Examples
///
/// ```
/// use poe2_leagues::view::time_formatting::format_date_in;
/// use chrono::Utc;
///
/// assert_eq!(format_date_in("2024-12-06T20:00:00Z", &Utc), "Dec 6, 2024");
/// ```
pub fn format_date_in<Tz>(raw: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let raw = raw.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return timestamp.with_timezone(tz).format(DATE_FORMAT).to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format(DATE_FORMAT).to_string();
    }
    raw.to_string()
}

/// Formats an optional timestamp, using `placeholder` when it is missing.
pub fn format_optional_date_in<Tz>(raw: Option<&str>, placeholder: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match raw {
        Some(value) if !value.trim().is_empty() => format_date_in(value, tz),
        _ => placeholder.to_string(),
    }
}
