//! Shared parsing helpers for raw record fields.
//!
//! The source export is day-granular but sometimes carries a time suffix
//! (`"06/26/2021 09:30:00 PM"`), so date parsing only looks at the first
//! whitespace-separated token.

use chrono::NaiveDate;

/// Parses an occurrence date in either `MM/DD/YYYY` or ISO `YYYY-MM-DD`
/// form, ignoring any trailing time component.
#[must_use]
pub fn parse_occurrence_date(s: &str) -> Option<NaiveDate> {
    let date_part = s.trim().split_whitespace().next()?;
    if let Ok(date) = NaiveDate::parse_from_str(date_part, "%m/%d/%Y") {
        return Some(date);
    }
    if let Ok(date) = NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        return Some(date);
    }
    None
}

/// Parses a `Y`/`N` flag column (case-insensitive).
#[must_use]
pub fn parse_flag(s: &str) -> Option<bool> {
    match s.trim() {
        "Y" | "y" => Some(true),
        "N" | "n" => Some(false),
        _ => None,
    }
}

/// Parses lat/lng strings. Returns `None` if either is missing,
/// unparseable, or zero (the export uses zero for unknown coordinates).
#[must_use]
pub fn parse_lat_lng(lat: &str, lng: &str) -> Option<(f64, f64)> {
    let latitude = lat.trim().parse::<f64>().ok()?;
    let longitude = lng.trim().parse::<f64>().ok()?;
    if latitude == 0.0 || longitude == 0.0 {
        return None;
    }
    Some((latitude, longitude))
}
