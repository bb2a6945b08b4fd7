// Stage date parsing and display formatting
//
// Dates in the dataset are plain strings. Nothing here reads the clock, so the
// same input always formats the same way.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

/// Shown in place of a blank stage date.
pub const UNKNOWN_DATE: &str = "unknown date";

/// Parse a stage date into a UTC instant.
///
/// Accepted forms:
/// - `2023-03-01` (midnight UTC)
/// - `2023-03-01T14:30:00Z`, `2023-03-01T14:30:00+02:00` (RFC 3339, normalized to UTC)
/// - `2023-03-01T14:30:00`, `2023-03-01T14:30` (taken as UTC)
/// - `2023-03` (first of the month)
///
/// Returns `None` for anything else, including blank strings.
pub fn parse_stage_date(expr: &str) -> Option<NaiveDateTime> {
    let expr = expr.trim();
    if expr.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(expr, "%Y-%m-%d") {
        return Some(date.and_time(NaiveTime::MIN));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(expr) {
        return Some(dt.with_timezone(&Utc).naive_utc());
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(expr, fmt) {
            return Some(dt);
        }
    }

    // Month precision: chrono needs a day to build a date
    if expr.len() == 7 {
        if let Ok(date) = NaiveDate::parse_from_str(&format!("{}-01", expr), "%Y-%m-%d") {
            return Some(date.and_time(NaiveTime::MIN));
        }
    }

    None
}

/// Format a date as "Month YYYY" with the English month name (e.g. "March 2023")
pub fn format_month_year(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// Display text for a raw stage date.
///
/// Parseable dates become "Month YYYY". Unparseable dates are shown verbatim,
/// blank ones as [`UNKNOWN_DATE`].
pub fn display_stage_date(raw: &str) -> String {
    match parse_stage_date(raw) {
        Some(dt) => format_month_year(dt.date()),
        None if raw.trim().is_empty() => UNKNOWN_DATE.to_string(),
        None => raw.trim().to_string(),
    }
}
