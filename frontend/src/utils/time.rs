use chrono::{DateTime, Local, NaiveDate, SecondsFormat, Utc};

pub const INVALID_DATE: &str = "Invalid Date";

/// UTC timestamp in the `2024-03-01T10:00:00.000Z` shape the backend stores.
pub fn now_iso() -> String {
    to_iso(Utc::now())
}

pub fn to_iso(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

/// Local calendar date of a stored timestamp, or `Invalid Date`.
pub fn format_created_on(raw: &str) -> String {
    parse_timestamp(raw)
        .map(|at| format_date(at.with_timezone(&Local).date_naive()))
        .unwrap_or_else(|| INVALID_DATE.to_string())
}

pub fn parse_date_input(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}
