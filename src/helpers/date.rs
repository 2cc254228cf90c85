//! Date helper functions

use chrono::{DateTime, TimeZone};

/// Format a date for display, e.g. "Jan 5, 2025"
///
/// Month names are always English abbreviations; the value is shown in
/// whatever timezone it carries (posts are loaded as UTC).
pub fn format_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.format("%b %-d, %Y").to_string()
}

/// Format a reading time in minutes, dropping a trailing ".0"
pub fn format_minutes(minutes: f64) -> String {
    if minutes.fract() == 0.0 {
        format!("{}", minutes as i64)
    } else {
        format!("{}", minutes)
    }
}
