//! Modification time column
//!
//! Entries newer than half a year show `MM/DD HH:MM`; older ones show
//! `MM/DD  YYYY`. Both are 11 characters wide.

use chrono::{Local, TimeZone};

/// Whether `mtime` falls after the half-year threshold.
pub fn is_recent(mtime: i64, half_year_ago: i64) -> bool {
    mtime > half_year_ago
}

/// Format `mtime` in local time.
pub fn time_string(mtime: i64, half_year_ago: i64) -> String {
    time_string_in(&Local, mtime, half_year_ago)
}

/// Format `mtime` in the given time zone.
pub fn time_string_in<Tz>(tz: &Tz, mtime: i64, half_year_ago: i64) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let format = if is_recent(mtime, half_year_ago) {
        "%m/%d %H:%M"
    } else {
        "%m/%d  %Y"
    };
    match tz.timestamp_opt(mtime, 0).earliest() {
        Some(t) => t.format(format).to_string(),
        // Out of chrono's range; keep the column width
        None => format!("{:>11}", "?"),
    }
}
