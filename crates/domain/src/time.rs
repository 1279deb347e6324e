//! Clock text helpers.

use chrono::{DateTime, Local, TimeZone};

/// Local wall-clock time.
pub type LocalTime = DateTime<Local>;

/// Return the current local time.
#[must_use]
pub fn now() -> LocalTime {
    Local::now()
}

/// Format a timestamp the way the header shows it, e.g. `10/19/2026, 3:04:05 PM`.
#[must_use]
pub fn clock_text<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    at.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}
