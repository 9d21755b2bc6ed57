//! DateTime display utilities.
//!
//! This module provides wrapper types for formatting timestamps in a
//! consistent, human-readable format using the system timezone.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

use crate::models::Activity;

/// A wrapper around `Timestamp` that provides system timezone formatting via
/// the `Display` trait.
///
/// # Format
///
/// The display format follows the pattern: `YYYY-MM-DD HH:MM:SS TZ`
/// - Year, month, and day are zero-padded
/// - Time is in 24-hour format with zero-padded components
/// - Timezone abbreviation is included (e.g., UTC, EST, JST)
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

/// When an activity happened, in local time if its stored timestamp can be
/// read, or the raw stored text otherwise.
pub struct ActivityTime<'a>(pub &'a Activity);

impl fmt::Display for ActivityTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.occurred_at() {
            Some(ts) => write!(f, "{}", LocalDateTime(&ts)),
            None if self.0.timestamp.is_empty() => write!(f, "unknown time"),
            None => write!(f, "{}", self.0.timestamp),
        }
    }
}
