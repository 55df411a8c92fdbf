//! Timestamp formatting utilities
//!
//! The default is the classic layout every line carries:
//! `<month>:<day> <hour>:<minute>:<second>:<microseconds>` in local time,
//! e.g. `Oct:19 14:03:07:000412`. Day and hour are space padded to width two
//! and microseconds are zero padded to six digits.

use chrono::{DateTime, Local, TimeZone, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

const CLASSIC_PATTERN: &str = "%b:%e %k:%M:%S";

/// Timestamp layouts a logger can render.
///
/// # Examples
///
/// ```
/// use rust_module_logger::TimestampFormat;
/// use chrono::{Local, TimeZone};
///
/// let at = Local.with_ymd_and_hms(2024, 3, 7, 9, 5, 1).unwrap();
/// assert_eq!(TimestampFormat::Classic.format(&at), "Mar: 7  9:05:01:000000");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// `Mar: 7  9:05:01:000000`
    #[default]
    Classic,

    /// ISO 8601 with microseconds: `2024-03-07T09:05:01.000000+01:00`
    Iso8601Micros,

    /// Custom strftime format
    Custom(String),
}

impl TimestampFormat {
    #[must_use]
    pub fn format<Tz>(&self, datetime: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        match self {
            TimestampFormat::Classic => format_timestamp_at(datetime),
            TimestampFormat::Iso8601Micros => {
                datetime.format("%Y-%m-%dT%H:%M:%S%.6f%:z").to_string()
            }
            TimestampFormat::Custom(pattern) => datetime.format(pattern).to_string(),
        }
    }
}

/// Classic timestamp for the current local time.
pub fn format_timestamp() -> String {
    format_timestamp_at(&Local::now())
}

/// Classic timestamp for a given instant.
///
/// Leap-second nanoseconds (>= 1e9) are folded into the last microsecond so
/// the field stays six digits wide.
pub fn format_timestamp_at<Tz>(datetime: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let micros = (datetime.nanosecond() / 1_000).min(999_999);
    format!("{}:{:06}", datetime.format(CLASSIC_PATTERN), micros)
}
