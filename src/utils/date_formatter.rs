use chrono::{DateTime, Local, TimeZone, Utc};
use chrono_tz::Tz;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    Tooltip, // 1/15/2024 09:30 AM
    Compact, // Jan 15, 09:30 AM
}

impl DateStyle {
    fn pattern(self) -> &'static str {
        match self {
            Self::Tooltip => "%-m/%-d/%Y %I:%M %p",
            Self::Compact => "%b %-d, %I:%M %p",
        }
    }
}

/// Formats an epoch-millisecond timestamp in `zone`, or in the local zone when
/// none is given. Timestamps chrono cannot represent come back as the raw number.
pub fn format_timestamp(timestamp_ms: i64, style: DateStyle, zone: Option<Tz>) -> String {
    let Some(utc) = DateTime::<Utc>::from_timestamp_millis(timestamp_ms) else {
        return timestamp_ms.to_string();
    };

    match zone {
        Some(tz) => format_in(&utc.with_timezone(&tz), style),
        None => format_in(&utc.with_timezone(&Local), style),
    }
}

fn format_in<Z>(dt: &DateTime<Z>, style: DateStyle) -> String
where
    Z: TimeZone,
    Z::Offset: Display,
{
    dt.format(style.pattern()).to_string()
}
