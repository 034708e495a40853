use std::{fmt, str::FromStr};

use chrono::{
    DateTime, TimeDelta, TimeZone,
    format::{Item, StrftimeItems},
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub mod humanize;

/// `HH:mm:ss dd.MM.yy`
pub const DEFAULT_DATE_FORMAT: &'static str = "%H:%M:%S %d.%m.%y";

/// Calendar-free time units, ordered by magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Second,
    Minute,
    Hour,
    Day,
}

impl TimeUnit {
    pub const ALL: [TimeUnit; 4] = [
        TimeUnit::Second,
        TimeUnit::Minute,
        TimeUnit::Hour,
        TimeUnit::Day,
    ];

    /// Size of one unit in milliseconds
    pub const fn size(self) -> i64 {
        match self {
            TimeUnit::Second => 1000,
            TimeUnit::Minute => 60 * TimeUnit::Second.size(),
            TimeUnit::Hour => 60 * TimeUnit::Minute.size(),
            TimeUnit::Day => 24 * TimeUnit::Hour.size(),
        }
    }

    /// `value` units expressed in milliseconds
    pub const fn ms(self, value: i64) -> i64 {
        value * self.size()
    }

    /// Number of whole units in `diff_ms`, ignoring its sign.
    pub const fn count_in(self, diff_ms: i64) -> u64 {
        diff_ms.unsigned_abs() / self.size() as u64
    }

    /// Returns `None` when the span does not fit a `TimeDelta`.
    pub fn delta(self, value: i64) -> Option<TimeDelta> {
        TimeDelta::try_milliseconds(value.checked_mul(self.size())?)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TimeUnit::Second => "second",
            TimeUnit::Minute => "minute",
            TimeUnit::Hour => "hour",
            TimeUnit::Day => "day",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "s" | "sec" | "second" | "seconds" => Ok(TimeUnit::Second),
            "m" | "min" | "minute" | "minutes" => Ok(TimeUnit::Minute),
            "h" | "hour" | "hours" => Ok(TimeUnit::Hour),
            "d" | "day" | "days" => Ok(TimeUnit::Day),
            _ => Err(Error::UnknownUnit(s.to_owned())),
        }
    }
}

/// Shifts `instant` by `value` units. `None` on overflow.
pub fn add<Tz: TimeZone>(instant: DateTime<Tz>, value: i64, unit: TimeUnit) -> Option<DateTime<Tz>> {
    instant.checked_add_signed(unit.delta(value)?)
}

/// Formats `instant` with a strftime pattern, rejecting malformed patterns instead of
/// panicking inside `Display`.
pub fn format_instant<Tz>(instant: &DateTime<Tz>, pattern: &str) -> Result<String>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let items = StrftimeItems::new(pattern);
    if items.clone().any(|item| matches!(item, Item::Error)) {
        return Err(Error::InvalidDateFormat(pattern.to_owned()));
    }
    Ok(instant.format_with_items(items).to_string())
}
