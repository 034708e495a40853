use std::time::Duration;

use chrono::{DateTime, FixedOffset, Local};
use humanize_duration::{Truncate, prelude::DurationExt};
use humantext::TimeUnit;

/// Exact distance for a rounded difference, e.g. `"1h 5m 3s ago"`.
pub fn format_distance(diff_ms: i64) -> String {
    let magnitude = diff_ms.unsigned_abs();
    let duration = Duration::from_millis(magnitude);

    let truncate = if magnitude < TimeUnit::Hour.size() as u64 {
        Truncate::Second
    } else if magnitude < TimeUnit::Day.size() as u64 {
        Truncate::Minute
    } else {
        Truncate::Hour
    };
    let distance = duration.human(truncate);

    if diff_ms < 0 {
        format!("in {distance}")
    } else {
        format!("{distance} ago")
    }
}

pub fn parse_instant(text: &str) -> anyhow::Result<DateTime<FixedOffset>> {
    if text.eq_ignore_ascii_case("now") {
        return Ok(Local::now().fixed_offset());
    }
    DateTime::parse_from_rfc3339(text)
        .map_err(|e| anyhow::anyhow!("invalid timestamp \"{text}\": {e}"))
}
