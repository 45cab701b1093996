//! Display formatting for flight offers and point balances.
//!
//! Everything here is a pure function of its arguments. Timestamps are
//! rendered in their own UTC offset, never the host's local zone.

use chrono::{DateTime, FixedOffset};

/// Renders a timestamp as `"Jul 12, 9:30 AM GMT-7"`.
pub fn format_instant(timestamp: &DateTime<FixedOffset>) -> String {
    format!(
        "{} {}",
        timestamp.format("%b %-d, %-I:%M %p"),
        zone_designator(timestamp.offset())
    )
}

// "UTC", "GMT-7" or "GMT+5:30"
fn zone_designator(offset: &FixedOffset) -> String {
    let seconds = offset.local_minus_utc();
    if seconds == 0 {
        return "UTC".to_string();
    }

    let sign = if seconds < 0 { '-' } else { '+' };
    let seconds = seconds.unsigned_abs();
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;

    if minutes == 0 {
        format!("GMT{}{}", sign, hours)
    } else {
        format!("GMT{}{}:{:02}", sign, hours, minutes)
    }
}

/// Renders a flight duration as `"{h}h {m}m"`.
pub fn format_duration(minutes: u32) -> String {
    format!("{}h {}m", minutes / 60, minutes % 60)
}

/// Points with thousands separators, e.g. `"55,200"`.
pub fn format_points(points: u64) -> String {
    group_thousands(points)
}

/// Cash fare in whole dollars, e.g. `"$1,149"`.
pub fn format_cash(amount: u64) -> String {
    format!("${}", group_thousands(amount))
}

/// Signed point balance. Negative values carry a leading minus before the
/// separated magnitude (`"-2,000"`).
pub fn format_points_delta(points: i64) -> String {
    if points < 0 {
        format!("-{}", group_thousands(points.unsigned_abs()))
    } else {
        group_thousands(points.unsigned_abs())
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}
