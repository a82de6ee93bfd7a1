//! Time utilities: parsing HH:MM, break hours, formatting shift windows.

use chrono::{NaiveTime, Timelike};
use regex::Regex;
use std::sync::LazyLock;

/// Leading decimal number, the way a browser `parseFloat` reads a field.
static LEADING_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)")
        .expect("leading number pattern is valid")
});

/// Parse `HH:MM` (or `HH:MM:SS`, as time inputs sometimes send it).
/// Seconds are dropped: shifts are stored and compared to the minute.
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    NaiveTime::parse_from_str(t, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M:%S"))
        .ok()
        .and_then(|parsed| NaiveTime::from_hms_opt(parsed.hour(), parsed.minute(), 0))
}

pub fn format_time(t: &NaiveTime) -> String {
    t.format("%H:%M").to_string()
}

/// Parse the leading number of a free-text field. `None` when the text
/// does not start with a number.
pub fn parse_leading_number(s: &str) -> Option<f64> {
    LEADING_NUMBER
        .captures(s)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

/// Break hours from raw input. Missing, unparsable, negative or
/// non-finite values all become 0.
pub fn parse_break_hours(input: Option<&str>) -> f64 {
    match input.and_then(parse_leading_number) {
        Some(h) if h.is_finite() && h > 0.0 => h,
        _ => 0.0,
    }
}

/// `1` → "1h", `0.5` → "0.5h"
pub fn format_break(hours: f64) -> String {
    format!("{}h", hours)
}
