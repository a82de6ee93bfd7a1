use crate::core::calculator::advisory::Advisory;
use chrono::NaiveTime;

pub const SHIFT_ORDER_WARNING: &str = "Start of shift is later than End of shift!";

const MS_PER_MINUTE: f64 = 60.0 * 1000.0;
const MS_PER_HOUR: f64 = 60.0 * MS_PER_MINUTE;

/// Summary of the shift length net of the break.
///
/// Both times live on the same day: an end before the start is a warning,
/// never an overnight shift.
pub fn evaluate_shift_duration(
    start: Option<NaiveTime>,
    end: Option<NaiveTime>,
    break_hours: f64,
) -> Option<Advisory> {
    let (start, end) = (start?, end?);

    if start > end {
        return Some(Advisory::warning(SHIFT_ORDER_WARNING));
    }

    let (hours, minutes) = net_hours_minutes(start, end, break_hours);

    Some(Advisory::info(format!(
        "Duration (less break): {} hour(s) {} minute(s)",
        hours, minutes
    )))
}

/// Net shift length in whole minutes, sub-minute remainders dropped.
/// The break is clamped so the result is never negative.
pub fn net_minutes(start: NaiveTime, end: NaiveTime, break_hours: f64) -> i64 {
    let raw_ms = (end - start).num_milliseconds() as f64;
    let break_ms = effective_break(break_hours) * MS_PER_HOUR;
    let net_ms = (raw_ms - break_ms).max(0.0);

    (net_ms / MS_PER_MINUTE).floor() as i64
}

pub fn net_hours_minutes(start: NaiveTime, end: NaiveTime, break_hours: f64) -> (i64, i64) {
    let mins = net_minutes(start, end, break_hours);
    (mins / 60, mins % 60)
}

fn effective_break(break_hours: f64) -> f64 {
    if break_hours.is_finite() && break_hours > 0.0 {
        break_hours
    } else {
        0.0
    }
}
