use crate::core::calculator::advisory::Advisory;
use chrono::NaiveDate;

pub const DATE_ORDER_WARNING: &str = "\"From\" date/time is later than \"To\" date/time!";
pub const LESS_THAN_A_DAY: &str = "Duration: Less than a day only";

const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Summary of the listing's date range.
///
/// Returns `None` until both dates are set. Dates are calendar dates with no
/// time zone attached, so the span is always a whole number of days.
pub fn evaluate_date_range(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Option<Advisory> {
    let (start, end) = (start?, end?);

    if start > end {
        return Some(Advisory::warning(DATE_ORDER_WARNING));
    }

    if start == end {
        return Some(Advisory::info(LESS_THAN_A_DAY));
    }

    Some(Advisory::info(format!(
        "Duration: {} day(s)",
        span_days(start, end)
    )))
}

/// Ceiling of the day distance between two ordered dates.
pub fn span_days(start: NaiveDate, end: NaiveDate) -> i64 {
    let ms = (end - start).num_milliseconds();
    (ms + MS_PER_DAY - 1).div_euclid(MS_PER_DAY)
}
