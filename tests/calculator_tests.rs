use chrono::{NaiveDate, NaiveTime};
use shiftboard::core::calculator::date_range::{DATE_ORDER_WARNING, LESS_THAN_A_DAY, span_days};
use shiftboard::core::calculator::shift::{SHIFT_ORDER_WARNING, net_hours_minutes};
use shiftboard::core::calculator::{
    Advisory, Level, evaluate_date_range, evaluate_draft, evaluate_shift_duration,
};
use shiftboard::models::draft::ListingDraft;

fn d(s: &str) -> Option<NaiveDate> {
    Some(NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap())
}

fn t(s: &str) -> Option<NaiveTime> {
    Some(NaiveTime::parse_from_str(s, "%H:%M").unwrap())
}

#[test]
fn test_date_range_five_days() {
    let a = evaluate_date_range(d("2024-01-10"), d("2024-01-15")).unwrap();
    assert_eq!(a, Advisory::info("Duration: 5 day(s)"));
}

#[test]
fn test_date_range_same_day_is_less_than_a_day() {
    let a = evaluate_date_range(d("2024-01-10"), d("2024-01-10")).unwrap();
    assert_eq!(a.level, Level::Info);
    assert_eq!(a.message, LESS_THAN_A_DAY);
    assert_eq!(a.to_string(), "Duration: Less than a day only");
    assert!(!a.message.contains("0 day(s)"));
}

#[test]
fn test_date_range_reversed_is_warning() {
    let a = evaluate_date_range(d("2024-01-15"), d("2024-01-10")).unwrap();
    assert!(a.is_warning());
    assert_eq!(a.message, DATE_ORDER_WARNING);
    assert!(a.to_string().starts_with("Warning: "));
    assert!(a.message.contains("later than"));

    // magnitude of the gap does not matter
    let far = evaluate_date_range(d("2030-01-01"), d("1999-12-31")).unwrap();
    let near = evaluate_date_range(d("2024-01-11"), d("2024-01-10")).unwrap();
    assert_eq!(far, near);
}

#[test]
fn test_date_range_needs_both_dates() {
    assert_eq!(evaluate_date_range(None, d("2024-01-10")), None);
    assert_eq!(evaluate_date_range(d("2024-01-10"), None), None);
    assert_eq!(evaluate_date_range(None, None), None);
}

#[test]
fn test_date_range_span_across_month_and_leap_day() {
    let a = evaluate_date_range(d("2024-02-27"), d("2024-03-02")).unwrap();
    assert_eq!(a.message, "Duration: 4 day(s)");

    let a = evaluate_date_range(d("2023-12-31"), d("2024-01-01")).unwrap();
    assert_eq!(a.message, "Duration: 1 day(s)");
}

#[test]
fn test_span_days_is_at_least_one_for_distinct_ordered_dates() {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    for offset in 1..400 {
        let end = start + chrono::Days::new(offset);
        let n = span_days(start, end);
        assert_eq!(n, offset as i64);
        assert!(n >= 1);

        let a = evaluate_date_range(Some(start), Some(end)).unwrap();
        assert_eq!(a.message, format!("Duration: {} day(s)", n));
    }
}

#[test]
fn test_shift_with_one_hour_break() {
    let a = evaluate_shift_duration(t("09:00"), t("17:00"), 1.0).unwrap();
    assert_eq!(a, Advisory::info("Duration (less break): 7 hour(s) 0 minute(s)"));
}

#[test]
fn test_shift_with_half_hour_break() {
    let a = evaluate_shift_duration(t("09:00"), t("17:30"), 0.5).unwrap();
    assert_eq!(a.message, "Duration (less break): 8 hour(s) 0 minute(s)");
}

#[test]
fn test_shift_reversed_is_warning_for_any_break() {
    for brk in [0.0, 0.5, 1.0, 12.0] {
        let a = evaluate_shift_duration(t("18:00"), t("09:00"), brk).unwrap();
        assert!(a.is_warning());
        assert_eq!(a.message, SHIFT_ORDER_WARNING);
        assert_eq!(a.to_string(), "Warning: Start of shift is later than End of shift!");
    }
}

#[test]
fn test_shift_needs_both_times() {
    assert_eq!(evaluate_shift_duration(t("09:00"), None, 1.0), None);
    assert_eq!(evaluate_shift_duration(None, t("17:00"), 1.0), None);
}

#[test]
fn test_shift_break_longer_than_shift_clamps_to_zero() {
    let a = evaluate_shift_duration(t("09:00"), t("10:00"), 3.0).unwrap();
    assert_eq!(a.message, "Duration (less break): 0 hour(s) 0 minute(s)");
}

#[test]
fn test_shift_same_start_and_end() {
    let a = evaluate_shift_duration(t("12:00"), t("12:00"), 0.0).unwrap();
    assert_eq!(a.message, "Duration (less break): 0 hour(s) 0 minute(s)");
}

#[test]
fn test_shift_truncates_sub_minute_break() {
    // 0.01h = 36s → 8h minus 36s = 7h 59m 24s → shown as 7h 59m
    let a = evaluate_shift_duration(t("09:00"), t("17:00"), 0.01).unwrap();
    assert_eq!(a.message, "Duration (less break): 7 hour(s) 59 minute(s)");

    // 0.25h = 15m exactly
    let a = evaluate_shift_duration(t("08:10"), t("12:55"), 0.25).unwrap();
    assert_eq!(a.message, "Duration (less break): 4 hour(s) 30 minute(s)");
}

#[test]
fn test_shift_negative_or_nan_break_counts_as_zero() {
    let base = evaluate_shift_duration(t("09:00"), t("17:00"), 0.0);
    assert_eq!(evaluate_shift_duration(t("09:00"), t("17:00"), -2.0), base);
    assert_eq!(evaluate_shift_duration(t("09:00"), t("17:00"), f64::NAN), base);
}

#[test]
fn test_shift_monotonic_in_break() {
    let start = NaiveTime::from_hms_opt(7, 45, 0).unwrap();
    let end = NaiveTime::from_hms_opt(16, 20, 0).unwrap();

    let mut last = i64::MAX;
    for step in 0..=40 {
        let brk = step as f64 * 0.25;
        let (h, m) = net_hours_minutes(start, end, brk);
        assert!(h >= 0 && m >= 0);
        assert!((0..60).contains(&m));
        let total = h * 60 + m;
        assert!(total <= last, "break {} increased net duration", brk);
        last = total;
    }
    assert_eq!(last, 0);
}

#[test]
fn test_calculator_is_idempotent() {
    let draft = ListingDraft {
        start_date: d("2024-01-10"),
        end_date: d("2024-01-15"),
        shift_start: t("09:00"),
        shift_end: t("17:30"),
        break_hours: 0.5,
    };

    let first = evaluate_draft(&draft);
    let second = evaluate_draft(&draft);
    assert_eq!(first, second);
    assert_eq!(
        first.iter().map(|a| a.to_string()).collect::<Vec<_>>(),
        second.iter().map(|a| a.to_string()).collect::<Vec<_>>()
    );
}

#[test]
fn test_draft_feedback_reports_independent_results() {
    let draft = ListingDraft {
        start_date: d("2024-01-15"),
        end_date: d("2024-01-10"),
        shift_start: t("09:00"),
        shift_end: None,
        break_hours: 0.0,
    };

    let fb = draft.evaluate();
    assert!(fb.has_warnings());
    assert!(fb.shift.is_none());
    assert_eq!(fb.iter().count(), 1);

    let empty = ListingDraft::default().evaluate();
    assert!(empty.is_empty());
    assert!(!empty.has_warnings());
}
