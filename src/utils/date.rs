use chrono::NaiveDate;

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

pub fn format_date(d: &NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

/// Short human date for list views, e.g. "Wed 10 Jan 2024".
pub fn format_short(d: &NaiveDate) -> String {
    d.format("%a %d %b %Y").to_string()
}
