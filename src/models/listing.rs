use crate::models::draft::ListingDraft;
use crate::models::listing_status::ListingStatus;
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// A job posting as stored.
#[derive(Debug, Clone, Serialize)]
pub struct Listing {
    pub id: i64,
    pub owner: String,
    pub category: String,
    pub short_desc: String,
    pub long_desc: String,
    pub location: String,
    pub duration_from: NaiveDate,
    pub duration_upto: NaiveDate,
    pub start_of_shift: NaiveTime,
    pub end_of_shift: NaiveTime,
    pub break_hours: f64,
    pub salary: f64,
    pub salary_condition: String,
    pub status: ListingStatus,
    pub created_at: String,
}

impl Listing {
    /// The schedule part of the listing, for re-running the calculator.
    pub fn draft(&self) -> ListingDraft {
        ListingDraft {
            start_date: Some(self.duration_from),
            end_date: Some(self.duration_upto),
            shift_start: Some(self.start_of_shift),
            shift_end: Some(self.end_of_shift),
            break_hours: self.break_hours,
        }
    }

    /// Listing date as shown in list views (date part of `created_at`).
    pub fn created_date(&self) -> Option<NaiveDate> {
        chrono::DateTime::parse_from_rfc3339(&self.created_at)
            .ok()
            .map(|dt| dt.date_naive())
    }
}

/// Validated listing fields, ready to be inserted or to replace an
/// existing row.
#[derive(Debug, Clone)]
pub struct NewListing {
    pub category: String,
    pub short_desc: String,
    pub long_desc: String,
    pub location: String,
    pub duration_from: NaiveDate,
    pub duration_upto: NaiveDate,
    pub start_of_shift: NaiveTime,
    pub end_of_shift: NaiveTime,
    pub break_hours: f64,
    pub salary: f64,
    pub salary_condition: String,
}
