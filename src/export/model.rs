// src/export/model.rs

use crate::models::listing::Listing;
use crate::utils::date::format_date;
use crate::utils::time::format_time;
use serde::Serialize;

/// Flat listing row for CSV / JSON, with the derived schedule summaries.
#[derive(Serialize, Clone, Debug)]
pub struct ListingExport {
    pub id: i64,
    pub owner: String,
    pub category: String,
    pub short_desc: String,
    pub location: String,
    pub duration_from: String,
    pub duration_upto: String,
    pub start_of_shift: String,
    pub end_of_shift: String,
    pub break_hours: f64,
    pub salary: f64,
    pub salary_condition: String,
    pub status: String,
    pub created_at: String,
    pub date_summary: String,
    pub shift_summary: String,
    pub long_desc: String,
}

impl From<&Listing> for ListingExport {
    fn from(l: &Listing) -> Self {
        let feedback = l.draft().evaluate();
        let text = |a: Option<crate::core::calculator::Advisory>| {
            a.map(|a| a.to_string()).unwrap_or_default()
        };

        Self {
            id: l.id,
            owner: l.owner.clone(),
            category: l.category.clone(),
            short_desc: l.short_desc.clone(),
            location: l.location.clone(),
            duration_from: format_date(&l.duration_from),
            duration_upto: format_date(&l.duration_upto),
            start_of_shift: format_time(&l.start_of_shift),
            end_of_shift: format_time(&l.end_of_shift),
            break_hours: l.break_hours,
            salary: l.salary,
            salary_condition: l.salary_condition.clone(),
            status: l.status.to_db_str().to_string(),
            created_at: l.created_at.clone(),
            date_summary: text(feedback.date_range),
            shift_summary: text(feedback.shift),
            long_desc: l.long_desc.clone(),
        }
    }
}
