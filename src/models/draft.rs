use crate::core::calculator::{self, DraftFeedback};
use crate::models::listing::Listing;
use crate::utils::date::{format_date, parse_date};
use crate::utils::time::{format_time, parse_break_hours, parse_time};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Listing form fields exactly as typed. Any field may be missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawDraft {
    pub category: Option<String>,
    pub short_desc: Option<String>,
    pub location: Option<String>,
    pub duration_from: Option<String>,
    pub duration_upto: Option<String>,
    pub start_of_shift: Option<String>,
    pub end_of_shift: Option<String>,
    pub break_hours: Option<String>,
    pub salary: Option<String>,
    pub salary_condition: Option<String>,
    pub long_desc: Option<String>,
}

impl RawDraft {
    /// Fields given in `changes` replace ours; the rest are kept.
    pub fn overlay(self, changes: &RawDraft) -> RawDraft {
        let pick = |ours: Option<String>, theirs: &Option<String>| theirs.clone().or(ours);
        RawDraft {
            category: pick(self.category, &changes.category),
            short_desc: pick(self.short_desc, &changes.short_desc),
            location: pick(self.location, &changes.location),
            duration_from: pick(self.duration_from, &changes.duration_from),
            duration_upto: pick(self.duration_upto, &changes.duration_upto),
            start_of_shift: pick(self.start_of_shift, &changes.start_of_shift),
            end_of_shift: pick(self.end_of_shift, &changes.end_of_shift),
            break_hours: pick(self.break_hours, &changes.break_hours),
            salary: pick(self.salary, &changes.salary),
            salary_condition: pick(self.salary_condition, &changes.salary_condition),
            long_desc: pick(self.long_desc, &changes.long_desc),
        }
    }
}

/// The form as it looks when a stored listing is opened for editing.
impl From<&Listing> for RawDraft {
    fn from(l: &Listing) -> Self {
        RawDraft {
            category: Some(l.category.clone()),
            short_desc: Some(l.short_desc.clone()),
            location: Some(l.location.clone()),
            duration_from: Some(format_date(&l.duration_from)),
            duration_upto: Some(format_date(&l.duration_upto)),
            start_of_shift: Some(format_time(&l.start_of_shift)),
            end_of_shift: Some(format_time(&l.end_of_shift)),
            break_hours: Some(l.break_hours.to_string()),
            salary: Some(l.salary.to_string()),
            salary_condition: Some(l.salary_condition.clone()),
            long_desc: Some(l.long_desc.clone()),
        }
    }
}

/// Schedule fields of a draft, typed. Unset or unreadable values are
/// `None`; the break falls back to 0 hours.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ListingDraft {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub shift_start: Option<NaiveTime>,
    pub shift_end: Option<NaiveTime>,
    pub break_hours: f64,
}

impl ListingDraft {
    pub fn from_raw(raw: &RawDraft) -> Self {
        Self {
            start_date: raw.duration_from.as_deref().and_then(parse_date),
            end_date: raw.duration_upto.as_deref().and_then(parse_date),
            shift_start: raw.start_of_shift.as_deref().and_then(parse_time),
            shift_end: raw.end_of_shift.as_deref().and_then(parse_time),
            break_hours: parse_break_hours(raw.break_hours.as_deref()),
        }
    }

    pub fn evaluate(&self) -> DraftFeedback {
        calculator::evaluate_draft(self)
    }
}
