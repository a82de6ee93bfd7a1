use crate::db::log::audit_or_warn;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_listing, load_owned_listing, update_listing};
use crate::errors::{AppError, AppResult};
use crate::models::draft::{ListingDraft, RawDraft};
use crate::models::listing::NewListing;
use crate::models::session::Session;
use crate::ui::messages::{advisory, success, warning};
use crate::utils::date::parse_date;
use crate::utils::time::{parse_break_hours, parse_time};
use chrono::Local;

/// Result of saving the listing form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostOutcome {
    Created(i64),
    Updated(i64),
}

impl PostOutcome {
    pub fn id(&self) -> i64 {
        match self {
            PostOutcome::Created(id) | PostOutcome::Updated(id) => *id,
        }
    }
}

/// High-level business logic for the listing form (`post`).
pub struct PostLogic;

fn required<'a>(value: &'a Option<String>, field: &'static str) -> AppResult<&'a str> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AppError::MissingField(field)),
    }
}

fn optional(value: &Option<String>) -> String {
    value.as_deref().map(str::trim).unwrap_or_default().to_string()
}

impl PostLogic {
    /// Turn the raw form into storable fields. Checks presence and format
    /// only; schedule advisories never fail validation.
    pub fn validate(raw: &RawDraft) -> AppResult<NewListing> {
        let category = required(&raw.category, "category")?;
        let short_desc = required(&raw.short_desc, "short_desc")?;
        let location = required(&raw.location, "location")?;

        let from_raw = required(&raw.duration_from, "duration_from")?;
        let duration_from =
            parse_date(from_raw).ok_or_else(|| AppError::InvalidDate(from_raw.to_string()))?;

        let upto_raw = required(&raw.duration_upto, "duration_upto")?;
        let duration_upto =
            parse_date(upto_raw).ok_or_else(|| AppError::InvalidDate(upto_raw.to_string()))?;

        let start_raw = required(&raw.start_of_shift, "start_of_shift")?;
        let start_of_shift =
            parse_time(start_raw).ok_or_else(|| AppError::InvalidTime(start_raw.to_string()))?;

        let end_raw = required(&raw.end_of_shift, "end_of_shift")?;
        let end_of_shift =
            parse_time(end_raw).ok_or_else(|| AppError::InvalidTime(end_raw.to_string()))?;

        let salary_raw = required(&raw.salary, "salary")?;
        let salary = salary_raw
            .parse::<f64>()
            .ok()
            .filter(|s| s.is_finite() && *s >= 0.0)
            .ok_or_else(|| AppError::InvalidNumber(salary_raw.to_string()))?;

        let long_desc = required(&raw.long_desc, "long_desc")?;

        Ok(NewListing {
            category: category.to_string(),
            short_desc: short_desc.to_string(),
            long_desc: long_desc.to_string(),
            location: location.to_string(),
            duration_from,
            duration_upto,
            start_of_shift,
            end_of_shift,
            break_hours: parse_break_hours(raw.break_hours.as_deref()),
            salary,
            salary_condition: optional(&raw.salary_condition),
        })
    }

    /// Show the schedule advisories, validate and save.
    ///
    /// With `edit_id` the listing must belong to the session user, and only
    /// the fields given in `raw` change; the others keep their stored
    /// values. Otherwise a new active listing is created for them. Warnings
    /// are printed but do not stop the save.
    pub fn apply(
        pool: &mut DbPool,
        session: &Session,
        raw: &RawDraft,
        edit_id: Option<i64>,
    ) -> AppResult<PostOutcome> {
        let form = match edit_id {
            Some(id) => {
                let stored = load_owned_listing(&pool.conn, id, &session.user)?;
                RawDraft::from(&stored).overlay(raw)
            }
            None => raw.clone(),
        };

        let feedback = ListingDraft::from_raw(&form).evaluate();
        for a in feedback.iter() {
            advisory(a);
        }

        let listing = Self::validate(&form)?;

        let outcome = match edit_id {
            Some(id) => {
                update_listing(&pool.conn, id, &listing)?;
                audit_or_warn(
                    &pool.conn,
                    "edit",
                    &format!("listing {}", id),
                    &format!("{} updated '{}'", session.user, listing.category),
                );
                PostOutcome::Updated(id)
            }
            None => {
                let now = Local::now().to_rfc3339();
                let id = insert_listing(&pool.conn, &session.user, &listing, &now)?;
                audit_or_warn(
                    &pool.conn,
                    "post",
                    &format!("listing {}", id),
                    &format!("{} listed '{}'", session.user, listing.category),
                );
                PostOutcome::Created(id)
            }
        };

        match outcome {
            PostOutcome::Created(id) => success(format!("Job saved! (listing {})", id)),
            PostOutcome::Updated(id) => success(format!("Job updated! (listing {})", id)),
        }
        if feedback.has_warnings() {
            warning("Saved with schedule warnings: double-check the dates and shift times.");
        }

        Ok(outcome)
    }
}
