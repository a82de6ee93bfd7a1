use crate::db::log::audit_or_warn;
use crate::db::pool::DbPool;
use crate::db::queries::{
    has_applied, insert_application, load_applications, load_listing, load_owned_listing,
};
use crate::errors::{AppError, AppResult};
use crate::models::application::Application;
use crate::models::listing::Listing;
use crate::models::session::Session;
use crate::ui::messages::success;
use chrono::Local;

/// A salary bid: the amount the applicant asks for, and why.
#[derive(Debug, Clone)]
pub struct Bid {
    pub amount: f64,
    pub reason: String,
}

impl Bid {
    pub fn new(amount: f64, reason: Option<&str>) -> AppResult<Self> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(AppError::InvalidNumber(format!(
                "bid amount must be greater than zero, got {}",
                amount
            )));
        }
        Ok(Self {
            amount,
            reason: reason.map(str::trim).unwrap_or_default().to_string(),
        })
    }
}

pub struct ApplyLogic;

impl ApplyLogic {
    /// Apply to a listing at its advertised salary, or bid with `bid`.
    pub fn apply(
        pool: &mut DbPool,
        session: &Session,
        listing_id: i64,
        bid: Option<Bid>,
    ) -> AppResult<i64> {
        let listing = load_listing(&pool.conn, listing_id)?.ok_or(AppError::NotFound(listing_id))?;

        if session.owns(&listing.owner) {
            return Err(AppError::OwnListing(listing_id));
        }
        if !listing.status.accepts_applications() {
            return Err(AppError::ListingClosed(listing_id));
        }
        if has_applied(&pool.conn, listing_id, &session.user)? {
            return Err(AppError::AlreadyApplied(listing_id));
        }

        let now = Local::now().to_rfc3339();
        let (bid_amount, bid_reason) = match &bid {
            Some(b) => (Some(b.amount), b.reason.as_str()),
            None => (None, ""),
        };

        let id = insert_application(
            &pool.conn,
            listing_id,
            &session.user,
            listing.salary,
            bid_amount,
            bid_reason,
            &now,
        )?;

        let (operation, msg) = match bid_amount {
            Some(amount) => (
                "bid",
                format!("{} bid {} (listed {})", session.user, amount, listing.salary),
            ),
            None => ("apply", format!("{} applied at {}", session.user, listing.salary)),
        };
        audit_or_warn(&pool.conn, operation, &format!("listing {}", listing_id), &msg);

        if bid_amount.is_some() {
            success("Bid submitted!");
        } else {
            success("Application submitted!");
        }

        Ok(id)
    }

    /// Applications to one of the session user's listings.
    pub fn applicants(
        pool: &DbPool,
        session: &Session,
        listing_id: i64,
    ) -> AppResult<(Listing, Vec<Application>)> {
        let listing = load_owned_listing(&pool.conn, listing_id, &session.user)?;
        let apps = load_applications(&pool.conn, listing_id)?;
        Ok((listing, apps))
    }
}
