use crate::db::log::audit_or_warn;
use crate::db::pool::DbPool;
use crate::db::queries::{load_owned_listing, update_status};
use crate::errors::AppResult;
use crate::models::listing_status::ListingStatus;
use crate::models::session::Session;
use crate::ui::messages::{info, success};

pub struct StatusLogic;

impl StatusLogic {
    /// Owner-only status change. Setting the current status again is a no-op.
    pub fn set(
        pool: &mut DbPool,
        session: &Session,
        listing_id: i64,
        status: ListingStatus,
    ) -> AppResult<()> {
        let listing = load_owned_listing(&pool.conn, listing_id, &session.user)?;

        if listing.status == status {
            info(format!(
                "Listing {} is already {}.",
                listing_id,
                status.to_db_str()
            ));
            return Ok(());
        }

        update_status(&pool.conn, listing_id, status)?;
        audit_or_warn(
            &pool.conn,
            "status",
            &format!("listing {}", listing_id),
            &format!(
                "{} → {}",
                listing.status.to_db_str(),
                status.to_db_str()
            ),
        );

        success(format!(
            "Listing {} is now {}.",
            listing_id,
            status.to_db_str()
        ));
        Ok(())
    }
}
