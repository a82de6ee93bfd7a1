use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::status::StatusLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::listing_status::ListingStatus;
use crate::models::session::Session;

pub fn handle(cmd: &Commands, cfg: &Config, session: Option<&Session>) -> AppResult<()> {
    if let Commands::Status { id, status } = cmd {
        let session = Session::require(session)?;
        let new_status =
            ListingStatus::from_code(status).ok_or_else(|| AppError::InvalidStatus(status.clone()))?;

        let mut pool = DbPool::open_ready(&cfg.database)?;
        StatusLogic::set(&mut pool, session, *id, new_status)?;
    }
    Ok(())
}
