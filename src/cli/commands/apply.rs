use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::apply::{ApplyLogic, Bid};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::session::Session;

pub fn handle(cmd: &Commands, cfg: &Config, session: Option<&Session>) -> AppResult<()> {
    if let Commands::Apply { id, bid, reason } = cmd {
        let session = Session::require(session)?;

        let bid = match bid {
            Some(amount) => Some(Bid::new(*amount, reason.as_deref())?),
            None => None,
        };

        let mut pool = DbPool::open_ready(&cfg.database)?;
        ApplyLogic::apply(&mut pool, session, *id, bid)?;
    }
    Ok(())
}
