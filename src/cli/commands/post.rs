use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::post::PostLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::draft::RawDraft;
use crate::models::session::Session;

/// List a new job or edit an existing one.
pub fn handle(cmd: &Commands, cfg: &Config, session: Option<&Session>) -> AppResult<()> {
    if let Commands::Post {
        category,
        short_desc,
        location,
        schedule,
        salary,
        salary_condition,
        long_desc,
        edit,
    } = cmd
    {
        let session = Session::require(session)?;

        let mut raw = RawDraft {
            category: category.clone(),
            short_desc: short_desc.clone(),
            location: location.clone(),
            salary: salary.clone(),
            salary_condition: salary_condition.clone(),
            long_desc: long_desc.clone(),
            ..Default::default()
        };
        schedule.fill(&mut raw);

        let mut pool = DbPool::open_ready(&cfg.database)?;
        PostLogic::apply(&mut pool, session, &raw, *edit)?;
    }
    Ok(())
}
