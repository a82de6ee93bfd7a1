use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::profile::ProfileLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::profile::Profile;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Parttimers { search } = cmd {
        let pool = DbPool::open_ready(&cfg.database)?;
        let profiles = ProfileLogic::directory(&pool, search.as_deref())?;

        if profiles.is_empty() {
            println!("No part-timers found.");
            return Ok(());
        }

        print!("{}", render_table(&profiles, &cfg.separator_char));
        println!("{} part-timer(s)", profiles.len());
    }
    Ok(())
}

fn render_table(profiles: &[Profile], sep: &str) -> String {
    let mut table = Table::new(vec![
        Column::new("NAME", 16),
        Column::new("LOCATION", 16),
        Column::new("CATEGORY", 18),
        Column::new("SKILLS", 28),
    ]);

    for p in profiles {
        table.add_row(vec![
            p.user.clone(),
            p.location.clone(),
            p.interested_category.clone(),
            p.skills.clone(),
        ]);
    }

    table.render(sep)
}
