use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::apply::ApplyLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::session::Session;
use crate::utils::colors::colorize_bid;
use crate::utils::formatting::format_salary;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config, session: Option<&Session>) -> AppResult<()> {
    if let Commands::Applicants { id } = cmd {
        let session = Session::require(session)?;
        let pool = DbPool::open_ready(&cfg.database)?;

        let (listing, apps) = ApplyLogic::applicants(&pool, session, *id)?;

        println!("👥 Applicants for listing {} ({}):\n", listing.id, listing.category);

        if apps.is_empty() {
            println!("No applications yet.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::new("APPLICANT", 18),
            Column::new("LISTED", 12),
            Column::new("BID", 12),
            Column::new("REASON", 36),
        ]);

        for a in &apps {
            table.add_row(vec![
                a.applicant.clone(),
                format_salary(a.amount, &cfg.currency, ""),
                a.bid_amount
                    .map(|b| format_salary(b, &cfg.currency, ""))
                    .unwrap_or_else(|| "--".to_string()),
                a.bid_reason.clone(),
            ]);
        }

        print!("{}", table.render(&cfg.separator_char));

        let bids = apps.iter().filter(|a| a.is_bid()).count();
        println!(
            "{} application(s), {}",
            apps.len(),
            colorize_bid(&format!("{} bid(s)", bids))
        );
    }
    Ok(())
}
