use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::browse::{BrowseFilter, BrowseLogic};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::listing::Listing;
use crate::models::listing_status::ListingStatus;
use crate::models::session::Session;
use crate::utils::date::format_short;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config, session: Option<&Session>) -> AppResult<()> {
    if let Commands::List {
        search,
        mine,
        status,
    } = cmd
    {
        let status = match status {
            Some(s) => {
                Some(ListingStatus::from_code(s).ok_or_else(|| AppError::InvalidStatus(s.clone()))?)
            }
            None => None,
        };

        let owner = if *mine {
            Some(Session::require(session)?)
        } else {
            None
        };

        let pool = DbPool::open_ready(&cfg.database)?;
        let filter = BrowseFilter {
            search: search.as_deref(),
            owner,
            status,
        };
        let listings = BrowseLogic::list(&pool, &filter)?;

        if listings.is_empty() {
            println!("No listings found.");
            return Ok(());
        }

        print!("{}", render_table(&listings, &cfg.separator_char));
        println!("{} listing(s)", listings.len());
    }
    Ok(())
}

fn render_table(listings: &[Listing], sep: &str) -> String {
    let mut table = Table::new(vec![
        Column::new("ID", 5),
        Column::new("CATEGORY", 18),
        Column::new("DESCRIPTION", 32),
        Column::new("LISTED", 16),
        Column::new("STATUS", 8),
    ]);

    for l in listings {
        let listed = l
            .created_date()
            .map(|d| format_short(&d))
            .unwrap_or_else(|| "--".to_string());
        table.add_row(vec![
            l.id.to_string(),
            l.category.clone(),
            l.short_desc.clone(),
            listed,
            l.status.to_db_str().to_string(),
        ]);
    }

    table.render(sep)
}
