use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::load_listing;
use crate::errors::{AppError, AppResult};
use crate::models::listing::Listing;
use crate::models::session::Session;
use crate::ui::messages::{advisory, header};
use crate::utils::colors::{RESET, color_for_status, colorize_optional};
use crate::utils::date::format_date;
use crate::utils::formatting::{bold, format_salary};
use crate::utils::time::{format_break, format_time};

const WRAP_WIDTH: usize = 72;

pub fn handle(cmd: &Commands, cfg: &Config, session: Option<&Session>) -> AppResult<()> {
    if let Commands::Show { id } = cmd {
        let pool = DbPool::open_ready(&cfg.database)?;
        let listing = load_listing(&pool.conn, *id)?.ok_or(AppError::NotFound(*id))?;

        print_details(&listing, cfg);

        if session.is_some_and(|s| s.owns(&listing.owner)) {
            println!("\nThis is your listing: `shiftboard applicants {}` shows who applied.", id);
        } else if listing.status.accepts_applications() {
            println!(
                "\nApply with `shiftboard apply {id}`, or bid with `shiftboard apply {id} --bid AMOUNT --reason TEXT`."
            );
        }
    }
    Ok(())
}

fn print_details(l: &Listing, cfg: &Config) {
    header(&l.category);

    println!("{} {}", bold("Short Description:"), l.short_desc);
    println!("{} {}", bold("Location:"), l.location);
    println!(
        "{} {} to {}",
        bold("Duration:"),
        format_date(&l.duration_from),
        format_date(&l.duration_upto)
    );
    println!(
        "{} {} - {} (Break: {})",
        bold("Shift:"),
        format_time(&l.start_of_shift),
        format_time(&l.end_of_shift),
        format_break(l.break_hours)
    );

    for a in l.draft().evaluate().iter() {
        advisory(a);
    }

    println!(
        "{} {}",
        bold("Salary:"),
        format_salary(l.salary, &cfg.currency, &l.salary_condition)
    );
    println!(
        "{} {}{}{}",
        bold("Status:"),
        color_for_status(l.status),
        l.status.to_db_str(),
        RESET
    );
    println!("{} {}", bold("Posted by:"), colorize_optional(&l.owner));

    println!("{}", bold("Long Description:"));
    for line in textwrap::wrap(&l.long_desc, WRAP_WIDTH) {
        println!("  {}", line);
    }

    println!("\njob id: {}", l.id);
}
