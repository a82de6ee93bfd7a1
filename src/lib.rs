//! shiftboard library root.
//! Exposes the CLI parser, the high-level run() function, and the
//! modules behind it: the listing calculator, browsing, applications
//! and profiles.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use models::session::Session;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, session: Option<&Session>) -> AppResult<()> {
    match &cli.command {
        Commands::Init => commands::init::handle(cli),
        Commands::Config { .. } => commands::config::handle(&cli.command, cfg),
        Commands::Log { .. } => commands::log::handle(&cli.command, cfg),
        Commands::Check { .. } => commands::check::handle(&cli.command),
        Commands::Post { .. } => commands::post::handle(&cli.command, cfg, session),
        Commands::List { .. } => commands::list::handle(&cli.command, cfg, session),
        Commands::Show { .. } => commands::show::handle(&cli.command, cfg, session),
        Commands::Apply { .. } => commands::apply::handle(&cli.command, cfg, session),
        Commands::Applicants { .. } => commands::applicants::handle(&cli.command, cfg, session),
        Commands::Status { .. } => commands::status::handle(&cli.command, cfg, session),
        Commands::Profile { .. } => commands::profile::handle(&cli.command, cfg, session),
        Commands::Parttimers { .. } => commands::parttimers::handle(&cli.command, cfg),
        Commands::Export { .. } => commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // config is loaded once; --db overrides the stored database path
    let mut cfg = Config::load()?;
    if let Some(custom_db) = &cli.db {
        cfg.database = utils::path::expand_tilde(custom_db)
            .to_string_lossy()
            .to_string();
    }

    let session = Session::resolve(cli.user.as_deref(), cfg.default_user.as_deref());

    dispatch(&cli, &cfg, session.as_ref())
}
