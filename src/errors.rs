//! Unified application error type.
//! Every module outside the calculator (db, core, cli, config, export)
//! returns AppError so that `main` has a single place to report failures.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid time format: {0} (expected HH:MM)")]
    InvalidTime(String),

    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    #[error("Invalid listing status: {0} (use 'active' or 'closed')")]
    InvalidStatus(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    // ---------------------------
    // Session / ownership
    // ---------------------------
    #[error("No user given: pass --user NAME or set 'default_user' in the configuration")]
    NoSession,

    #[error("Listing {0} not found")]
    NotFound(i64),

    #[error("Listing {0} belongs to you: you cannot apply to your own listing")]
    OwnListing(i64),

    #[error("Listing {0} is closed and no longer accepts applications")]
    ListingClosed(i64),

    #[error("You have already applied to listing {0}")]
    AlreadyApplied(i64),

    #[error("Nothing to update: pass at least one of --location, --available, --category, --skills, --about")]
    NothingToUpdate,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
