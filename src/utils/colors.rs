/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";

use crate::core::calculator::{Advisory, Level};
use crate::models::listing_status::ListingStatus;

/// Blue for info, red for warnings.
pub fn color_for_advisory(a: &Advisory) -> &'static str {
    match a.level {
        Level::Info => BLUE,
        Level::Warning => RED,
    }
}

pub fn color_for_status(status: ListingStatus) -> &'static str {
    match status {
        ListingStatus::Active => GREEN,
        ListingStatus::Closed => GREY,
    }
}

/// Grey for empty values ("" or "--"), unchanged otherwise.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

pub fn colorize_bid(value: &str) -> String {
    format!("{YELLOW}{value}{RESET}")
}
