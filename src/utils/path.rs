//! Path utilities: expand ~, validate export destinations.

use crate::errors::{AppError, AppResult};
use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Export destinations must be absolute once `~` is expanded.
pub fn absolute_output_path(path: &str) -> AppResult<PathBuf> {
    let p = expand_tilde(path);
    if p.is_absolute() {
        Ok(p)
    } else {
        Err(AppError::Export(format!(
            "output path must be absolute: {}",
            path
        )))
    }
}
