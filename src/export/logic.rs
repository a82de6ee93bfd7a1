// src/export/logic.rs

use crate::core::browse::{BrowseFilter, BrowseLogic};
use crate::db::log::audit_or_warn;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::{ExportFormat, ListingExport};
use crate::ui::messages::warning;
use crate::utils::path::absolute_output_path;

pub struct ExportLogic;

impl ExportLogic {
    /// Export listings (optionally narrowed by a category search) to `file`.
    pub fn export(
        pool: &DbPool,
        format: ExportFormat,
        file: &str,
        search: Option<&str>,
        force: bool,
    ) -> AppResult<usize> {
        let path = absolute_output_path(file)?;
        ensure_writable(&path, force)?;

        let filter = BrowseFilter {
            search,
            ..Default::default()
        };
        let listings = BrowseLogic::list(pool, &filter)?;
        if listings.is_empty() {
            warning("No listings match: exporting an empty file.");
        }

        let rows: Vec<ListingExport> = listings.iter().map(ListingExport::from).collect();

        match format {
            ExportFormat::Csv => export_csv(&rows, &path)?,
            ExportFormat::Json => export_json(&rows, &path)?,
        }

        audit_or_warn(
            &pool.conn,
            "export",
            format.as_str(),
            &format!("{} listing(s) → {}", rows.len(), path.display()),
        );

        Ok(rows.len())
    }
}
