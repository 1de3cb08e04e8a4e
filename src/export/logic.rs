// src/export/logic.rs

use crate::core::ledger::Snapshot;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::EntryExport;
use crate::export::xlsx::export_xlsx;
use crate::ui::messages::warning;
use std::path::Path;

/// High-level export entry point.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the entries of `snapshot`, optionally only those of `user`.
    ///
    /// - `format`: csv | json | xlsx
    /// - `file`: absolute path of the output file
    /// - `force`: overwrite without asking
    ///
    /// Returns the number of exported rows.
    pub fn export(
        snapshot: &Snapshot,
        format: ExportFormat,
        file: &str,
        user: Option<&str>,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        let rows: Vec<EntryExport> = snapshot
            .filtered(user)
            .into_iter()
            .map(EntryExport::from)
            .collect();

        if rows.is_empty() {
            warning("No fuel entries found for the selected user.");
            return Ok(0);
        }

        ensure_writable(path, force)?;

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
            ExportFormat::Xlsx => export_xlsx(&rows, path)?,
        }

        Ok(rows.len())
    }
}
