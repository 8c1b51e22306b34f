// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::document_rows;
use crate::export::pdf::export_pdf;
use crate::export::xlsx::export_xlsx;
use crate::models::Inventory;
use crate::query::{Scope, aggregate};
use crate::ui::messages::warning;

use std::path::Path;

/// High-level export entry point.
pub struct ExportLogic;

impl ExportLogic {
    /// Write the report for `scope` to `file` in the chosen format.
    ///
    /// Only active items are exported; a scope with nothing active is a
    /// warning, not an error, and writes no file.
    pub fn export(
        store: &Inventory,
        scope: Scope,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        let document = aggregate(store, scope);
        let rows = document_rows(&document);

        if rows.is_empty() {
            warning("No active items found for the selected scope.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
            ExportFormat::Xlsx => export_xlsx(&rows, path)?,
            ExportFormat::Pdf => {
                let title = format!("Equipment report - {}", scope.label());
                export_pdf(&rows, path, &title)?;
            }
        }

        Ok(())
    }
}
