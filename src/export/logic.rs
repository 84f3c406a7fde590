// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::models::AnalysisResult;
use crate::ui::messages::warning;
use crate::utils::path::absolute_output_path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Write `result` to `file`.
    ///
    /// - `format`: csv (one row per gap) | json (full result)
    /// - `file`: absolute output path (`~/` is expanded)
    /// - `force`: overwrite without asking
    pub fn export(
        result: &AnalysisResult,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = absolute_output_path(file)?;

        ensure_writable(&path, force)?;

        if !result.has_gaps() {
            warning("No missing frames: the export contains no gaps.");
        }

        tracing::info!(
            format = format.as_str(),
            path = %path.display(),
            gaps = result.gap_count(),
            "exporting analysis"
        );

        match format {
            ExportFormat::Csv => export_csv(result, &path)?,
            ExportFormat::Json => export_json(result, &path)?,
        }

        Ok(())
    }
}
