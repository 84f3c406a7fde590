// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::gaps_to_rows;
use crate::export::notify_export_success;
use crate::models::AnalysisResult;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export the full result as pretty-printed JSON.
pub(crate) fn export_json(result: &AnalysisResult, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(result)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;
    file.write_all(b"\n")?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export one CSV row per gap (header derived from serde).
pub(crate) fn export_csv(result: &AnalysisResult, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    let rows = gaps_to_rows(result);
    if rows.is_empty() {
        // serde only emits the header with the first record
        wtr.write_record(["start", "end", "size", "longest"])
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    for row in &rows {
        wtr.serialize(row)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
