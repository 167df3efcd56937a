// src/export/logic.rs

use crate::core::report::ReportProjection;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::{ensure_absolute, ensure_writable};
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::flatten_report;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Write `report` to `file` (absolute path) in `format`. An existing file
    /// is replaced only with `force` or after confirmation.
    pub fn export(
        report: &ReportProjection,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        ensure_absolute(path)?;
        ensure_writable(path, force)?;

        match format {
            ExportFormat::Json => export_json(report, path),
            ExportFormat::Csv => export_csv(&flatten_report(report), path),
        }
    }
}
