//! Export of a computed week layout.

mod csv;
mod fs_utils;
mod json;
mod model;

pub use model::{SegmentExport, WeekExport};

use crate::core::calendar::{GridMetrics, WeekLayout};
use crate::errors::AppResult;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

pub struct ExportLogic;

impl ExportLogic {
    /// Write `layout` to `path` in `format`. Returns the number of segments written.
    pub fn export(
        layout: &WeekLayout<'_>,
        metrics: &GridMetrics,
        format: ExportFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<usize> {
        fs_utils::ensure_writable(path, force)?;
        fs_utils::ensure_parent(path)?;

        let doc = model::week_document(layout, metrics);
        let count = doc.segments.len();
        match format {
            ExportFormat::Json => json::write_json(path, &doc)?,
            ExportFormat::Csv => csv::write_csv(path, &doc.segments)?,
        }

        success(format!(
            "{} export completed: {} ({} segments)",
            format.as_str().to_uppercase(),
            path.display(),
            count
        ));
        Ok(count)
    }

    /// Rows of `layout` without touching the filesystem.
    pub fn rows(layout: &WeekLayout<'_>, metrics: &GridMetrics) -> Vec<SegmentExport> {
        model::flatten(layout, metrics)
    }
}
