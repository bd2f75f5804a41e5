//! Export service - write fetched records to a file

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::adapters::csv_export::CsvExporter;
use crate::domain::result::Result;
use crate::ports::RecordExporter;

/// Outcome of an export
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ExportOutcome {
    /// Nothing to export; the target path was left untouched
    Empty,
    Written { path: PathBuf, rows: usize },
}

/// Export service
pub struct ExportService<E: RecordExporter = CsvExporter> {
    exporter: E,
}

impl ExportService<CsvExporter> {
    pub fn new() -> Self {
        Self::with_exporter(CsvExporter::new())
    }
}

impl Default for ExportService<CsvExporter> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: RecordExporter> ExportService<E> {
    pub fn with_exporter(exporter: E) -> Self {
        Self { exporter }
    }

    /// Write `records` to `path`, overwriting it
    ///
    /// An empty slice is not an error: nothing is written and
    /// [`ExportOutcome::Empty`] is returned.
    pub fn export<R: Serialize>(&self, records: &[R], path: &Path) -> Result<ExportOutcome> {
        if records.is_empty() {
            tracing::warn!(path = %path.display(), "Empty data, nothing to export");
            return Ok(ExportOutcome::Empty);
        }

        let rows = self.exporter.write_records(records, path)?;
        tracing::info!(path = %path.display(), rows, "Exported records");

        Ok(ExportOutcome::Written {
            path: path.to_path_buf(),
            rows,
        })
    }
}
