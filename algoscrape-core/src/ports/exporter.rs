//! Record export port

use std::path::Path;

use serde::Serialize;

use crate::domain::result::Result;

/// Writes a sequence of uniform records to a tabular file
pub trait RecordExporter {
    /// Write a header row derived from the first record, then one row per
    /// record, replacing whatever is at `path`
    ///
    /// Callers never pass an empty slice; see
    /// [`ExportService`](crate::services::ExportService).
    ///
    /// # Returns
    /// The number of data rows written
    fn write_records<R: Serialize>(&self, records: &[R], path: &Path) -> Result<usize>;
}
