//! CSV file exporter

use std::path::Path;

use serde::Serialize;

use crate::domain::result::{Error, Result};
use crate::ports::RecordExporter;

/// Writes records as comma-separated values with a header row
///
/// Headers come from the field names of the first record, in declaration
/// order. Values containing the delimiter, quotes or newlines are quoted.
#[derive(Debug, Clone, Copy)]
pub struct CsvExporter {
    delimiter: u8,
}

impl CsvExporter {
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    pub fn with_delimiter(delimiter: u8) -> Self {
        Self { delimiter }
    }
}

impl Default for CsvExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordExporter for CsvExporter {
    fn write_records<R: Serialize>(&self, records: &[R], path: &Path) -> Result<usize> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .from_path(path)?;

        for record in records {
            writer.serialize(record)?;
        }

        writer
            .flush()
            .map_err(|e| Error::Export(format!("Failed to flush {}: {}", path.display(), e)))?;

        Ok(records.len())
    }
}
