//! CSV sink

use crate::error::ExportError;
use crate::{data_row, has_category_column, header_row};
use casegen_domain::traits::SpreadsheetSink;
use casegen_domain::TestCaseRecord;
use csv::WriterBuilder;

/// Writes records as CSV
#[derive(Debug, Clone)]
pub struct CsvSink {
    delimiter: u8,
}

impl Default for CsvSink {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl CsvSink {
    /// Create a CSV sink with a comma delimiter
    pub fn new() -> Self {
        Self::default()
    }

    /// Set custom delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

impl SpreadsheetSink for CsvSink {
    type Error = ExportError;

    fn file_extension(&self) -> &'static str {
        "csv"
    }

    fn mime_type(&self) -> &'static str {
        "text/csv"
    }

    fn write_rows(&self, records: &[TestCaseRecord]) -> Result<Vec<u8>, Self::Error> {
        let with_category = has_category_column(records);
        let mut writer = WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_writer(Vec::new());

        writer.write_record(header_row(records))?;
        for record in records {
            writer.write_record(data_row(record, with_category))?;
        }

        writer
            .into_inner()
            .map_err(|e| ExportError::Io(e.into_error()))
    }
}
