//! casegen Export
//!
//! Spreadsheet sinks implementing the `SpreadsheetSink` trait from
//! `casegen-domain`.
//!
//! Every sink writes one row per record, in order, under a `Test Case`
//! column. When any record carries a category a `Category` column comes
//! first.
//!
//! # Sinks
//!
//! - `XlsxSink`: Excel workbook with a single `Test Cases` sheet
//! - `CsvSink`: comma-separated values
//!
//! # Example
//!
//! ```
//! use casegen_export::CsvSink;
//! use casegen_domain::{traits::SpreadsheetSink, Category, TestCaseRecord};
//!
//! let records = vec![TestCaseRecord::new(Some(Category::Positive), "1. Login succeeds")];
//! let bytes = CsvSink::new().write_rows(&records).unwrap();
//! assert_eq!(String::from_utf8(bytes).unwrap(), "Category,Test Case\nPositive,1. Login succeeds\n");
//! ```

#![warn(missing_docs)]

mod csv_sink;
mod error;
mod xlsx;

pub use csv_sink::CsvSink;
pub use error::ExportError;
pub use xlsx::XlsxSink;

use casegen_domain::traits::SpreadsheetSink;
use casegen_domain::{CategoryCounts, TestCaseRecord};
use std::path::Path;
use tracing::info;

/// Header of the category column
pub const CATEGORY_COLUMN: &str = "Category";

/// Header of the test case column
pub const TEST_CASE_COLUMN: &str = "Test Case";

/// Default export file name, without extension
pub const DEFAULT_FILE_STEM: &str = "generated_test_cases";

/// Whether the export gets a `Category` column
pub fn has_category_column(records: &[TestCaseRecord]) -> bool {
    CategoryCounts::tally(records).has_categories()
}

/// Header row for `records`
pub fn header_row(records: &[TestCaseRecord]) -> Vec<&'static str> {
    if has_category_column(records) {
        vec![CATEGORY_COLUMN, TEST_CASE_COLUMN]
    } else {
        vec![TEST_CASE_COLUMN]
    }
}

/// Cells of one data row, matching [`header_row`]
pub(crate) fn data_row(record: &TestCaseRecord, with_category: bool) -> Vec<&str> {
    if with_category {
        vec![record.category_label(), record.text.as_str()]
    } else {
        vec![record.text.as_str()]
    }
}

/// Serialize `records` with `sink` and write the result to `path`
pub fn write_to_file<S>(sink: &S, records: &[TestCaseRecord], path: &Path) -> Result<(), ExportError>
where
    S: SpreadsheetSink,
    ExportError: From<S::Error>,
{
    let bytes = sink.write_rows(records)?;
    std::fs::write(path, &bytes)?;
    info!(
        "Wrote {} test cases ({} bytes) to {}",
        records.len(),
        bytes.len(),
        path.display()
    );
    Ok(())
}
