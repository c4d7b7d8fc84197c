//! Error types for spreadsheet export

use thiserror::Error;

/// Errors that can occur while writing a spreadsheet
#[derive(Error, Debug)]
pub enum ExportError {
    /// Workbook could not be built
    #[error("Excel error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// CSV could not be written
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
