//! Excel sink

use crate::error::ExportError;
use crate::{data_row, has_category_column, header_row};
use casegen_domain::traits::SpreadsheetSink;
use casegen_domain::TestCaseRecord;
use rust_xlsxwriter::{Format, Workbook};

/// Default worksheet name
pub const DEFAULT_SHEET_NAME: &str = "Test Cases";

const CATEGORY_WIDTH: f64 = 12.0;
const TEST_CASE_WIDTH: f64 = 90.0;

/// Writes records as an `.xlsx` workbook
#[derive(Debug, Clone)]
pub struct XlsxSink {
    sheet_name: String,
}

impl Default for XlsxSink {
    fn default() -> Self {
        Self {
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
        }
    }
}

impl XlsxSink {
    /// Create a sink writing to a `Test Cases` sheet
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different worksheet name
    pub fn with_sheet_name(mut self, name: impl Into<String>) -> Self {
        self.sheet_name = name.into();
        self
    }
}

impl SpreadsheetSink for XlsxSink {
    type Error = ExportError;

    fn file_extension(&self) -> &'static str {
        "xlsx"
    }

    fn mime_type(&self) -> &'static str {
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    }

    fn write_rows(&self, records: &[TestCaseRecord]) -> Result<Vec<u8>, Self::Error> {
        let with_category = has_category_column(records);
        let header_format = Format::new().set_bold();
        let cell_format = Format::new().set_text_wrap();

        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&self.sheet_name)?;

        for (col, title) in header_row(records).into_iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, title, &header_format)?;
        }

        // Rows are 1-based below the header.
        for (idx, record) in records.iter().enumerate() {
            let row = idx as u32 + 1;
            for (col, value) in data_row(record, with_category).into_iter().enumerate() {
                worksheet.write_string_with_format(row, col as u16, value, &cell_format)?;
            }
        }

        if with_category {
            worksheet.set_column_width(0, CATEGORY_WIDTH)?;
            worksheet.set_column_width(1, TEST_CASE_WIDTH)?;
        } else {
            worksheet.set_column_width(0, TEST_CASE_WIDTH)?;
        }
        worksheet.set_freeze_panes(1, 0)?;

        Ok(workbook.save_to_buffer()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::{Reader, Xlsx};
    use casegen_domain::Category;
    use std::io::Cursor;

    fn read_sheet(bytes: Vec<u8>, sheet: &str) -> Vec<Vec<String>> {
        let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes)).unwrap();
        let range = workbook.worksheet_range(sheet).unwrap();
        range
            .rows()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_categorized_workbook() {
        let records = vec![
            TestCaseRecord::new(
                Some(Category::Positive),
                "1. Login succeeds with valid OTP\n  • Verify OTP expires after 5 minutes",
            ),
            TestCaseRecord::new(Some(Category::Negative), "1. Login fails with expired OTP"),
        ];

        let bytes = XlsxSink::new().write_rows(&records).unwrap();
        let rows = read_sheet(bytes, DEFAULT_SHEET_NAME);

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], vec!["Category", "Test Case"]);
        assert_eq!(
            rows[1],
            vec![
                "Positive",
                "1. Login succeeds with valid OTP\n  • Verify OTP expires after 5 minutes"
            ]
        );
        assert_eq!(rows[2], vec!["Negative", "1. Login fails with expired OTP"]);
    }

    #[test]
    fn test_uncategorized_workbook() {
        let records = vec![
            TestCaseRecord::new(None, "1. Check valid login"),
            TestCaseRecord::new(None, "2. Check invalid login"),
        ];

        let bytes = XlsxSink::new().write_rows(&records).unwrap();
        let rows = read_sheet(bytes, DEFAULT_SHEET_NAME);

        assert_eq!(rows[0], vec!["Test Case"]);
        assert_eq!(rows[1], vec!["1. Check valid login"]);
        assert_eq!(rows[2], vec!["2. Check invalid login"]);
    }

    #[test]
    fn test_custom_sheet_name() {
        let records = vec![TestCaseRecord::new(None, "1. a")];
        let bytes = XlsxSink::new()
            .with_sheet_name("SCRUM-1")
            .write_rows(&records)
            .unwrap();
        assert_eq!(read_sheet(bytes, "SCRUM-1")[1], vec!["1. a"]);
    }

    #[test]
    fn test_invalid_sheet_name() {
        let result = XlsxSink::new()
            .with_sheet_name("bad/name")
            .write_rows(&[]);
        assert!(matches!(result, Err(ExportError::Xlsx(_))));
    }

    #[test]
    fn test_metadata() {
        let sink = XlsxSink::new();
        assert_eq!(sink.file_extension(), "xlsx");
        assert!(sink.mime_type().contains("spreadsheetml"));
    }
}
