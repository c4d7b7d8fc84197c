//! Spreadsheet export shared by generate and extract.

use crate::cli::{ExportArgs, ExportFormat};
use crate::error::Result;
use crate::output::Formatter;
use casegen_domain::TestCaseRecord;
use casegen_export::{write_to_file, CsvSink, XlsxSink, DEFAULT_FILE_STEM};
use std::path::{Path, PathBuf};

/// Decide where and in which format to export, if at all.
///
/// An explicit `--export` wins; otherwise the format follows the
/// `--output` extension, falling back to xlsx.
pub fn resolve_export(args: &ExportArgs) -> Option<(PathBuf, ExportFormat)> {
    match (&args.output, args.export) {
        (None, None) => None,
        (None, Some(format)) => Some((
            PathBuf::from(format!("{}.{}", DEFAULT_FILE_STEM, format.extension())),
            format,
        )),
        (Some(path), Some(format)) => Some((path.clone(), format)),
        (Some(path), None) => Some((path.clone(), format_from_extension(path))),
    }
}

fn format_from_extension(path: &Path) -> ExportFormat {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("csv") => ExportFormat::Csv,
        _ => ExportFormat::Xlsx,
    }
}

/// Write `records` according to `args`. Returns the path written, if any.
pub fn export_records(
    records: &[TestCaseRecord],
    args: &ExportArgs,
    formatter: &Formatter,
) -> Result<Option<PathBuf>> {
    let Some((path, format)) = resolve_export(args) else {
        return Ok(None);
    };

    if records.is_empty() {
        eprintln!("{}", formatter.warning("No test cases to export"));
        return Ok(None);
    }

    match format {
        ExportFormat::Xlsx => write_to_file(&XlsxSink::new(), records, &path)?,
        ExportFormat::Csv => write_to_file(&CsvSink::new(), records, &path)?,
    }

    eprintln!(
        "{}",
        formatter.success(&format!(
            "Exported {} test case(s) to {}",
            records.len(),
            path.display()
        ))
    );
    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use casegen_domain::Category;

    fn args(output: Option<&str>, export: Option<ExportFormat>) -> ExportArgs {
        ExportArgs {
            output: output.map(PathBuf::from),
            export,
        }
    }

    #[test]
    fn test_no_export_requested() {
        assert!(resolve_export(&args(None, None)).is_none());
    }

    #[test]
    fn test_default_file_name() {
        assert_eq!(
            resolve_export(&args(None, Some(ExportFormat::Xlsx))),
            Some((PathBuf::from("generated_test_cases.xlsx"), ExportFormat::Xlsx))
        );
        assert_eq!(
            resolve_export(&args(None, Some(ExportFormat::Csv))),
            Some((PathBuf::from("generated_test_cases.csv"), ExportFormat::Csv))
        );
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            resolve_export(&args(Some("out/cases.CSV"), None)).map(|(_, f)| f),
            Some(ExportFormat::Csv)
        );
        assert_eq!(
            resolve_export(&args(Some("cases.xlsx"), None)).map(|(_, f)| f),
            Some(ExportFormat::Xlsx)
        );
        assert_eq!(
            resolve_export(&args(Some("cases"), None)).map(|(_, f)| f),
            Some(ExportFormat::Xlsx)
        );
    }

    #[test]
    fn test_explicit_format_wins() {
        assert_eq!(
            resolve_export(&args(Some("cases.txt"), Some(ExportFormat::Csv))),
            Some((PathBuf::from("cases.txt"), ExportFormat::Csv))
        );
    }

    #[test]
    fn test_export_csv_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cases.csv");
        let path_str = path.to_str().unwrap();
        let records = vec![TestCaseRecord::new(Some(Category::Negative), "1. Wrong OTP")];
        let formatter = Formatter::new(OutputFormat::Table, false);

        let written = export_records(&records, &args(Some(path_str), None), &formatter).unwrap();

        assert_eq!(written, Some(path.clone()));
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "Category,Test Case\nNegative,1. Wrong OTP\n"
        );
    }

    #[test]
    fn test_export_xlsx_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cases.xlsx");
        let records = vec![TestCaseRecord::new(None, "1. Check valid login")];
        let formatter = Formatter::new(OutputFormat::Table, false);

        export_records(&records, &args(path.to_str(), None), &formatter).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn test_nothing_to_export() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cases.csv");
        let formatter = Formatter::new(OutputFormat::Table, false);

        let written = export_records(&[], &args(path.to_str(), None), &formatter).unwrap();

        assert!(written.is_none());
        assert!(!path.exists());
    }
}
