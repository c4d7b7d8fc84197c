//! Extract command implementation.

use crate::cli::ExtractArgs;
use crate::commands::export::export_records;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use casegen_domain::{CategoryCounts, TestCaseRecord};
use casegen_extractor::extract_test_cases;
use std::fs;
use std::io::{self, Read};

/// Execute the extract command.
pub fn execute_extract(args: ExtractArgs, formatter: &Formatter) -> Result<Vec<TestCaseRecord>> {
    // Read generated text from file or stdin
    let text = if args.stdin {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else if let Some(file_path) = &args.file {
        fs::read_to_string(file_path)?
    } else {
        return Err(CliError::InvalidInput(
            "Must specify either --file or --stdin".to_string(),
        ));
    };

    let records: Vec<TestCaseRecord> = extract_test_cases(&text).collect();

    println!("{}", formatter.format_records(&records)?);
    if !formatter.is_plain() && !records.is_empty() {
        println!("{}", formatter.counts_summary(&CategoryCounts::tally(&records)));
    }

    export_records(&records, &args.export, formatter)?;

    Ok(records)
}
