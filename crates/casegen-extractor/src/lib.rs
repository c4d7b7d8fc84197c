//! casegen Extractor
//!
//! Turns an issue-tracker ticket into a list of suggested test cases.
//!
//! # Overview
//!
//! The generator (an LLM) is asked for positive, negative and edge test cases
//! for a ticket. Its answer is free-form text; the extractor scans it line by
//! line and pulls out categorized [`TestCaseRecord`]s that can be exported as
//! a spreadsheet.
//!
//! # Architecture
//!
//! ```text
//! Ticket → PromptBuilder → LLM → extract_test_cases → Records → Spreadsheet
//! ```
//!
//! # Example Usage
//!
//! Extraction on its own is a pure function of the text:
//!
//! ```
//! use casegen_extractor::extract_test_cases;
//! use casegen_domain::Category;
//!
//! let text = "Positive Test Cases:\n1. Login succeeds\n• Enter a valid OTP";
//! let records: Vec<_> = extract_test_cases(text).collect();
//!
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].category, Some(Category::Positive));
//! assert_eq!(records[0].text, "1. Login succeeds\n  • Enter a valid OTP");
//! ```
//!
//! The full pipeline needs an [`LlmProvider`](casegen_domain::traits::LlmProvider):
//!
//! ```no_run
//! use casegen_extractor::{CaseGenerator, PipelineConfig};
//! use casegen_domain::Ticket;
//! use casegen_llm::MockProvider;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let llm = MockProvider::new("Positive Test Cases:\n1. Login succeeds");
//! let generator = CaseGenerator::new(llm, PipelineConfig::default())?;
//!
//! let ticket = Ticket {
//!     key: "SCRUM-1".to_string(),
//!     summary: "Login with OTP".to_string(),
//!     priority: Some("High".to_string()),
//!     description: None,
//! };
//!
//! let result = generator.generate(&ticket).await?;
//! println!("Extracted {} test cases", result.records.len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod generator;
mod parser;
mod prompt;
mod types;


pub use casegen_domain::TestCaseRecord;
pub use config::PipelineConfig;
pub use error::ExtractorError;
pub use generator::CaseGenerator;
pub use parser::{extract_test_cases, TestCases};
pub use prompt::PromptBuilder;
pub use types::{GenerationMetadata, GenerationResult};
