//! Error types for test case generation

use thiserror::Error;

/// Errors that can occur while generating test cases for a ticket
///
/// Extraction itself cannot fail; these cover the generator call around it.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// LLM provider error
    #[error("LLM error: {0}")]
    Llm(String),

    /// Ticket text exceeds maximum length
    #[error("Ticket text too long: {0} chars (max: {1})")]
    TicketTooLong(usize, usize),

    /// Generation timeout
    #[error("Generation timed out after {0}s")]
    Timeout(u64),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
