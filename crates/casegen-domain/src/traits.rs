//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the extraction logic and the
//! services around it. Implementations live in other crates.

use crate::{TestCaseRecord, Ticket, TicketRef};
use std::future::Future;

/// A two-part chat prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    /// Instruction establishing the assistant's role
    pub system: String,

    /// The request itself
    pub user: String,
}

/// Trait for reading tickets from an issue tracker
///
/// Implemented by the infrastructure layer (casegen-tracker)
pub trait TicketSource {
    /// Error type for tracker operations
    type Error;

    /// List tickets available for test generation
    fn list_tickets(&self) -> impl Future<Output = Result<Vec<TicketRef>, Self::Error>> + Send;

    /// Fetch a single ticket by key
    fn fetch_ticket(&self, key: &str) -> impl Future<Output = Result<Ticket, Self::Error>> + Send;
}

/// Trait for LLM provider operations
///
/// Implemented by the infrastructure layer (casegen-llm)
pub trait LlmProvider {
    /// Error type for LLM operations
    type Error;

    /// Name of the model answering requests
    fn model_name(&self) -> &str;

    /// Generate a text completion
    fn generate(&self, prompt: &Prompt) -> impl Future<Output = Result<String, Self::Error>> + Send;
}

/// Trait for serializing records into a downloadable file
///
/// Implemented by the infrastructure layer (casegen-export)
pub trait SpreadsheetSink {
    /// Error type for serialization
    type Error;

    /// File extension without the leading dot
    fn file_extension(&self) -> &'static str;

    /// MIME type of the produced blob
    fn mime_type(&self) -> &'static str;

    /// Serialize records, in order, to a binary blob
    fn write_rows(&self, records: &[TestCaseRecord]) -> Result<Vec<u8>, Self::Error>;
}
