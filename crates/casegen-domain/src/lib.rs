//! casegen Domain Layer
//!
//! Core vocabulary shared by every casegen crate. Like any domain layer it has
//! ZERO external dependencies and defines the value types and trait seams that
//! the infrastructure crates implement.
//!
//! ## Key Concepts
//!
//! - **Ticket**: an issue-tracker record (key, summary, priority, description)
//! - **Category**: which section of generated output a test case came from
//! - **TestCaseRecord**: one extracted test case, optionally categorized
//!
//! ## Seams
//!
//! - [`traits::TicketSource`]: where tickets come from
//! - [`traits::LlmProvider`]: the text generator
//! - [`traits::SpreadsheetSink`]: where extracted records go

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod category;
pub mod record;
pub mod ticket;
pub mod traits;

// Re-exports for convenience
pub use category::Category;
pub use record::{CategoryCounts, TestCaseRecord};
pub use ticket::{Ticket, TicketRef};
pub use traits::Prompt;
