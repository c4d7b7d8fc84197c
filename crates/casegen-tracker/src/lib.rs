//! casegen Tracker
//!
//! Issue-tracker access for casegen. Implements the `TicketSource` trait from
//! `casegen-domain`.
//!
//! # Sources
//!
//! - `JiraClient`: Jira Cloud REST API (v3), basic auth with an API token
//! - `FixedTicketSource`: In-memory tickets for tests
//!
//! # Example
//!
//! ```no_run
//! use casegen_tracker::{JiraClient, JiraConfig};
//!
//! # async fn example() -> Result<(), casegen_tracker::TrackerError> {
//! let client = JiraClient::new(JiraConfig {
//!     domain: "https://example.atlassian.net".to_string(),
//!     email: "qa@example.com".to_string(),
//!     api_token: std::env::var("JIRA_API_TOKEN").unwrap_or_default(),
//!     project_key: "SCRUM".to_string(),
//!     max_results: 10,
//! })?;
//!
//! for ticket in client.search().await? {
//!     println!("{}", ticket.key);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod adf;
#[cfg(test)]
mod canned;
mod error;
mod fixed;
pub mod jira;

pub use error::TrackerError;
pub use fixed::FixedTicketSource;
pub use jira::{JiraClient, JiraConfig};
