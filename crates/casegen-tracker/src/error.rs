//! Error types for issue-tracker access

use thiserror::Error;

/// Errors that can occur while talking to the issue tracker
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Tracker answered with a non-success status
    #[error("HTTP {status}: {body}")]
    Http {
        /// Status code
        status: u16,
        /// Response body, as returned
        body: String,
    },

    /// No ticket with this key
    #[error("Ticket not found: {0}")]
    TicketNotFound(String),

    /// Ticket key contains characters a key cannot have
    #[error("Invalid ticket key: '{0}'")]
    InvalidKey(String),

    /// Network or connection error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Response body did not have the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for TrackerError {
    fn from(e: serde_json::Error) -> Self {
        TrackerError::InvalidResponse(e.to_string())
    }
}
