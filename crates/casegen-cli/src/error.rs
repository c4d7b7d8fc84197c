//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Issue tracker error
    #[error("Issue tracker error: {0}")]
    Tracker(#[from] casegen_tracker::TrackerError),

    /// Generator provider error
    #[error("Generator error: {0}")]
    Llm(#[from] casegen_llm::LlmError),

    /// Test case generation error
    #[error("Failed to generate test cases: {0}")]
    Generation(#[from] casegen_extractor::ExtractorError),

    /// Spreadsheet export error
    #[error("Failed to export test cases: {0}")]
    Export(#[from] casegen_export::ExportError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
