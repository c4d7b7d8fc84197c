//! CLI command definitions and argument parsing.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// casegen - Suggest test cases for issue-tracker tickets.
#[derive(Debug, Parser)]
#[command(name = "casegen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Jira API token
    #[arg(long, env = "JIRA_API_TOKEN", hide_env_values = true, global = true)]
    pub jira_token: Option<String>,

    /// API key for the OpenAI-compatible generator
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (keys or test case text only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List tickets in the configured project
    Tickets,

    /// Show a ticket's summary, priority and description
    Show(ShowArgs),

    /// Generate test cases for a ticket
    Generate(GenerateArgs),

    /// Extract test cases from already generated text
    Extract(ExtractArgs),

    /// Inspect or create the configuration file
    Config(ConfigArgs),
}

/// Arguments for the show command.
#[derive(Debug, Parser)]
pub struct ShowArgs {
    /// Ticket key (e.g., SCRUM-12)
    pub key: String,
}

/// Spreadsheet format for exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    /// Excel workbook
    Xlsx,
    /// Comma-separated values
    Csv,
}

/// Where and how to export extracted test cases.
#[derive(Debug, Clone, Default, Parser)]
pub struct ExportArgs {
    /// Write the test cases to this file (format taken from the extension)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Export format; writes generated_test_cases.<ext> when no --output is given
    #[arg(short, long, value_enum)]
    pub export: Option<ExportFormat>,
}

/// Arguments for the generate command.
#[derive(Debug, Parser)]
pub struct GenerateArgs {
    /// Ticket key (e.g., SCRUM-12)
    pub key: String,

    /// Print only the generated text, without the extracted table
    #[arg(long)]
    pub raw: bool,

    #[command(flatten)]
    pub export: ExportArgs,
}

/// Arguments for the extract command.
#[derive(Debug, Parser)]
pub struct ExtractArgs {
    /// File containing generated text
    #[arg(long, conflicts_with = "stdin")]
    pub file: Option<PathBuf>,

    /// Read generated text from stdin
    #[arg(long)]
    pub stdin: bool,

    #[command(flatten)]
    pub export: ExportArgs,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl ExportFormat {
    /// File extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Csv => "csv",
        }
    }
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
