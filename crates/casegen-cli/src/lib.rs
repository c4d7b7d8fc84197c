//! casegen CLI library.
//!
//! Command-line front end for suggesting test cases from issue-tracker
//! tickets: configuration management, command execution and output
//! formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod provider;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
pub use provider::ConfiguredProvider;
