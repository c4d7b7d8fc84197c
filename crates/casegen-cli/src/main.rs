//! casegen - Suggest test cases for issue-tracker tickets.

use casegen_cli::commands;
use casegen_cli::{Cli, Command, Config, Formatter};
use casegen_extractor::CaseGenerator;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> casegen_cli::Result<()> {
    let cli = Cli::parse();

    // Log to stderr; RUST_LOG overrides -v
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => Config::path()?,
    };
    let config = Config::load_from(&config_path)?;

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    let jira_token = cli.jira_token.as_deref();

    match cli.command {
        Command::Tickets => {
            let client = config.jira_client(jira_token)?;
            commands::execute_tickets(&client, &formatter).await?;
        }
        Command::Show(args) => {
            let client = config.jira_client(jira_token)?;
            commands::execute_show(args, &client, &formatter).await?;
        }
        Command::Generate(args) => {
            let client = config.jira_client(jira_token)?;
            let provider = config.llm_provider(cli.api_key.as_deref())?;
            let generator = CaseGenerator::new(provider, config.pipeline.clone())?;
            commands::execute_generate(args, &client, &generator, &formatter).await?;
        }
        Command::Extract(args) => {
            commands::execute_extract(args, &formatter)?;
        }
        Command::Config(args) => {
            commands::execute_config(args, &config, &config_path, &formatter)?;
        }
    }

    Ok(())
}
