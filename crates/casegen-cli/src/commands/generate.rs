//! Generate command implementation.

use crate::cli::GenerateArgs;
use crate::commands::export::export_records;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use casegen_domain::traits::{LlmProvider, TicketSource};
use casegen_extractor::{CaseGenerator, GenerationResult};
use tracing::debug;

/// Execute the generate command.
pub async fn execute_generate<S, L>(
    args: GenerateArgs,
    source: &S,
    generator: &CaseGenerator<L>,
    formatter: &Formatter,
) -> Result<GenerationResult>
where
    S: TicketSource,
    CliError: From<S::Error>,
    L: LlmProvider,
    L::Error: std::fmt::Display,
{
    let ticket = source.fetch_ticket(&args.key).await?;
    debug!(key = %ticket.key, "Fetched ticket");

    if !formatter.is_plain() && !args.raw {
        let msg = format!(
            "Generating test cases for {}: {}",
            ticket.key,
            ticket.headline()
        );
        eprintln!("{}", formatter.info(&msg));
    }

    let result = generator.generate(&ticket).await?;

    if args.raw {
        println!("{}", result.generated_text);
    } else {
        println!("{}", formatter.format_generation(&result)?);
    }

    export_records(&result.records, &args.export, formatter)?;

    Ok(result)
}
