//! Show command implementation.

use crate::cli::ShowArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use casegen_domain::traits::TicketSource;
use casegen_domain::Ticket;

/// Execute the show command.
pub async fn execute_show<S>(args: ShowArgs, source: &S, formatter: &Formatter) -> Result<Ticket>
where
    S: TicketSource,
    CliError: From<S::Error>,
{
    let ticket = source.fetch_ticket(&args.key).await?;
    println!("{}", formatter.format_ticket(&ticket)?);
    Ok(ticket)
}
