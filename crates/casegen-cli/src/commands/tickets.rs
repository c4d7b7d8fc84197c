//! Tickets command implementation.

use crate::error::{CliError, Result};
use crate::output::Formatter;
use casegen_domain::traits::TicketSource;
use casegen_domain::TicketRef;

/// Execute the tickets command.
pub async fn execute_tickets<S>(source: &S, formatter: &Formatter) -> Result<Vec<TicketRef>>
where
    S: TicketSource,
    CliError: From<S::Error>,
{
    let tickets = source.list_tickets().await?;
    println!("{}", formatter.format_tickets(&tickets)?);
    Ok(tickets)
}
