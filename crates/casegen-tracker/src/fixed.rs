//! In-memory ticket source

use crate::error::TrackerError;
use casegen_domain::traits::TicketSource;
use casegen_domain::{Ticket, TicketRef};

/// Ticket source backed by a fixed list of tickets
///
/// Used for tests and for running against exported ticket data.
///
/// # Examples
///
/// ```
/// use casegen_tracker::FixedTicketSource;
/// use casegen_domain::Ticket;
///
/// let source = FixedTicketSource::new(vec![Ticket {
///     key: "SCRUM-1".to_string(),
///     summary: "Login with OTP".to_string(),
///     priority: None,
///     description: None,
/// }]);
/// assert_eq!(source.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FixedTicketSource {
    tickets: Vec<Ticket>,
}

impl FixedTicketSource {
    /// Create a source serving `tickets`, in order
    pub fn new(tickets: Vec<Ticket>) -> Self {
        Self { tickets }
    }

    /// Number of tickets
    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    /// True when there are no tickets
    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }
}

impl TicketSource for FixedTicketSource {
    type Error = TrackerError;

    async fn list_tickets(&self) -> Result<Vec<TicketRef>, Self::Error> {
        Ok(self
            .tickets
            .iter()
            .map(|t| TicketRef {
                key: t.key.clone(),
                summary: Some(t.summary.clone()),
            })
            .collect())
    }

    async fn fetch_ticket(&self, key: &str) -> Result<Ticket, Self::Error> {
        self.tickets
            .iter()
            .find(|t| t.key.eq_ignore_ascii_case(key))
            .cloned()
            .ok_or_else(|| TrackerError::TicketNotFound(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> FixedTicketSource {
        FixedTicketSource::new(vec![
            Ticket {
                key: "SCRUM-1".to_string(),
                summary: "Login".to_string(),
                priority: Some("High".to_string()),
                description: None,
            },
            Ticket {
                key: "SCRUM-2".to_string(),
                summary: "Logout".to_string(),
                priority: None,
                description: None,
            },
        ])
    }

    #[tokio::test]
    async fn test_list_preserves_order() {
        let refs = source().list_tickets().await.unwrap();
        let keys: Vec<_> = refs.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, ["SCRUM-1", "SCRUM-2"]);
    }

    #[tokio::test]
    async fn test_fetch_is_case_insensitive() {
        let ticket = source().fetch_ticket("scrum-2").await.unwrap();
        assert_eq!(ticket.summary, "Logout");
    }

    #[tokio::test]
    async fn test_fetch_missing() {
        let result = source().fetch_ticket("SCRUM-9").await;
        assert!(matches!(result, Err(TrackerError::TicketNotFound(_))));
    }
}
