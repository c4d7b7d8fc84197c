//! Ticket module - issue-tracker records

/// Priority shown when the tracker has none recorded
pub const PRIORITY_NOT_SET: &str = "Not set";

/// A ticket fetched from the issue tracker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    /// Ticket key (e.g., "SCRUM-12")
    pub key: String,

    /// One-line summary
    pub summary: String,

    /// Priority name, when set
    pub priority: Option<String>,

    /// Plain-text description, when present
    pub description: Option<String>,
}

impl Ticket {
    /// Priority name, falling back to [`PRIORITY_NOT_SET`]
    pub fn priority_or_default(&self) -> &str {
        self.priority.as_deref().unwrap_or(PRIORITY_NOT_SET)
    }

    /// Summary with its priority, e.g. `Login with OTP (Priority: High)`
    pub fn headline(&self) -> String {
        format!("{} (Priority: {})", self.summary, self.priority_or_default())
    }

    /// Description with surrounding whitespace removed, if non-empty
    pub fn description_text(&self) -> Option<&str> {
        self.description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
    }
}

/// Listing entry for a ticket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketRef {
    /// Ticket key
    pub key: String,

    /// Summary, if the listing included it
    pub summary: Option<String>,
}
