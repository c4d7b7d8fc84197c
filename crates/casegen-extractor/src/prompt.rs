//! Prompt construction for test case generation

use casegen_domain::{Prompt, Ticket};

/// Builds the generator prompt for a ticket
pub struct PromptBuilder {
    headline: String,
    description: Option<String>,
}

impl PromptBuilder {
    /// Create a prompt builder from a ticket headline
    pub fn new(headline: impl Into<String>) -> Self {
        Self {
            headline: headline.into(),
            description: None,
        }
    }

    /// Create a prompt builder for a ticket, optionally including its description
    pub fn for_ticket(ticket: &Ticket, include_description: bool) -> Self {
        let builder = Self::new(ticket.headline());
        match ticket.description_text() {
            Some(description) if include_description => builder.with_description(description),
            _ => builder,
        }
    }

    /// Add the ticket description as extra context
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Build the complete prompt
    pub fn build(&self) -> Prompt {
        let mut user = String::new();

        user.push_str("Generate detailed test cases for the following feature:\n\n");
        user.push_str(&self.headline);
        user.push_str("\n\n");

        if let Some(description) = &self.description {
            user.push_str("Description:\n");
            user.push_str("---\n");
            user.push_str(description);
            user.push_str("\n---\n\n");
        }

        user.push_str(SECTIONS);
        user.push_str("\n\n");
        user.push_str(FORMAT_RULES);

        Prompt {
            system: SYSTEM_PROMPT.to_string(),
            user,
        }
    }
}

const SYSTEM_PROMPT: &str =
    "You are a QA expert helping generate test cases from Jira ticket summaries.";

const SECTIONS: &str = "Include:
- ✅ Positive test cases
- ❌ Negative test cases
- 🟡 Edge case scenarios";

const FORMAT_RULES: &str = r#"Format:
- Put each group under its own heading line: "Positive Test Cases:", "Negative Test Cases:", "Edge Test Cases:"
- Number every test case ("1.", "2.", ...) and start each one on a new line
- Put the steps or checks for a test case on the lines below it, each starting with "•"
- Do not add an introduction or a summary"#;
