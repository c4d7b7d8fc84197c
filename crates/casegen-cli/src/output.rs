//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use casegen_domain::{CategoryCounts, TestCaseRecord, Ticket, TicketRef};
use casegen_extractor::GenerationResult;
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a ticket listing.
    pub fn format_tickets(&self, tickets: &[TicketRef]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let json: Vec<serde_json::Value> = tickets
                    .iter()
                    .map(|t| serde_json::json!({ "key": t.key, "summary": t.summary }))
                    .collect();
                Ok(serde_json::to_string_pretty(&json)?)
            }
            OutputFormat::Table => {
                if tickets.is_empty() {
                    return Ok(self.colorize("No tickets found.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["Key", "Summary"]);
                for ticket in tickets {
                    builder.push_record([
                        ticket.key.as_str(),
                        ticket.summary.as_deref().unwrap_or(""),
                    ]);
                }
                Ok(self.render(builder))
            }
            OutputFormat::Quiet => {
                let keys: Vec<&str> = tickets.iter().map(|t| t.key.as_str()).collect();
                Ok(keys.join("\n"))
            }
        }
    }

    /// Format a single ticket's details.
    pub fn format_ticket(&self, ticket: &Ticket) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let json = serde_json::json!({
                    "key": ticket.key,
                    "summary": ticket.summary,
                    "priority": ticket.priority_or_default(),
                    "description": ticket.description_text(),
                });
                Ok(serde_json::to_string_pretty(&json)?)
            }
            OutputFormat::Table => {
                let mut out = format!(
                    "{}\n{}",
                    self.colorize(&ticket.key, "cyan"),
                    ticket.headline()
                );
                match ticket.description_text() {
                    Some(description) => {
                        out.push_str("\n\n");
                        out.push_str(description);
                    }
                    None => {
                        out.push_str("\n\n");
                        out.push_str(&self.colorize("No description.", "yellow"));
                    }
                }
                Ok(out)
            }
            OutputFormat::Quiet => Ok(ticket.headline()),
        }
    }

    /// Format extracted test cases.
    pub fn format_records(&self, records: &[TestCaseRecord]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let json: Vec<serde_json::Value> = records.iter().map(record_json).collect();
                Ok(serde_json::to_string_pretty(&json)?)
            }
            OutputFormat::Table => {
                if records.is_empty() {
                    return Ok(self.colorize("No test cases found.", "yellow"));
                }

                let with_category = CategoryCounts::tally(records).has_categories();
                let mut builder = Builder::default();
                if with_category {
                    builder.push_record(["#", "Category", "Test Case"]);
                } else {
                    builder.push_record(["#", "Test Case"]);
                }

                for (idx, record) in records.iter().enumerate() {
                    let row = (idx + 1).to_string();
                    if with_category {
                        builder.push_record([
                            row.as_str(),
                            record.category_label(),
                            record.text.as_str(),
                        ]);
                    } else {
                        builder.push_record([row.as_str(), record.text.as_str()]);
                    }
                }
                Ok(self.render(builder))
            }
            OutputFormat::Quiet => {
                let texts: Vec<&str> = records.iter().map(|r| r.text.as_str()).collect();
                Ok(texts.join("\n"))
            }
        }
    }

    /// Format a generation run: the generated text followed by the extracted test cases.
    pub fn format_generation(&self, result: &GenerationResult) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let records: Vec<serde_json::Value> =
                    result.records.iter().map(record_json).collect();
                let meta = &result.metadata;
                let json = serde_json::json!({
                    "ticket_key": meta.ticket_key,
                    "model": meta.model_name,
                    "timestamp": meta.timestamp,
                    "prompt_length": meta.prompt_length,
                    "processing_time_ms": meta.processing_time_ms,
                    "generated_text": result.generated_text,
                    "records": records,
                    "counts": {
                        "positive": meta.counts.positive,
                        "negative": meta.counts.negative,
                        "edge": meta.counts.edge,
                        "uncategorized": meta.counts.uncategorized,
                    },
                });
                Ok(serde_json::to_string_pretty(&json)?)
            }
            OutputFormat::Table => Ok(format!(
                "{}\n\n{}\n\n{}\n{}",
                self.colorize("Generated Test Cases", "cyan"),
                result.generated_text.trim_end(),
                self.format_records(&result.records)?,
                self.counts_summary(&result.metadata.counts)
            )),
            OutputFormat::Quiet => self.format_records(&result.records),
        }
    }

    /// One-line summary of how many test cases landed in each category.
    pub fn counts_summary(&self, counts: &CategoryCounts) -> String {
        let msg = if counts.has_categories() {
            format!(
                "Extracted {} test case(s): {} positive, {} negative, {} edge",
                counts.total(),
                counts.positive,
                counts.negative,
                counts.edge
            )
        } else {
            format!("Extracted {} test case(s)", counts.total())
        };
        self.info(&msg)
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Whether output is machine-readable (no banners or messages).
    pub fn is_plain(&self) -> bool {
        self.format != OutputFormat::Table
    }

    fn render(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

fn record_json(record: &TestCaseRecord) -> serde_json::Value {
    serde_json::json!({
        "category": record.category.map(|c| c.as_str()),
        "text": record.text,
    })
}
