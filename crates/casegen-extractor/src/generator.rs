//! Ticket-to-test-cases pipeline

use crate::config::PipelineConfig;
use crate::error::ExtractorError;
use crate::parser::extract_test_cases;
use crate::prompt::PromptBuilder;
use crate::types::{GenerationMetadata, GenerationResult};
use casegen_domain::traits::LlmProvider;
use casegen_domain::{CategoryCounts, Ticket};
use std::time::{Instant, SystemTime, UNIX_EPOCH};
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// Generates test cases for tickets using an LLM
///
/// Runs prompt building, the generator call and extraction strictly in
/// sequence.
pub struct CaseGenerator<L>
where
    L: LlmProvider,
{
    llm_provider: L,
    config: PipelineConfig,
}

impl<L> CaseGenerator<L>
where
    L: LlmProvider,
    L::Error: std::fmt::Display,
{
    /// Create a new generator, validating the configuration
    pub fn new(llm_provider: L, config: PipelineConfig) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;
        Ok(Self {
            llm_provider,
            config,
        })
    }

    /// Generate test cases for a ticket
    pub async fn generate(&self, ticket: &Ticket) -> Result<GenerationResult, ExtractorError> {
        let start = Instant::now();

        let ticket_length = ticket.summary.chars().count()
            + ticket
                .description_text()
                .filter(|_| self.config.include_description)
                .map_or(0, |d| d.chars().count());
        if ticket_length > self.config.max_ticket_length {
            return Err(ExtractorError::TicketTooLong(
                ticket_length,
                self.config.max_ticket_length,
            ));
        }

        info!(
            "Generating test cases for ticket '{}' with model '{}'",
            ticket.key,
            self.llm_provider.model_name()
        );

        let prompt = PromptBuilder::for_ticket(ticket, self.config.include_description).build();

        let prompt_length = prompt.user.chars().count();
        debug!("Prompt length: {} chars", prompt_length);

        let generated_text = timeout(
            self.config.generation_timeout(),
            self.llm_provider.generate(&prompt),
        )
        .await
        .map_err(|_| ExtractorError::Timeout(self.config.generation_timeout_secs))?
        .map_err(|e| ExtractorError::Llm(e.to_string()))?;

        debug!("LLM response length: {} bytes", generated_text.len());

        let records: Vec<_> = extract_test_cases(&generated_text).collect();
        let counts = CategoryCounts::tally(&records);

        if records.is_empty() {
            warn!(
                "No test cases recognized in generated text for ticket '{}'",
                ticket.key
            );
        } else {
            info!(
                "Extracted {} test cases: {} positive, {} negative, {} edge, {} uncategorized",
                counts.total(),
                counts.positive,
                counts.negative,
                counts.edge,
                counts.uncategorized
            );
        }

        let metadata = GenerationMetadata {
            ticket_key: ticket.key.clone(),
            timestamp: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0),
            model_name: self.llm_provider.model_name().to_string(),
            prompt_length,
            counts,
            processing_time_ms: start.elapsed().as_millis() as u64,
        };

        Ok(GenerationResult {
            generated_text,
            records,
            metadata,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use casegen_llm::MockProvider;

    fn ticket() -> Ticket {
        Ticket {
            key: "SCRUM-1".to_string(),
            summary: "Login with OTP".to_string(),
            priority: None,
            description: None,
        }
    }

    #[tokio::test]
    async fn test_generate_empty_response() {
        let generator =
            CaseGenerator::new(MockProvider::new(""), PipelineConfig::default()).unwrap();

        let result = generator.generate(&ticket()).await.unwrap();
        assert!(result.records.is_empty());
        assert_eq!(result.metadata.counts.total(), 0);
    }

    #[tokio::test]
    async fn test_ticket_too_long() {
        let config = PipelineConfig {
            max_ticket_length: 10,
            ..PipelineConfig::default()
        };
        let generator = CaseGenerator::new(MockProvider::new(""), config).unwrap();

        let result = generator.generate(&ticket()).await;
        assert!(matches!(result, Err(ExtractorError::TicketTooLong(14, 10))));
    }

    #[tokio::test]
    async fn test_ticket_length_counts_characters() {
        let config = PipelineConfig {
            max_ticket_length: 30,
            ..PipelineConfig::default()
        };
        let generator = CaseGenerator::new(MockProvider::new("1. Вход"), config).unwrap();
        let ticket = Ticket {
            summary: "Вход по одноразовому паролю".to_string(),
            ..ticket()
        };
        assert_eq!(ticket.summary.chars().count(), 27);
        assert!(ticket.summary.len() > 30);

        let result = generator.generate(&ticket).await.unwrap();
        assert_eq!(result.records.len(), 1);
        assert_eq!(
            result.metadata.prompt_length,
            PromptBuilder::for_ticket(&ticket, true)
                .build()
                .user
                .chars()
                .count()
        );
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = PipelineConfig {
            generation_timeout_secs: 0,
            ..PipelineConfig::default()
        };
        let result = CaseGenerator::new(MockProvider::new(""), config);
        assert!(matches!(result, Err(ExtractorError::Config(_))));
    }
}
