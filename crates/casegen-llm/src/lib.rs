//! casegen LLM Provider Layer
//!
//! Implementations of the `LlmProvider` trait from `casegen-domain`.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing
//! - `OpenAiProvider`: OpenAI-compatible chat completions API
//! - `OllamaProvider`: Local Ollama API integration
//!
//! # Examples
//!
//! ```
//! use casegen_llm::MockProvider;
//! use casegen_domain::{traits::LlmProvider, Prompt};
//!
//! # tokio_test_block(async {
//! let provider = MockProvider::new("1. Login succeeds");
//! let prompt = Prompt { system: "sys".into(), user: "user".into() };
//! let result = provider.generate(&prompt).await.unwrap();
//! assert_eq!(result, "1. Login succeeds");
//! # });
//! # fn tokio_test_block<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Runtime::new().unwrap().block_on(f)
//! # }
//! ```

#![warn(missing_docs)]

#[cfg(test)]
mod canned;
pub mod ollama;
pub mod openai;

use casegen_domain::traits::LlmProvider as LlmProviderTrait;
use casegen_domain::Prompt;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use thiserror::Error;

pub use ollama::OllamaProvider;
pub use openai::OpenAiProvider;

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from LLM
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// The model answered with no content
    #[error("Model returned an empty response")]
    EmptyResponse,

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

/// Mock LLM provider for deterministic testing
///
/// Returns pre-configured responses without making any network calls.
/// Responses can be keyed by a fragment of the user prompt.
///
/// # Examples
///
/// ```
/// use casegen_llm::MockProvider;
///
/// let mut provider = MockProvider::default();
/// provider.add_response("SCRUM-1", "1. First ticket case");
/// provider.add_error("broken");
/// assert_eq!(provider.call_count(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    responses: Arc<Mutex<HashMap<String, MockReply>>>,
    call_count: Arc<Mutex<usize>>,
    last_prompt: Arc<Mutex<Option<Prompt>>>,
    delay: Option<Duration>,
}

#[derive(Debug, Clone)]
enum MockReply {
    Text(String),
    Error,
}

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            responses: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(Mutex::new(0)),
            last_prompt: Arc::new(Mutex::new(None)),
            delay: None,
        }
    }

    /// Respond with `response` when the user prompt contains `fragment`
    pub fn add_response(&mut self, fragment: impl Into<String>, response: impl Into<String>) {
        if let Ok(mut responses) = self.responses.lock() {
            responses.insert(fragment.into(), MockReply::Text(response.into()));
        }
    }

    /// Fail when the user prompt contains `fragment`
    pub fn add_error(&mut self, fragment: impl Into<String>) {
        if let Ok(mut responses) = self.responses.lock() {
            responses.insert(fragment.into(), MockReply::Error);
        }
    }

    /// Wait this long before answering
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Get the number of times generate was called
    pub fn call_count(&self) -> usize {
        self.call_count.lock().map(|count| *count).unwrap_or(0)
    }

    /// The most recent prompt received
    pub fn last_prompt(&self) -> Option<Prompt> {
        self.last_prompt.lock().ok().and_then(|p| p.clone())
    }

    fn reply_for(&self, prompt: &Prompt) -> Result<String, LlmError> {
        if let Ok(mut count) = self.call_count.lock() {
            *count += 1;
        }
        if let Ok(mut last) = self.last_prompt.lock() {
            *last = Some(prompt.clone());
        }

        let responses = self
            .responses
            .lock()
            .map_err(|e| LlmError::Other(format!("Mock state poisoned: {}", e)))?;

        // Longest fragment wins so overlapping keys stay deterministic.
        let matched = responses
            .iter()
            .filter(|(fragment, _)| prompt.user.contains(fragment.as_str()))
            .max_by_key(|(fragment, _)| fragment.len())
            .map(|(_, reply)| reply.clone());

        match matched {
            Some(MockReply::Text(text)) => Ok(text),
            Some(MockReply::Error) => Err(LlmError::Other("Mock error".to_string())),
            None => Ok(self.default_response.clone()),
        }
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

impl LlmProviderTrait for MockProvider {
    type Error = LlmError;

    fn model_name(&self) -> &str {
        "mock"
    }

    async fn generate(&self, prompt: &Prompt) -> Result<String, Self::Error> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.reply_for(prompt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompt(user: &str) -> Prompt {
        Prompt {
            system: "system".to_string(),
            user: user.to_string(),
        }
    }

    #[tokio::test]
    async fn test_mock_provider_default() {
        let provider = MockProvider::new("Test response");
        let result = provider.generate(&prompt("any prompt")).await;
        assert_eq!(result.unwrap(), "Test response");
    }

    #[tokio::test]
    async fn test_mock_provider_specific_responses() {
        let mut provider = MockProvider::default();
        provider.add_response("hello", "world");
        provider.add_response("foo", "bar");

        assert_eq!(provider.generate(&prompt("say hello")).await.unwrap(), "world");
        assert_eq!(provider.generate(&prompt("foo!")).await.unwrap(), "bar");
        assert_eq!(
            provider.generate(&prompt("unknown")).await.unwrap(),
            "Default mock response"
        );
    }

    #[tokio::test]
    async fn test_longest_fragment_wins() {
        let mut provider = MockProvider::default();
        provider.add_response("SCRUM-1", "short");
        provider.add_response("SCRUM-12", "long");

        assert_eq!(provider.generate(&prompt("ticket SCRUM-12")).await.unwrap(), "long");
        assert_eq!(provider.generate(&prompt("ticket SCRUM-1 ")).await.unwrap(), "short");
    }

    #[tokio::test]
    async fn test_mock_provider_call_count() {
        let provider = MockProvider::new("test");
        assert_eq!(provider.call_count(), 0);

        provider.generate(&prompt("prompt1")).await.unwrap();
        assert_eq!(provider.call_count(), 1);

        provider.generate(&prompt("prompt2")).await.unwrap();
        assert_eq!(provider.call_count(), 2);
    }

    #[tokio::test]
    async fn test_mock_provider_error() {
        let mut provider = MockProvider::default();
        provider.add_error("bad prompt");

        let result = provider.generate(&prompt("a bad prompt")).await;
        assert!(matches!(result.unwrap_err(), LlmError::Other(_)));
    }

    #[tokio::test]
    async fn test_mock_provider_records_last_prompt() {
        let provider = MockProvider::new("x");
        assert!(provider.last_prompt().is_none());

        provider.generate(&prompt("remember me")).await.unwrap();
        assert_eq!(provider.last_prompt().unwrap().user, "remember me");
    }

    #[tokio::test]
    async fn test_mock_provider_clone_shares_state() {
        let provider1 = MockProvider::new("test");
        let provider2 = provider1.clone();

        provider1.generate(&prompt("test")).await.unwrap();

        assert_eq!(provider1.call_count(), 1);
        assert_eq!(provider2.call_count(), 1);
    }
}
