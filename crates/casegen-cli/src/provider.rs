//! Generator selected by configuration.

use casegen_domain::traits::LlmProvider;
use casegen_domain::Prompt;
use casegen_llm::{LlmError, OllamaProvider, OpenAiProvider};

/// One of the supported generator backends.
pub enum ConfiguredProvider {
    /// OpenAI-compatible chat completions
    OpenAi(OpenAiProvider),
    /// Local Ollama
    Ollama(OllamaProvider),
}

impl LlmProvider for ConfiguredProvider {
    type Error = LlmError;

    fn model_name(&self) -> &str {
        match self {
            ConfiguredProvider::OpenAi(p) => p.model_name(),
            ConfiguredProvider::Ollama(p) => p.model_name(),
        }
    }

    async fn generate(&self, prompt: &Prompt) -> Result<String, Self::Error> {
        match self {
            ConfiguredProvider::OpenAi(p) => p.complete(prompt).await,
            ConfiguredProvider::Ollama(p) => p.complete(prompt).await,
        }
    }
}
