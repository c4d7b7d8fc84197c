//! Configuration management for the CLI.
//!
//! Settings live in `~/.casegen/config.toml`. Secrets (API tokens) are never
//! stored there; they are passed in from the environment.

use crate::error::{CliError, Result};
use crate::provider::ConfiguredProvider;
use casegen_extractor::PipelineConfig;
use casegen_llm::{ollama, openai, OllamaProvider, OpenAiProvider};
use casegen_tracker::{jira, JiraClient, JiraConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Issue tracker connection
    #[serde(default)]
    pub tracker: TrackerSettings,

    /// Generator settings
    #[serde(default)]
    pub llm: LlmSettings,

    /// Generation pipeline limits
    #[serde(default)]
    pub pipeline: PipelineConfig,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Issue tracker connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerSettings {
    /// Jira site URL (e.g., https://example.atlassian.net)
    #[serde(default)]
    pub domain: String,

    /// Account e-mail for basic auth
    #[serde(default)]
    pub email: String,

    /// Project whose tickets are listed
    #[serde(default = "default_project_key")]
    pub project_key: String,

    /// Maximum tickets listed
    #[serde(default = "default_max_results")]
    pub max_results: u32,
}

/// Which generator backend to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// OpenAI-compatible chat completions
    OpenAi,
    /// Local Ollama
    Ollama,
}

/// Generator settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmSettings {
    /// Backend
    #[serde(default = "default_provider")]
    pub provider: ProviderKind,

    /// API base URL; the provider's default when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Model name
    #[serde(default = "default_model")]
    pub model: String,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f64,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".casegen").join("config.toml"))
    }

    /// Load configuration from `path`, or defaults when it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)?;
            Ok(toml::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to `path`.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Serialize to TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Build the Jira connection settings, given the API token.
    pub fn jira_config(&self, api_token: Option<&str>) -> Result<JiraConfig> {
        if self.tracker.domain.trim().is_empty() {
            return Err(CliError::Config(
                "tracker.domain is not set. Run 'casegen config init' and edit the file".into(),
            ));
        }
        if self.tracker.email.trim().is_empty() {
            return Err(CliError::Config("tracker.email is not set".into()));
        }
        let api_token = api_token
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| CliError::Config("JIRA_API_TOKEN is not set".into()))?;

        Ok(JiraConfig {
            domain: self.tracker.domain.clone(),
            email: self.tracker.email.clone(),
            api_token: api_token.to_string(),
            project_key: self.tracker.project_key.clone(),
            max_results: self.tracker.max_results,
        })
    }

    /// Connect a Jira client.
    pub fn jira_client(&self, api_token: Option<&str>) -> Result<JiraClient> {
        Ok(JiraClient::new(self.jira_config(api_token)?)?)
    }

    /// Build the configured generator, given an API key where one is needed.
    pub fn llm_provider(&self, api_key: Option<&str>) -> Result<ConfiguredProvider> {
        let llm = &self.llm;
        match llm.provider {
            ProviderKind::OpenAi => {
                let api_key = api_key
                    .filter(|k| !k.trim().is_empty())
                    .ok_or_else(|| CliError::Config("OPENAI_API_KEY is not set".into()))?;
                let endpoint = llm.endpoint.as_deref().unwrap_or(openai::DEFAULT_ENDPOINT);
                let provider = OpenAiProvider::new(endpoint, api_key, &llm.model)?
                    .with_temperature(llm.temperature as f32);
                Ok(ConfiguredProvider::OpenAi(provider))
            }
            ProviderKind::Ollama => {
                let endpoint = llm.endpoint.as_deref().unwrap_or(ollama::DEFAULT_ENDPOINT);
                let provider =
                    OllamaProvider::new(endpoint, &llm.model)?.with_temperature(llm.temperature as f32);
                Ok(ConfiguredProvider::Ollama(provider))
            }
        }
    }
}

impl Default for TrackerSettings {
    fn default() -> Self {
        Self {
            domain: String::new(),
            email: String::new(),
            project_key: default_project_key(),
            max_results: default_max_results(),
        }
    }
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            endpoint: None,
            model: default_model(),
            temperature: default_temperature(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

fn default_project_key() -> String {
    "SCRUM".to_string()
}

fn default_max_results() -> u32 {
    jira::DEFAULT_MAX_RESULTS
}

fn default_provider() -> ProviderKind {
    ProviderKind::OpenAi
}

fn default_model() -> String {
    openai::DEFAULT_MODEL.to_string()
}

fn default_temperature() -> f64 {
    0.7
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}
