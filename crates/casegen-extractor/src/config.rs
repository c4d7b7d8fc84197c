//! Configuration for the generation pipeline

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for [`crate::CaseGenerator`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Maximum ticket text length (characters) sent to the generator
    pub max_ticket_length: usize,

    /// Maximum time for a single generator call (seconds)
    pub generation_timeout_secs: u64,

    /// Whether the ticket description is included in the prompt
    pub include_description: bool,
}

impl PipelineConfig {
    /// Get the generation timeout as a Duration
    pub fn generation_timeout(&self) -> Duration {
        Duration::from_secs(self.generation_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_ticket_length == 0 {
            return Err("max_ticket_length must be greater than 0".to_string());
        }
        if self.generation_timeout_secs == 0 {
            return Err("generation_timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_ticket_length: 20_000,
            generation_timeout_secs: 120,
            include_description: true,
        }
    }
}
