//! Result types for generation

use casegen_domain::{CategoryCounts, TestCaseRecord};

/// Result of generating test cases for one ticket
#[derive(Debug, Clone)]
pub struct GenerationResult {
    /// Raw text returned by the generator
    pub generated_text: String,

    /// Test cases extracted from the generated text, in order
    pub records: Vec<TestCaseRecord>,

    /// Metadata about the generation
    pub metadata: GenerationMetadata,
}

/// Metadata about a generation run
#[derive(Debug, Clone)]
pub struct GenerationMetadata {
    /// Key of the ticket the test cases were generated for
    pub ticket_key: String,

    /// Unix timestamp (seconds) when generation finished
    pub timestamp: u64,

    /// Name of the LLM model used
    pub model_name: String,

    /// Length of the user prompt sent (characters)
    pub prompt_length: usize,

    /// Number of extracted records per category
    pub counts: CategoryCounts,

    /// Processing time in milliseconds
    pub processing_time_ms: u64,
}
