//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

/// Trait for LLM provider operations
///
/// Implemented by the infrastructure layer (tripwise-llm)
pub trait LlmProvider {
    /// Error type for LLM operations
    type Error;

    /// Generate a text completion for a fully rendered prompt
    fn generate(&self, prompt: &str) -> Result<String, Self::Error>;
}
