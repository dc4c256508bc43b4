//! Tripwise LLM Provider Layer
//!
//! Implementations of the `LlmProvider` trait from `tripwise-domain`.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing
//! - `GeminiProvider`: Hosted Gemini `generateContent` API
//!
//! Providers make exactly one outbound call per request. Retries, streaming
//! and caching are deliberately absent; callers decide what to do on failure.
//!
//! # Examples
//!
//! ```
//! use tripwise_llm::MockProvider;
//! use tripwise_domain::traits::LlmProvider;
//!
//! let provider = MockProvider::new("Hello from LLM!");
//! let result = provider.generate("test prompt").unwrap();
//! assert_eq!(result, "Hello from LLM!");
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod gemini;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;
use tripwise_domain::traits::LlmProvider as LlmProviderTrait;

pub use config::ModelConfig;
pub use gemini::GeminiProvider;

/// Errors that can occur during LLM operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LlmError {
    /// Missing or invalid provider configuration
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Credential rejected by the provider
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded: {0}")]
    RateLimited(String),

    /// Provider unreachable or failing server-side
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Request exceeded the configured timeout
    #[error("Request timed out after {0}s")]
    Timeout(u64),

    /// Invalid response from LLM
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),
}

impl LlmError {
    /// True for errors that no retry can fix without changing configuration
    pub fn is_configuration(&self) -> bool {
        matches!(self, LlmError::Configuration(_))
    }
}

/// Mock LLM provider for deterministic testing
///
/// Returns pre-configured replies without making any network calls and
/// records every prompt it receives.
///
/// # Examples
///
/// ```
/// use tripwise_llm::{LlmError, MockProvider};
/// use tripwise_domain::traits::LlmProvider;
///
/// let mut provider = MockProvider::default();
/// provider.add_response("prompt1", "response1");
/// provider.add_error("prompt2", LlmError::RateLimited("slow down".into()));
///
/// assert_eq!(provider.generate("prompt1").unwrap(), "response1");
/// assert!(provider.generate("prompt2").is_err());
/// assert_eq!(provider.call_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_reply: Result<String, LlmError>,
    responses: Arc<Mutex<HashMap<String, Result<String, LlmError>>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self::with_reply(Ok(response.into()))
    }

    /// Create a MockProvider that fails every prompt with `error`
    pub fn failing(error: LlmError) -> Self {
        Self::with_reply(Err(error))
    }

    fn with_reply(default_reply: Result<String, LlmError>) -> Self {
        Self {
            default_reply,
            responses: Arc::new(Mutex::new(HashMap::new())),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a specific response for a given prompt
    pub fn add_response(&mut self, prompt: impl Into<String>, response: impl Into<String>) {
        lock(&self.responses).insert(prompt.into(), Ok(response.into()));
    }

    /// Configure to return an error for a specific prompt
    pub fn add_error(&mut self, prompt: impl Into<String>, error: LlmError) {
        lock(&self.responses).insert(prompt.into(), Err(error));
    }

    /// Get the number of times generate was called
    pub fn call_count(&self) -> usize {
        lock(&self.prompts).len()
    }

    /// Prompts received so far, oldest first
    pub fn prompts(&self) -> Vec<String> {
        lock(&self.prompts).clone()
    }

    /// Forget recorded prompts
    pub fn reset_call_count(&self) {
        lock(&self.prompts).clear();
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

impl LlmProviderTrait for MockProvider {
    type Error = LlmError;

    fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        lock(&self.prompts).push(prompt.to_string());

        match lock(&self.responses).get(prompt) {
            Some(reply) => reply.clone(),
            None => self.default_reply.clone(),
        }
    }
}

// A panic while holding a mock lock cannot leave the map half-written.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_provider_default() {
        let provider = MockProvider::new("Test response");
        let result = provider.generate("any prompt");
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), "Test response");
    }

    #[test]
    fn test_mock_provider_specific_responses() {
        let mut provider = MockProvider::default();
        provider.add_response("hello", "world");
        provider.add_response("foo", "bar");

        assert_eq!(provider.generate("hello").unwrap(), "world");
        assert_eq!(provider.generate("foo").unwrap(), "bar");
        assert_eq!(provider.generate("unknown").unwrap(), "Default mock response");
    }

    #[test]
    fn test_mock_provider_call_count() {
        let provider = MockProvider::new("test");

        assert_eq!(provider.call_count(), 0);

        provider.generate("prompt1").unwrap();
        assert_eq!(provider.call_count(), 1);

        provider.generate("prompt2").unwrap();
        assert_eq!(provider.call_count(), 2);
        assert_eq!(provider.prompts(), vec!["prompt1", "prompt2"]);

        provider.reset_call_count();
        assert_eq!(provider.call_count(), 0);
    }

    #[test]
    fn test_mock_provider_error() {
        let mut provider = MockProvider::default();
        provider.add_error("bad prompt", LlmError::Authentication("bad key".to_string()));

        let result = provider.generate("bad prompt");
        assert!(matches!(result, Err(LlmError::Authentication(_))));
    }

    #[test]
    fn test_mock_provider_failing() {
        let provider = MockProvider::failing(LlmError::ServiceUnavailable("down".to_string()));
        assert_eq!(
            provider.generate("anything"),
            Err(LlmError::ServiceUnavailable("down".to_string()))
        );
        // Failed calls still count
        assert_eq!(provider.call_count(), 1);
    }

    #[test]
    fn test_mock_provider_clone() {
        let provider1 = MockProvider::new("test");
        let provider2 = provider1.clone();

        provider1.generate("test").unwrap();

        // Both should share the same call count due to Arc
        assert_eq!(provider1.call_count(), 1);
        assert_eq!(provider2.call_count(), 1);
    }

    #[test]
    fn test_error_classification() {
        assert!(LlmError::Configuration("x".into()).is_configuration());
        assert!(!LlmError::RateLimited("x".into()).is_configuration());
        assert_eq!(LlmError::Timeout(30).to_string(), "Request timed out after 30s");
    }
}
