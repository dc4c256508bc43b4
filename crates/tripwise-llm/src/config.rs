//! Model configuration
//!
//! Loaded once at process start and passed by reference into providers.
//! Nothing mutates it afterwards.

use crate::LlmError;
use std::fmt;
use std::time::Duration;

/// Environment variable holding the provider credential
pub const API_KEY_VAR: &str = "GOOGLE_API_KEY";

/// Environment variable overriding the model name
pub const MODEL_VAR: &str = "TRIPWISE_MODEL";

/// Environment variable overriding the API base URL
pub const ENDPOINT_VAR: &str = "TRIPWISE_ENDPOINT";

/// Environment variable overriding the request timeout (seconds)
pub const TIMEOUT_VAR: &str = "TRIPWISE_TIMEOUT_SECS";

/// Default model name
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash-exp";

/// Default API base URL
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

/// Low randomness keeps replies close to the requested JSON shape
pub const DEFAULT_TEMPERATURE: f32 = 0.2;

/// Default timeout for model requests (60 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Immutable provider configuration
#[derive(Clone, PartialEq)]
pub struct ModelConfig {
    /// Provider credential
    pub api_key: String,

    /// Model identifier (e.g., "gemini-2.0-flash-exp")
    pub model: String,

    /// API base URL, without a trailing path
    pub endpoint: String,

    /// Sampling temperature
    pub temperature: f32,

    /// Per-request timeout (seconds)
    pub timeout_secs: u64,
}

impl ModelConfig {
    /// Create a configuration with default model, endpoint and timeout
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Load configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns `LlmError::Configuration` when `GOOGLE_API_KEY` is missing or
    /// blank, or when an override is malformed.
    pub fn from_env() -> Result<Self, LlmError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, LlmError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let present = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let api_key = present(API_KEY_VAR)
            .ok_or_else(|| LlmError::Configuration(format!("{} is not set", API_KEY_VAR)))?;

        let mut config = Self::new(api_key);

        if let Some(model) = present(MODEL_VAR) {
            config.model = model;
        }
        if let Some(endpoint) = present(ENDPOINT_VAR) {
            config.endpoint = endpoint.trim_end_matches('/').to_string();
        }
        if let Some(timeout) = present(TIMEOUT_VAR) {
            config.timeout_secs = timeout.parse().map_err(|_| {
                LlmError::Configuration(format!(
                    "{} must be a positive integer, got '{}'",
                    TIMEOUT_VAR, timeout
                ))
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Override the model name
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the API base URL
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Override the request timeout
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Get the request timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), LlmError> {
        if self.api_key.trim().is_empty() {
            return Err(LlmError::Configuration(format!("{} is not set", API_KEY_VAR)));
        }
        if self.model.trim().is_empty() {
            return Err(LlmError::Configuration("model name cannot be empty".to_string()));
        }
        if self.endpoint.trim().is_empty() {
            return Err(LlmError::Configuration("endpoint cannot be empty".to_string()));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(LlmError::Configuration(format!(
                "temperature must be within [0, 2], got {}",
                self.temperature
            )));
        }
        if self.timeout_secs == 0 {
            return Err(LlmError::Configuration(
                "timeout_secs must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl fmt::Debug for ModelConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .field("temperature", &self.temperature)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
