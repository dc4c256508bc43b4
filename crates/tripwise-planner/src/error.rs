//! Error types for the Planner

use thiserror::Error;
use tripwise_domain::QueryError;
use tripwise_llm::LlmError;

/// Errors that can occur while producing a plan
///
/// A reply that cannot be parsed is not an error; it comes back as
/// `PlanOutcome::Unparsed`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlannerError {
    /// Source or destination failed validation
    #[error("Invalid query: {0}")]
    Query(#[from] QueryError),

    /// Model call failed (network, auth, rate limit, configuration)
    #[error("Model invocation failed: {0}")]
    Model(#[from] LlmError),

    /// The model replied with nothing at all
    #[error("Model returned an empty response")]
    EmptyResponse,
}

impl PlannerError {
    /// True when the failure stems from provider configuration
    pub fn is_configuration(&self) -> bool {
        matches!(self, PlannerError::Model(e) if e.is_configuration())
    }
}
