//! Prompt/model gateway

use crate::error::PlannerError;
use crate::prompt::TravelPrompt;
use tracing::{debug, trace};
use tripwise_domain::traits::LlmProvider;
use tripwise_domain::{RawModelResponse, TravelQuery};
use tripwise_llm::LlmError;

/// Renders the prompt for a query and returns the model's raw reply
///
/// Performs no parsing and no retries: one provider call per request.
pub struct TravelGateway<L> {
    provider: L,
}

impl<L> TravelGateway<L>
where
    L: LlmProvider<Error = LlmError>,
{
    /// Create a gateway over `provider`
    pub fn new(provider: L) -> Self {
        Self { provider }
    }

    /// The underlying provider
    pub fn provider(&self) -> &L {
        &self.provider
    }

    /// Ask the model about `query`
    ///
    /// # Errors
    ///
    /// Provider failures propagate unchanged as `PlannerError::Model`.
    pub fn request(&self, query: &TravelQuery) -> Result<RawModelResponse, PlannerError> {
        let prompt = TravelPrompt::new(query).render();
        debug!("Prompt length: {} chars", prompt.len());

        let text = self.provider.generate(&prompt)?;

        debug!("LLM response length: {} chars", text.len());
        trace!(response = %text, "Raw model reply");
        Ok(RawModelResponse::from(text))
    }
}
