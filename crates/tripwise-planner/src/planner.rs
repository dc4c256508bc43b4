//! Core Planner implementation

use crate::error::PlannerError;
use crate::extract::{extract_plan, PlanOutcome};
use crate::gateway::TravelGateway;
use tracing::info;
use tripwise_domain::traits::LlmProvider;
use tripwise_domain::TravelQuery;
use tripwise_llm::LlmError;

/// Gateway call followed by extraction, one request at a time
pub struct Planner<L> {
    gateway: TravelGateway<L>,
}

impl<L> Planner<L>
where
    L: LlmProvider<Error = LlmError>,
{
    /// Create a new Planner
    pub fn new(provider: L) -> Self {
        Self {
            gateway: TravelGateway::new(provider),
        }
    }

    /// Produce a plan for an already validated query
    pub fn plan(&self, query: &TravelQuery) -> Result<PlanOutcome, PlannerError> {
        info!(
            "Planning trip from '{}' to '{}'",
            query.source(),
            query.destination()
        );

        let raw = self.gateway.request(query)?;
        let outcome = extract_plan(raw)?;

        match &outcome {
            PlanOutcome::Parsed { plan, strategy } => info!(
                "Plan ready via {} strategy: {} options, {} highlights",
                strategy,
                plan.travel_options.len(),
                plan.route_highlights.len()
            ),
            PlanOutcome::Unparsed { .. } => info!("Model reply could not be parsed"),
        }

        Ok(outcome)
    }

    /// Validate free-text fields, then plan
    pub fn plan_for(&self, source: &str, destination: &str) -> Result<PlanOutcome, PlannerError> {
        let query = TravelQuery::new(source, destination)?;
        self.plan(&query)
    }
}
