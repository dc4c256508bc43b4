//! Tripwise Planner
//!
//! Turns a (source, destination) pair into structured travel options by
//! asking an LLM and tolerantly parsing whatever it answers.
//!
//! # Architecture
//!
//! ```text
//! TravelQuery → TravelPrompt → LlmProvider → RawModelResponse → cascade → PlanOutcome
//! ```
//!
//! # Key Features
//!
//! - **Deterministic prompt**: Same query, same prompt
//! - **Single call**: One provider request per plan, no retries
//! - **Tolerant parsing**: Strict JSON, fenced blocks, then repaired brace spans
//! - **Explicit failure**: Unparseable replies come back with the raw text
//!
//! # Example Usage
//!
//! ```
//! use tripwise_planner::{Planner, PlanOutcome};
//! use tripwise_llm::MockProvider;
//!
//! let llm = MockProvider::new(
//!     r#"Here you go: {source: 'Mumbai', destination: 'Pune', travel_options: [{mode: 'Bus'}]}"#,
//! );
//! let planner = Planner::new(llm);
//!
//! match planner.plan_for("Mumbai", "Pune").unwrap() {
//!     PlanOutcome::Parsed { plan, .. } => assert_eq!(plan.travel_options.len(), 1),
//!     PlanOutcome::Unparsed { raw } => panic!("unexpected: {}", raw),
//! }
//! ```

#![warn(missing_docs)]

mod error;
mod gateway;
mod planner;
mod prompt;

pub mod extract;
pub mod repair;


pub use error::PlannerError;
pub use extract::{extract_json_object, extract_plan, Extracted, ExtractionStrategy, PlanOutcome};
pub use gateway::TravelGateway;
pub use planner::Planner;
pub use prompt::TravelPrompt;
pub use repair::{repair, RepairRule, REPAIR_SEQUENCE};
