//! Command implementations.

pub mod plan;

pub use plan::{execute_plan, PlanReport, PlanStatus};
