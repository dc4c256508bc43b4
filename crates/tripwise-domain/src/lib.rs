//! Tripwise Domain Layer
//!
//! Core value types shared by every other crate in the workspace.
//!
//! ## Key Concepts
//!
//! - **TravelQuery**: A validated (source, destination) pair, built per request
//! - **TravelPlan**: The structured reply recovered from model output, every
//!   field optional
//! - **RawModelResponse**: The untouched model text, kept for diagnostics
//!
//! ## Architecture
//!
//! - No I/O and no network access
//! - Trait definitions for external interactions (`traits::LlmProvider`)
//! - Infrastructure implementations live in other crates

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod plan;
pub mod query;
pub mod response;
pub mod traits;

// Re-exports for convenience
pub use plan::{ComfortLevel, TravelOption, TravelPlan, TravelTime};
pub use query::{QueryError, TravelQuery};
pub use response::RawModelResponse;
