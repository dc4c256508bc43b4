//! Tolerant extraction of a JSON object from model output
//!
//! Strategies run from least to most aggressive and stop at the first one
//! that yields a JSON object:
//!
//! 1. Strict parse of the whole text
//! 2. Contents of the first fenced code block (optionally tagged `json`)
//! 3. First `{` through last `}`, after [`repair`](crate::repair::repair)
//!
//! Parse errors inside a stage are swallowed. The first-to-last brace span
//! can over-capture when a reply holds several separate fragments; that
//! case is left alone rather than guessed at.

use crate::error::PlannerError;
use crate::repair::repair;
use regex::Regex;
use serde_json::Value;
use std::fmt;
use std::sync::LazyLock;
use tracing::{debug, warn};
use tripwise_domain::{RawModelResponse, TravelPlan};

static RE_FENCED_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```(?:json)?\s*([\s\S]*?)```").unwrap());

/// Which cascade stage produced the value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtractionStrategy {
    /// Whole text was valid JSON
    Strict,

    /// JSON inside a fenced code block
    FencedBlock,

    /// Repaired first-to-last brace span
    BraceSpan,
}

impl ExtractionStrategy {
    /// Get the strategy name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ExtractionStrategy::Strict => "strict",
            ExtractionStrategy::FencedBlock => "fenced_block",
            ExtractionStrategy::BraceSpan => "brace_span",
        }
    }
}

impl fmt::Display for ExtractionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A JSON object recovered from text
#[derive(Debug, Clone, PartialEq)]
pub struct Extracted {
    /// The parsed object
    pub value: Value,

    /// Stage that recovered it
    pub strategy: ExtractionStrategy,
}

/// Result of running the cascade over one model reply
#[derive(Debug, Clone, PartialEq)]
pub enum PlanOutcome {
    /// A plan was recovered
    Parsed {
        /// The recovered plan
        plan: TravelPlan,
        /// Stage that recovered it
        strategy: ExtractionStrategy,
    },

    /// No stage produced an object; the raw reply is kept for display
    Unparsed {
        /// The reply as received
        raw: RawModelResponse,
    },
}

/// Run the cascade over `text`
///
/// Returns `None` when no stage yields a JSON object. Never panics on
/// malformed input.
pub fn extract_json_object(text: &str) -> Option<Extracted> {
    if let Some(value) = parse_object(text) {
        return Some(Extracted {
            value,
            strategy: ExtractionStrategy::Strict,
        });
    }

    if let Some(value) = fenced_block(text).and_then(parse_object) {
        return Some(Extracted {
            value,
            strategy: ExtractionStrategy::FencedBlock,
        });
    }

    if let Some(value) = brace_span(text).and_then(|span| parse_object(&repair(span))) {
        return Some(Extracted {
            value,
            strategy: ExtractionStrategy::BraceSpan,
        });
    }

    None
}

/// Turn a raw model reply into a plan, or an explicit unparsed marker
///
/// # Errors
///
/// Returns `PlannerError::EmptyResponse` for an empty or whitespace-only
/// reply. Malformed text is never an error.
pub fn extract_plan(raw: RawModelResponse) -> Result<PlanOutcome, PlannerError> {
    if raw.is_blank() {
        return Err(PlannerError::EmptyResponse);
    }

    let extracted = extract_json_object(raw.as_str());
    match extracted.and_then(|e| TravelPlan::from_value(&e.value).map(|plan| (plan, e.strategy))) {
        Some((plan, strategy)) => {
            debug!(
                %strategy,
                options = plan.travel_options.len(),
                highlights = plan.route_highlights.len(),
                "Recovered travel plan"
            );
            Ok(PlanOutcome::Parsed { plan, strategy })
        }
        None => {
            warn!(response_chars = raw.as_str().len(), "Could not recover JSON from model reply");
            Ok(PlanOutcome::Unparsed { raw })
        }
    }
}

/// Strict parse, accepting only objects
fn parse_object(text: &str) -> Option<Value> {
    serde_json::from_str::<Value>(text)
        .ok()
        .filter(Value::is_object)
}

/// Trimmed inner text of the first fenced code block
fn fenced_block(text: &str) -> Option<&str> {
    RE_FENCED_BLOCK
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
}

/// First `{` through last `}`, inclusive
fn brace_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}
