//! Travel plan module - the structure recovered from model output
//!
//! Model replies are untrusted, so nothing here is mandatory. A plan is built
//! from an already-parsed JSON object with explicit presence checks on every
//! key; a wrong type on one field drops that field, never the whole plan.

use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

/// Comfort rating as the model usually phrases it
///
/// The wire value is kept as free text on [`TravelOption`]; this is only a
/// best-effort reading of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComfortLevel {
    /// Basic comfort
    Low,

    /// Average comfort
    Medium,

    /// Premium comfort
    High,
}

impl ComfortLevel {
    /// Get the level name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ComfortLevel::Low => "Low",
            ComfortLevel::Medium => "Medium",
            ComfortLevel::High => "High",
        }
    }

    /// Parse a level from a string, ignoring case and surrounding whitespace
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" => Some(ComfortLevel::Low),
            "medium" => Some(ComfortLevel::Medium),
            "high" => Some(ComfortLevel::High),
            _ => None,
        }
    }
}

/// Travel duration, either numeric hours or the model's own wording
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TravelTime {
    /// Duration in hours
    Hours(f64),

    /// Free text such as "3-4" or "overnight"
    Text(String),
}

impl TravelTime {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_f64().map(TravelTime::Hours),
            Value::String(s) => {
                let s = s.trim();
                if s.is_empty() {
                    None
                } else if let Some(hours) = s.parse::<f64>().ok().filter(|h| h.is_finite()) {
                    Some(TravelTime::Hours(hours))
                } else {
                    Some(TravelTime::Text(s.to_string()))
                }
            }
            _ => None,
        }
    }
}

impl fmt::Display for TravelTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TravelTime::Hours(hours) => write!(f, "{}", hours),
            TravelTime::Text(text) => f.write_str(text),
        }
    }
}

/// One way of making the trip (cab, train, bus, flight, ...)
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TravelOption {
    /// Transport mode name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,

    /// Cost range as the model wrote it
    #[serde(
        rename = "estimated_cost_range_inr",
        skip_serializing_if = "Option::is_none"
    )]
    pub estimated_cost_range: Option<String>,

    /// Estimated duration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub travel_time_hours: Option<TravelTime>,

    /// How often the service runs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,

    /// Comfort rating, usually Low/Medium/High but not enforced
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comfort_level: Option<String>,

    /// Additional remarks; absent when the model left it empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl TravelOption {
    /// Build an option from a JSON object
    pub fn from_object(obj: &Map<String, Value>) -> Self {
        Self {
            mode: text_field(obj, "mode"),
            estimated_cost_range: text_field(obj, "estimated_cost_range_inr")
                .or_else(|| text_field(obj, "estimated_cost_range")),
            travel_time_hours: obj.get("travel_time_hours").and_then(TravelTime::from_value),
            frequency: text_field(obj, "frequency"),
            comfort_level: text_field(obj, "comfort_level"),
            notes: text_field(obj, "notes"),
        }
    }

    /// Best-effort reading of `comfort_level`
    pub fn comfort(&self) -> Option<ComfortLevel> {
        self.comfort_level.as_deref().and_then(ComfortLevel::parse)
    }

    /// Display label: the mode, or `Option N` (1-based) when the mode is missing
    pub fn label(&self, index: usize) -> String {
        self.mode
            .clone()
            .unwrap_or_else(|| format!("Option {}", index + 1))
    }
}

/// Structured travel data for one (source, destination) request
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TravelPlan {
    /// Source city as echoed by the model
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Destination city as echoed by the model
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,

    /// Approximate distance in kilometres
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,

    /// Options in display order
    pub travel_options: Vec<TravelOption>,

    /// Points of interest along the route, in order
    pub route_highlights: Vec<String>,
}

impl TravelPlan {
    /// Build a plan from parsed JSON
    ///
    /// Returns `None` only when `value` is not a JSON object. Any object,
    /// including `{}`, yields a plan.
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;

        let travel_options = obj
            .get("travel_options")
            .and_then(Value::as_array)
            .map(|options| {
                options
                    .iter()
                    .filter_map(Value::as_object)
                    .map(TravelOption::from_object)
                    .collect()
            })
            .unwrap_or_default();

        let route_highlights = obj
            .get("route_highlights")
            .and_then(Value::as_array)
            .map(|highlights| highlights.iter().filter_map(scalar_text).collect())
            .unwrap_or_default();

        Some(Self {
            source: text_field(obj, "source"),
            destination: text_field(obj, "destination"),
            distance_km: obj.get("distance_km").and_then(distance_from_value),
            travel_options,
            route_highlights,
        })
    }

    /// True when the model gave neither options nor highlights
    pub fn is_empty(&self) -> bool {
        self.travel_options.is_empty() && self.route_highlights.is_empty()
    }
}

fn text_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(scalar_text)
}

/// Strings (trimmed, non-empty), numbers and booleans read as text
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Accepts `150`, `"150"`, `"150 km"` and `"1,400 km"`
fn distance_from_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let leading: String = s
                .trim()
                .chars()
                .take_while(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
                .filter(|c| *c != ',')
                .collect();
            leading.parse().ok()
        }
        _ => None,
    }
}
