//! LLM prompt engineering for travel planning

use tripwise_domain::TravelQuery;

/// Renders the travel-planning instruction for one query
///
/// Rendering is deterministic: the same query always yields the same prompt.
pub struct TravelPrompt<'a> {
    query: &'a TravelQuery,
}

impl<'a> TravelPrompt<'a> {
    /// Create a new prompt for `query`
    pub fn new(query: &'a TravelQuery) -> Self {
        Self { query }
    }

    /// Build the complete prompt
    pub fn render(&self) -> String {
        let mut prompt = String::new();

        // 1. Role and task
        prompt.push_str(PLANNING_INSTRUCTIONS);
        prompt.push_str("\n\n");

        // 2. The query
        prompt.push_str(&format!("Source: {}\n", self.query.source()));
        prompt.push_str(&format!("Destination: {}\n\n", self.query.destination()));

        // 3. Output format
        prompt.push_str(OUTPUT_FORMAT);
        prompt.push_str("\n\n");
        prompt.push_str(OUTPUT_FORMAT_REMINDER);

        prompt
    }
}

const PLANNING_INSTRUCTIONS: &str = "You are an AI travel assistant. Based on the following source and destination, \
provide travel options including cab, train, bus, and flights if applicable, \
along with estimated costs and travel times.";

const OUTPUT_FORMAT: &str = r#"Respond with a structured JSON with the following format:
{
  "source": "Source City Name",
  "destination": "Destination City Name",
  "distance_km": approximate_distance_in_km,
  "travel_options": [
    {
      "mode": "Transport Mode Name",
      "estimated_cost_range_inr": "Cost range in INR",
      "travel_time_hours": "Estimated time in hours",
      "frequency": "How often this transport is available",
      "comfort_level": "Low/Medium/High",
      "notes": "Additional information about this option"
    }
  ],
  "route_highlights": [
    "Point of interest 1",
    "Point of interest 2"
  ]
}"#;

const OUTPUT_FORMAT_REMINDER: &str =
    "Ensure your response is valid JSON that can be parsed by a standard JSON parser.";
