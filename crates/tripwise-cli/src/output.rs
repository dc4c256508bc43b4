//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use tabled::{builder::Builder, settings::Style};
use tripwise_domain::{ComfortLevel, RawModelResponse, TravelOption, TravelPlan};

/// Shown when no cascade stage could recover a plan.
pub const PARSE_FAILURE_MESSAGE: &str = "Could not parse JSON response. Please try again.";

const NOT_AVAILABLE: &str = "N/A";
const NOTHING_RETURNED: &str = "No transport options or points of interest returned. Please try again.";

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a recovered plan.
    pub fn format_plan(&self, plan: &TravelPlan) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(plan)?),
            OutputFormat::Table => Ok(self.format_plan_sections(plan)),
        }
    }

    /// Format the diagnostic view for a reply that could not be parsed.
    pub fn format_unparsed(&self, raw: &RawModelResponse) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "error": PARSE_FAILURE_MESSAGE,
                "raw_response": raw.as_str(),
            }))?),
            OutputFormat::Table => Ok(format!(
                "{}\n\n{}\n{}\n{}",
                self.error(PARSE_FAILURE_MESSAGE),
                self.colorize("─── Raw Response ───", "magenta"),
                raw.as_str().trim_end(),
                self.colorize("────────────────────", "magenta"),
            )),
        }
    }

    fn format_plan_sections(&self, plan: &TravelPlan) -> String {
        let mut out = String::new();

        // Overview
        out.push_str(&self.heading("📍 Trip Overview"));
        out.push('\n');
        out.push_str(&format!(
            "From: {}\n",
            plan.source.as_deref().unwrap_or("Not available")
        ));
        out.push_str(&format!(
            "To:   {}\n",
            plan.destination.as_deref().unwrap_or("Not available")
        ));
        if let Some(distance) = plan.distance_km {
            out.push_str(&format!("Distance: {} km\n", distance));
        }

        if plan.is_empty() {
            out.push('\n');
            out.push_str(&self.warning(NOTHING_RETURNED));
            out.push('\n');
            return out;
        }

        // One "tab" per option, in the order the model gave them
        out.push('\n');
        out.push_str(&self.heading("🚀 Available Transport Options"));
        out.push('\n');
        if plan.travel_options.is_empty() {
            out.push_str(&self.warning("No transport options returned."));
            out.push('\n');
        } else {
            let tabs: Vec<String> = plan
                .travel_options
                .iter()
                .enumerate()
                .map(|(i, option)| format!("[{}]", tab_title(option, i)))
                .collect();
            out.push_str(&tabs.join(" "));
            out.push('\n');

            for (i, option) in plan.travel_options.iter().enumerate() {
                out.push('\n');
                out.push_str(&self.format_option(option, i));
            }
        }

        if !plan.route_highlights.is_empty() {
            out.push('\n');
            out.push_str(&self.heading("🏛️ Points of Interest"));
            out.push('\n');
            for highlight in &plan.route_highlights {
                out.push_str(&format!("  • {}\n", highlight));
            }
        }

        out
    }

    fn format_option(&self, option: &TravelOption, index: usize) -> String {
        let mut out = self.colorize(&format!("── {} ──", tab_title(option, index)), "cyan");
        out.push('\n');

        let travel_time = option
            .travel_time_hours
            .as_ref()
            .map(|t| format!("{} hours", t))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());
        let comfort = self.format_comfort(option);

        let mut builder = Builder::default();
        builder.push_record([
            "Cost Range",
            option.estimated_cost_range.as_deref().unwrap_or(NOT_AVAILABLE),
        ]);
        builder.push_record(["Comfort Level", comfort.as_str()]);
        builder.push_record(["Travel Time", travel_time.as_str()]);
        builder.push_record([
            "Frequency",
            option.frequency.as_deref().unwrap_or(NOT_AVAILABLE),
        ]);

        let mut table = builder.build();
        table.with(Style::rounded());
        out.push_str(&table.to_string());
        out.push('\n');

        if let Some(notes) = &option.notes {
            out.push_str(&self.info(&format!("Note: {}", notes)));
            out.push('\n');
        }

        out
    }

    fn format_comfort(&self, option: &TravelOption) -> String {
        let text = option.comfort_level.as_deref().unwrap_or(NOT_AVAILABLE);
        match option.comfort() {
            Some(ComfortLevel::High) => self.colorize(text, "green"),
            Some(ComfortLevel::Medium) => self.colorize(text, "yellow"),
            Some(ComfortLevel::Low) => self.colorize(text, "red"),
            None => text.to_string(),
        }
    }

    fn heading(&self, text: &str) -> String {
        if self.color_enabled {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            "magenta" => text.magenta().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Icon shown next to a transport mode.
pub fn mode_icon(mode: &str) -> &'static str {
    match mode {
        "Cab" | "Taxi" => "🚕",
        "Car" => "🚗",
        "Train" => "🚆",
        "Bus" => "🚌",
        "Flight" | "Airplane" => "✈️",
        _ => "🚀",
    }
}

fn tab_title(option: &TravelOption, index: usize) -> String {
    let label = option.label(index);
    format!("{} {}", mode_icon(&label), label)
}
