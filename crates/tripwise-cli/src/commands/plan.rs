//! Plan command implementation.

use crate::error::Result;
use crate::output::Formatter;
use std::process::ExitCode;
use tripwise_domain::traits::LlmProvider;
use tripwise_llm::LlmError;
use tripwise_planner::{PlanOutcome, Planner};

/// Whether a structured plan was shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanStatus {
    /// A plan was recovered and rendered
    Rendered,
    /// The reply could not be parsed; the raw text was rendered instead
    Unparsed,
}

impl PlanStatus {
    /// Process exit code for one-shot mode.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            PlanStatus::Rendered => ExitCode::SUCCESS,
            PlanStatus::Unparsed => ExitCode::from(2),
        }
    }
}

/// Rendered output of one planning request.
#[derive(Debug, Clone)]
pub struct PlanReport {
    /// Text to print
    pub output: String,
    /// What was rendered
    pub status: PlanStatus,
}

/// Execute one planning request and render the result.
pub fn execute_plan<L>(
    planner: &Planner<L>,
    source: &str,
    destination: &str,
    formatter: &Formatter,
) -> Result<PlanReport>
where
    L: LlmProvider<Error = LlmError>,
{
    let report = match planner.plan_for(source, destination)? {
        PlanOutcome::Parsed { plan, .. } => PlanReport {
            output: formatter.format_plan(&plan)?,
            status: PlanStatus::Rendered,
        },
        PlanOutcome::Unparsed { raw } => PlanReport {
            output: formatter.format_unparsed(&raw)?,
            status: PlanStatus::Unparsed,
        },
    };

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use crate::error::CliError;
    use tripwise_domain::QueryError;
    use tripwise_llm::MockProvider;
    use tripwise_planner::PlannerError;

    fn formatter() -> Formatter {
        Formatter::new(OutputFormat::Table, false)
    }

    #[test]
    fn test_rendered_plan() {
        let planner = Planner::new(MockProvider::new(
            "```json\n{\"source\":\"Mumbai\",\"destination\":\"Pune\",\"travel_options\":[{\"mode\":\"Bus\"}],\"route_highlights\":[\"Lonavala Ghat\"]}\n```",
        ));

        let report = execute_plan(&planner, "Mumbai", "Pune", &formatter()).unwrap();
        assert_eq!(report.status, PlanStatus::Rendered);
        assert!(report.output.contains("[🚌 Bus]"));
        assert!(report.output.contains("Lonavala Ghat"));
    }

    #[test]
    fn test_unparsed_reply() {
        let planner = Planner::new(MockProvider::new("The servers are busy, try later"));

        let report = execute_plan(&planner, "Mumbai", "Pune", &formatter()).unwrap();
        assert_eq!(report.status, PlanStatus::Unparsed);
        assert!(report.output.contains("Could not parse JSON response"));
        assert!(report.output.contains("The servers are busy, try later"));
    }

    #[test]
    fn test_model_error_is_surfaced() {
        let planner = Planner::new(MockProvider::failing(LlmError::RateLimited(
            "HTTP 429".to_string(),
        )));

        let err = execute_plan(&planner, "Mumbai", "Pune", &formatter()).unwrap_err();
        assert!(matches!(
            err,
            CliError::Planner(PlannerError::Model(LlmError::RateLimited(_)))
        ));
        assert!(err.to_string().contains("Rate limit exceeded"));
    }

    #[test]
    fn test_blank_input_is_rejected() {
        let planner = Planner::new(MockProvider::new("{}"));

        let err = execute_plan(&planner, "Mumbai", "   ", &formatter()).unwrap_err();
        assert!(matches!(
            err,
            CliError::Planner(PlannerError::Query(QueryError::MissingDestination))
        ));
    }

    #[test]
    fn test_exit_codes() {
        let code = |c: ExitCode| format!("{:?}", c);
        assert_eq!(code(PlanStatus::Rendered.exit_code()), code(ExitCode::SUCCESS));
        assert_eq!(code(PlanStatus::Unparsed.exit_code()), code(ExitCode::from(2)));
    }
}
