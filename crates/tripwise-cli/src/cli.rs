//! CLI argument parsing.

use clap::Parser;

/// Tripwise - Ask an LLM for cab, train, bus and flight options between two places.
///
/// Without --from and --to, starts an interactive prompt. The two flags
/// must be given together.
#[derive(Debug, Parser)]
#[command(name = "tripwise")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Source location
    #[arg(short = 's', long = "from", value_name = "SOURCE", requires = "destination")]
    pub source: Option<String>,

    /// Destination location
    #[arg(short = 'd', long = "to", value_name = "DESTINATION", requires = "source")]
    pub destination: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Model name (defaults to gemini-2.0-flash-exp)
    #[arg(short, long, env = "TRIPWISE_MODEL")]
    pub model: Option<String>,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<String>,
}

impl Cli {
    /// Both fields given on the command line: run once and exit
    pub fn one_shot(&self) -> Option<(&str, &str)> {
        match (&self.source, &self.destination) {
            (Some(source), Some(destination)) => Some((source.as_str(), destination.as_str())),
            _ => None,
        }
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Sectioned tables (default)
    Table,
    /// JSON format
    Json,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
        }
    }
}
