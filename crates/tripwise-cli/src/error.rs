//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Model provider setup error
    #[error("{0}")]
    Llm(#[from] tripwise_llm::LlmError),

    /// Planning error
    #[error("{0}")]
    Planner(#[from] tripwise_planner::PlannerError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Line editor error
    #[error("Input error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
}
