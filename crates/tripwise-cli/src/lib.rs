//! Tripwise CLI library.
//!
//! Terminal presentation layer for the planner: argument parsing, settings,
//! plan rendering and the interactive prompt loop.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod repl;

pub use cli::Cli;
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
