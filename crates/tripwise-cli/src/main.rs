//! Tripwise CLI - travel options between two places, from an LLM.

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use tripwise_cli::commands::execute_plan;
use tripwise_cli::{repl, Cli, Config, Formatter};
use tripwise_llm::{GeminiProvider, ModelConfig};
use tripwise_planner::Planner;

fn main() -> ExitCode {
    // A missing .env is fine; the environment may already be set
    dotenvy::dotenv().ok();
    init_tracing();

    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> tripwise_cli::Result<ExitCode> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let format = cli.format.map(Into::into).unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    // Fail fast on missing credentials, before any prompt is shown
    let mut model_config = ModelConfig::from_env()?;
    if let Some(model) = &cli.model {
        model_config = model_config.with_model(model.as_str());
        model_config.validate()?;
    }
    tracing::info!(model = %model_config.model, "Using model");

    let planner = Planner::new(GeminiProvider::new(model_config)?);

    match cli.one_shot() {
        Some((source, destination)) => {
            let report = execute_plan(&planner, source, destination, &formatter)?;
            println!("{}", report.output);
            Ok(report.status.exit_code())
        }
        None => {
            repl::run_repl(&planner, &formatter)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
