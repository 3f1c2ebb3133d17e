use anyhow::Context;
use clap::Parser;
use fairvalue_signal::cli::{Cli, CliError};
use fairvalue_signal::config::Config;
use fairvalue_signal::signal::RecommendationEngine;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version
        Err(e) if !e.use_stderr() => {
            e.print()?;
            return Ok(());
        }
        Err(e) => return Err(CliError::from(e).into()),
    };

    // No file is read unless one is given
    let config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Could not load config from {}", path.display()))?,
        None => Config::default(),
    };

    fairvalue_signal::telemetry::init_telemetry(&config.telemetry, cli.log_level.as_deref())?;

    let inputs = cli.inputs()?;
    tracing::info!(
        implied_value = inputs.implied_value,
        reference_price = inputs.reference_price,
        "Evaluating prices"
    );

    let engine = RecommendationEngine::new(config.engine);
    let recommendation = engine.evaluate_inputs(inputs);
    println!("{}", cli.render(&recommendation)?);

    Ok(())
}
