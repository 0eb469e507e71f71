//! Gloss CLI entrypoint.

use std::io::{self, Write};
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use gloss::ai::{OpenAiRewriteConfig, OpenAiRewriteService};
use gloss::run::{execute_run, write_run_summary};
use gloss::{GlossConfig, GlossError};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), GlossError> {
    let config = load_config()?;
    init_tracing();

    // The credential and the HTTP client are both startup preconditions:
    // either failing aborts before any filesystem access.
    let api_key = config.resolve_api_key()?;
    let service = OpenAiRewriteService::from_config(OpenAiRewriteConfig::new(
        config.ai_base_url.clone(),
        config.ai_model.clone(),
        Some(api_key),
        Duration::from_secs(config.ai_timeout_seconds),
    ))?;

    let mut stdout = io::stdout().lock();
    let Some(report) = execute_run(&mut stdout, &config, &service)? else {
        return Ok(());
    };
    write_run_summary(&mut stdout, &report)
}

/// Loads configuration from the command line.
///
/// `--help` and `--version` print to stdout and exit successfully; any
/// other parse failure becomes a configuration error carrying clap's usage
/// message.
fn load_config() -> Result<GlossConfig, GlossError> {
    match GlossConfig::try_parse() {
        Ok(config) => Ok(config),
        Err(error) => {
            if matches!(
                error.kind(),
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion
            ) {
                error.exit();
            }
            Err(GlossError::Configuration {
                message: error.to_string(),
            })
        }
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ignored = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}
