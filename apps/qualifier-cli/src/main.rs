use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use qualifier_core::SubmissionOutcome;
use qualifier_service::{QualifierConfig, WorkflowError, WorkflowReport};
use tracing_subscriber::EnvFilter;

const EXIT_CONFIG: u8 = 1;
const EXIT_REGISTRATION: u8 = 2;
const EXIT_SUBMISSION: u8 = 3;

/// Register with the grading service and submit the selected query.
#[derive(Parser, Debug)]
#[command(name = "qualifier", version)]
struct Cli {
    /// Env file to load before reading QUALIFIER_* settings (default: ./.env if present)
    #[arg(long, value_name = "PATH")]
    env_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Register and save the selected query without submitting it
    #[arg(long)]
    dry_run: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    // Env file first so RUST_LOG from it is honored.
    let env_loaded = load_env_file(cli.env_file.as_deref());
    init_logging(cli.verbose);
    match env_loaded {
        Ok(Some(path)) => log::info!("loaded env file {}", path.display()),
        Ok(None) => {}
        Err(err) => {
            log::error!("{err}");
            return ExitCode::from(EXIT_CONFIG);
        }
    }

    log::info!("starting qualifier run");
    let config = match QualifierConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            log::error!("configuration error: {err}");
            return ExitCode::from(EXIT_CONFIG);
        }
    };

    match qualifier_service::run(config, cli.dry_run) {
        Ok(report) => {
            print_report(&report);
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("{err}");
            ExitCode::from(exit_code_for(&err))
        }
    }
}

fn load_env_file(explicit: Option<&Path>) -> Result<Option<PathBuf>, String> {
    match explicit {
        Some(path) => dotenvy::from_path(path)
            .map(|_| Some(path.to_path_buf()))
            .map_err(|err| format!("failed to load env file {}: {err}", path.display())),
        // A missing default .env is fine; a malformed one is not.
        None => match dotenvy::dotenv() {
            Ok(path) => Ok(Some(path)),
            Err(err) if err.not_found() => Ok(None),
            Err(err) => Err(format!("failed to load .env: {err}")),
        },
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_target(false)
        .init();
}

fn exit_code_for(err: &WorkflowError) -> u8 {
    match err {
        WorkflowError::HttpClient(_) => EXIT_CONFIG,
        WorkflowError::Registration(_) => EXIT_REGISTRATION,
        WorkflowError::Submission { .. } => EXIT_SUBMISSION,
    }
}

fn print_report(report: &WorkflowReport) {
    println!("Selected query: {}", report.slot);
    for path in &report.written {
        println!("Saved to: {}", path.display());
    }
    match &report.outcome {
        None => println!("Submission skipped (dry run)"),
        Some(SubmissionOutcome::Delivered { body }) => println!("Submission response: {body}"),
        Some(SubmissionOutcome::RecoveredByFallback { body, primary_error }) => {
            println!("Primary submission failed: {primary_error}");
            println!("Submission response (fallback): {body}");
        }
        // run() turns this into WorkflowError::Submission.
        Some(SubmissionOutcome::Failed { .. }) => {}
    }
}
