use std::path::PathBuf;

use qualifier_core::{ArtifactSlot, AttemptError, RegistrationError, SubmissionOutcome};
use thiserror::Error;

mod config;
mod persist;
mod registrar;
mod runtime_config;
mod submitter;
mod workflow;

pub use config::{ConfigError, QualifierConfig, DEFAULT_FALLBACK_URL, DEFAULT_REGISTRATION_URL};
pub use registrar::{Register, Registrar};
pub use runtime_config::{build_http_client, HttpSettings};
pub use submitter::{Submit, Submitter};
pub use workflow::Workflow;

#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("http client setup failed: {0}")]
    HttpClient(String),
    #[error(transparent)]
    Registration(#[from] RegistrationError),
    #[error("submission failed on primary ({primary}) and fallback ({fallback})")]
    Submission {
        primary: AttemptError,
        fallback: AttemptError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowReport {
    pub slot: ArtifactSlot,
    pub written: Vec<PathBuf>,
    /// `None` when submission was skipped (dry run).
    pub outcome: Option<SubmissionOutcome>,
}

/// Builds the shared HTTP client from `config` and runs the whole
/// register, select, persist, submit sequence once.
pub fn run(config: QualifierConfig, dry_run: bool) -> Result<WorkflowReport, WorkflowError> {
    let client = build_http_client(&config.http)
        .map_err(|err| WorkflowError::HttpClient(err.to_string()))?;
    let registrar = Registrar::new(client.clone(), config.registration_url.clone());
    let submitter = Submitter::new(client, config.fallback_url.clone());
    Workflow::from_config(config)
        .dry_run(dry_run)
        .run(&registrar, &submitter)
}
