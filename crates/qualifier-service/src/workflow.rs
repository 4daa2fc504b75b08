use std::path::PathBuf;

use qualifier_core::{select_artifact, ArtifactSet, Identity, SubmissionOutcome};

use crate::config::QualifierConfig;
use crate::persist::persist_artifact;
use crate::registrar::Register;
use crate::submitter::Submit;
use crate::{WorkflowError, WorkflowReport};

/// Register, select, persist and submit, in that order, once.
pub struct Workflow {
    identity: Identity,
    artifacts: ArtifactSet,
    output_paths: Vec<PathBuf>,
    dry_run: bool,
}

impl Workflow {
    pub fn new(identity: Identity, artifacts: ArtifactSet) -> Self {
        Self {
            identity,
            artifacts,
            output_paths: Vec::new(),
            dry_run: false,
        }
    }

    pub fn from_config(config: QualifierConfig) -> Self {
        Self::new(config.identity, config.artifacts).output_paths(config.output_paths)
    }

    pub fn output_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.output_paths = paths;
        self
    }

    /// Stop after persisting the selected artifact.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn run<R, S>(&self, registrar: &R, submitter: &S) -> Result<WorkflowReport, WorkflowError>
    where
        R: Register + ?Sized,
        S: Submit + ?Sized,
    {
        let registration = registrar.register(&self.identity)?;

        let artifact = select_artifact(&self.identity.reg_no, &self.artifacts);
        log::info!(
            "artifact selected: reg_no={} slot={}",
            self.identity.reg_no,
            artifact.slot()
        );
        let written = persist_artifact(&artifact, &self.output_paths);

        if self.dry_run {
            log::info!("dry run: submission skipped");
            return Ok(WorkflowReport {
                slot: artifact.slot(),
                written,
                outcome: None,
            });
        }

        let outcome = submitter.submit(
            &registration.endpoint_url,
            &registration.access_token,
            &artifact,
        );
        if let SubmissionOutcome::Failed {
            primary_error,
            fallback_error,
        } = outcome
        {
            return Err(WorkflowError::Submission {
                primary: primary_error,
                fallback: fallback_error,
            });
        }
        Ok(WorkflowReport {
            slot: artifact.slot(),
            written,
            outcome: Some(outcome),
        })
    }
}
