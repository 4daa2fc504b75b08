use qualifier_core::{Artifact, SubmissionOutcome};
use reqwest::blocking::Client;

mod fallback_branch;
mod primary_attempt;
mod transport;

pub trait Submit {
    fn submit(&self, endpoint_url: &str, token: &str, artifact: &Artifact) -> SubmissionOutcome;
}

pub struct Submitter {
    client: Client,
    fallback_url: String,
}

impl Submitter {
    pub fn new(client: Client, fallback_url: impl Into<String>) -> Self {
        Self {
            client,
            fallback_url: fallback_url.into(),
        }
    }

    pub fn fallback_url(&self) -> &str {
        &self.fallback_url
    }
}

impl Submit for Submitter {
    fn submit(&self, endpoint_url: &str, token: &str, artifact: &Artifact) -> SubmissionOutcome {
        let payload = transport::SubmissionPayload::new(token, artifact);
        match primary_attempt::run_primary_attempt(&self.client, endpoint_url, &payload) {
            primary_attempt::PrimaryAttemptResult::Delivered(body) => {
                SubmissionOutcome::Delivered { body }
            }
            primary_attempt::PrimaryAttemptResult::Failover(primary_error) => {
                fallback_branch::run_fallback_attempt(
                    &self.client,
                    &self.fallback_url,
                    &payload,
                    primary_error,
                )
            }
        }
    }
}
