use qualifier_core::{AttemptError, SubmissionOutcome};
use reqwest::blocking::Client;

use super::transport::{send_submission, SubmissionPayload};

/// Single fallback attempt. Whatever happens here is final.
pub(super) fn run_fallback_attempt(
    client: &Client,
    fallback_url: &str,
    payload: &SubmissionPayload,
    primary_error: AttemptError,
) -> SubmissionOutcome {
    match send_submission(client, fallback_url, payload) {
        Ok(body) => {
            log::info!("fallback submission delivered: url={}", fallback_url);
            SubmissionOutcome::RecoveredByFallback {
                body,
                primary_error,
            }
        }
        Err(fallback_error) => {
            log::warn!(
                "fallback submission failed: url={} err={}",
                fallback_url,
                fallback_error
            );
            SubmissionOutcome::Failed {
                primary_error,
                fallback_error,
            }
        }
    }
}
