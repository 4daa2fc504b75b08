use qualifier_core::AttemptError;
use reqwest::blocking::Client;

use super::transport::{send_submission, SubmissionPayload};

pub(super) enum PrimaryAttemptResult {
    Delivered(String),
    Failover(AttemptError),
}

pub(super) fn run_primary_attempt(
    client: &Client,
    endpoint_url: &str,
    payload: &SubmissionPayload,
) -> PrimaryAttemptResult {
    match send_submission(client, endpoint_url, payload) {
        Ok(body) => {
            log::info!("submission delivered: url={}", endpoint_url);
            PrimaryAttemptResult::Delivered(body)
        }
        Err(err) => {
            log::warn!(
                "submission failed, trying fallback: url={} err={}",
                endpoint_url,
                err
            );
            PrimaryAttemptResult::Failover(err)
        }
    }
}
