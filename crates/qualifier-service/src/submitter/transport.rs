use qualifier_core::wire::types::SubmitRequest;
use qualifier_core::{Artifact, AttemptError};
use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};

/// Serialized once and reused so the fallback request is identical to the primary.
pub(super) struct SubmissionPayload {
    auth_token: String,
    body: Vec<u8>,
}

impl SubmissionPayload {
    pub(super) fn new(auth_token: &str, artifact: &Artifact) -> Self {
        let request = SubmitRequest {
            final_query: artifact.text().to_string(),
        };
        // A struct with one string field always serializes.
        let body = serde_json::to_vec(&request).unwrap_or_default();
        Self {
            auth_token: auth_token.to_string(),
            body,
        }
    }
}

pub(super) fn send_submission(
    client: &Client,
    target_url: &str,
    payload: &SubmissionPayload,
) -> Result<String, AttemptError> {
    let resp = client
        .post(target_url)
        .header(CONTENT_TYPE, "application/json")
        // Raw token, no scheme prefix.
        .header(AUTHORIZATION, payload.auth_token.as_str())
        .body(payload.body.clone())
        .send()
        .map_err(|e| AttemptError::Transport(e.to_string()))?;
    let status = resp.status();
    let body = resp
        .text()
        .map_err(|e| AttemptError::Transport(e.to_string()))?;
    if !status.is_success() {
        return Err(AttemptError::Status {
            status: status.as_u16(),
            body,
        });
    }
    Ok(body)
}
