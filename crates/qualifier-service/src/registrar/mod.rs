use qualifier_core::wire::types::RegisterResponse;
use qualifier_core::{Identity, RegistrationError, RegistrationResult};
use reqwest::blocking::Client;

pub trait Register {
    fn register(&self, identity: &Identity) -> Result<RegistrationResult, RegistrationError>;
}

pub struct Registrar {
    client: Client,
    registration_url: String,
}

impl Registrar {
    pub fn new(client: Client, registration_url: impl Into<String>) -> Self {
        Self {
            client,
            registration_url: registration_url.into(),
        }
    }

    pub fn registration_url(&self) -> &str {
        &self.registration_url
    }
}

impl Register for Registrar {
    fn register(&self, identity: &Identity) -> Result<RegistrationResult, RegistrationError> {
        let result = request_registration(&self.client, &self.registration_url, identity);
        match &result {
            Ok(registered) => log::info!(
                "registration ok: url={} webhook={}",
                self.registration_url,
                registered.endpoint_url
            ),
            Err(err) => log::warn!("registration failed: url={} err={}", self.registration_url, err),
        }
        result
    }
}

fn request_registration(
    client: &Client,
    url: &str,
    identity: &Identity,
) -> Result<RegistrationResult, RegistrationError> {
    let resp = client
        .post(url)
        .json(&identity.to_request())
        .send()
        .map_err(|e| RegistrationError::Transport(e.to_string()))?;
    let status = resp.status();
    let body = resp
        .text()
        .map_err(|e| RegistrationError::Transport(e.to_string()))?;
    if !status.is_success() {
        return Err(RegistrationError::Status {
            status: status.as_u16(),
            body,
        });
    }
    // An empty or `null` body counts as a response with no fields.
    let parsed: Option<RegisterResponse> = if body.trim().is_empty() {
        None
    } else {
        serde_json::from_str(&body).map_err(|e| RegistrationError::Decode(e.to_string()))?
    };
    RegistrationResult::try_from(parsed.unwrap_or_default())
}
