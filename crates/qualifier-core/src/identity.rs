use crate::error::RegistrationError;
use crate::wire::types::{RegisterRequest, RegisterResponse};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub name: String,
    pub reg_no: String,
    pub email: String,
}

impl Identity {
    pub fn new(name: impl Into<String>, reg_no: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reg_no: reg_no.into(),
            email: email.into(),
        }
    }

    pub fn to_request(&self) -> RegisterRequest {
        RegisterRequest {
            name: self.name.clone(),
            reg_no: self.reg_no.clone(),
            email: self.email.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationResult {
    pub endpoint_url: String,
    pub access_token: String,
}

fn required(value: Option<String>, field: &'static str) -> Result<String, RegistrationError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(RegistrationError::MissingField(field)),
    }
}

impl TryFrom<RegisterResponse> for RegistrationResult {
    type Error = RegistrationError;

    fn try_from(resp: RegisterResponse) -> Result<Self, Self::Error> {
        let endpoint_url = required(resp.webhook, "webhook")?;
        let access_token = required(resp.access_token, "accessToken")?;
        Ok(Self {
            endpoint_url,
            access_token,
        })
    }
}
