use thiserror::Error;

/// Registration failures. All of them are fatal for the workflow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("registration transport error: {0}")]
    Transport(String),
    #[error("registration endpoint returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("registration response could not be decoded: {0}")]
    Decode(String),
    #[error("registration response missing {0}")]
    MissingField(&'static str),
}

/// Failure of a single submission attempt against one endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttemptError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("endpoint returned status {status}: {body}")]
    Status { status: u16, body: String },
}
