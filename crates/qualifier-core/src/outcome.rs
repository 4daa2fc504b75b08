use crate::error::AttemptError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Primary endpoint accepted the submission.
    Delivered { body: String },
    /// Primary failed, the single fallback attempt succeeded.
    RecoveredByFallback {
        body: String,
        primary_error: AttemptError,
    },
    /// Both attempts failed. Terminal.
    Failed {
        primary_error: AttemptError,
        fallback_error: AttemptError,
    },
}

impl SubmissionOutcome {
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Delivered { body } | Self::RecoveredByFallback { body, .. } => Some(body.as_str()),
            Self::Failed { .. } => None,
        }
    }

    pub fn is_success(&self) -> bool {
        !matches!(self, Self::Failed { .. })
    }

    pub fn used_fallback(&self) -> bool {
        !matches!(self, Self::Delivered { .. })
    }
}
