pub mod artifact;
pub mod error;
pub mod identity;
pub mod outcome;
pub mod wire;

pub use artifact::{select_artifact, select_slot, trailing_number, Artifact, ArtifactSet, ArtifactSlot};
pub use error::{AttemptError, RegistrationError};
pub use identity::{Identity, RegistrationResult};
pub use outcome::SubmissionOutcome;
