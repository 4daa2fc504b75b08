mod select;

pub use select::{select_artifact, select_slot, trailing_number};

pub const DEFAULT_ARTIFACT_A: &str = include_str!("../../assets/artifact_a.sql");
pub const DEFAULT_ARTIFACT_B: &str = include_str!("../../assets/artifact_b.sql");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactSlot {
    /// Chosen for odd trailing numbers.
    A,
    /// Chosen for even trailing numbers, including the no-digit case.
    B,
}

impl ArtifactSlot {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
        }
    }
}

impl std::fmt::Display for ArtifactSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque query text. The content is never inspected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    slot: ArtifactSlot,
    text: String,
}

impl Artifact {
    pub fn slot(&self) -> ArtifactSlot {
        self.slot
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactSet {
    a: String,
    b: String,
}

impl ArtifactSet {
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
        }
    }

    pub fn get(&self, slot: ArtifactSlot) -> Artifact {
        let text = match slot {
            ArtifactSlot::A => self.a.clone(),
            ArtifactSlot::B => self.b.clone(),
        };
        Artifact { slot, text }
    }
}

impl Default for ArtifactSet {
    fn default() -> Self {
        Self::new(DEFAULT_ARTIFACT_A, DEFAULT_ARTIFACT_B)
    }
}
