use crate::shared::error::ActionError;
use crate::shared::Result;
use std::fmt;

/// Characters the artifact service refuses in artifact names
const INVALID_NAME_CHARACTERS: [char; 11] = ['"', ':', '<', '>', '|', '*', '?', '\r', '\n', '\\', '/'];

/// ArtifactName value object - a name accepted by the artifact service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactName(String);

impl ArtifactName {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ActionError::InvalidArtifactName {
                name,
                reason: "Artifact name must not be empty".to_string(),
            }
            .into());
        }

        if let Some(c) = name.chars().find(|c| INVALID_NAME_CHARACTERS.contains(c)) {
            return Err(ActionError::InvalidArtifactName {
                reason: format!("Artifact name contains invalid character {:?}", c),
                name,
            }
            .into());
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArtifactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier returned by the artifact store for a published artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactHandle {
    id: String,
    size: u64,
}

impl ArtifactHandle {
    pub fn new(id: impl Into<String>, size: u64) -> Self {
        Self { id: id.into(), size }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Size of the uploaded archive in bytes
    pub fn size(&self) -> u64 {
        self.size
    }
}
