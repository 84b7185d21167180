use crate::sbom_publishing::domain::{ArtifactHandle, ArtifactName};
use crate::shared::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// ArtifactStore port for persisting files as workflow artifacts
#[async_trait]
pub trait ArtifactStore: Send + Sync {
    /// Uploads `files` under `name`, storing paths relative to `root`
    ///
    /// `files` and `root` are both resolved from the process working directory.
    async fn upload_artifact(
        &self,
        name: &ArtifactName,
        files: &[PathBuf],
        root: &Path,
    ) -> Result<ArtifactHandle>;
}
