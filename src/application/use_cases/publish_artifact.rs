use crate::ports::outbound::{ArtifactStore, ProgressReporter};
use crate::sbom_publishing::domain::{ArtifactHandle, ArtifactName};
use crate::shared::Result;
use std::path::Path;

/// PublishArtifactUseCase - keeps the SBOM as a workflow artifact
///
/// Publishing is advisory: failures are logged and yield `None`.
pub struct PublishArtifactUseCase<'a, AS, PR> {
    artifact_store: &'a AS,
    progress_reporter: &'a PR,
}

impl<'a, AS, PR> PublishArtifactUseCase<'a, AS, PR>
where
    AS: ArtifactStore,
    PR: ProgressReporter,
{
    pub fn new(artifact_store: &'a AS, progress_reporter: &'a PR) -> Self {
        Self {
            artifact_store,
            progress_reporter,
        }
    }

    /// Publishes `sbom_path` as `artifact_name`, with `root` as the archive root
    pub async fn execute(
        &self,
        sbom_path: &Path,
        artifact_name: &str,
        root: &Path,
    ) -> Option<ArtifactHandle> {
        self.progress_reporter
            .report("📎 Uploading SBOM as workflow artifact...");

        match self.publish(sbom_path, artifact_name, root).await {
            Ok(handle) => {
                self.progress_reporter
                    .report(&format!("✅ Artifact uploaded! ID: {}", handle.id()));
                Some(handle)
            }
            Err(e) => {
                self.progress_reporter
                    .report_warning(&format!("⚠️  Failed to upload artifact: {:#}", e));
                self.progress_reporter
                    .report_warning("Continuing with workflow execution...");
                None
            }
        }
    }

    async fn publish(
        &self,
        sbom_path: &Path,
        artifact_name: &str,
        root: &Path,
    ) -> Result<ArtifactHandle> {
        let name = ArtifactName::new(artifact_name)?;
        self.artifact_store
            .upload_artifact(&name, &[sbom_path.to_path_buf()], root)
            .await
    }
}
