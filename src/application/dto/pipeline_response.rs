use crate::sbom_publishing::domain::{ArtifactHandle, UploadResult};
use std::path::PathBuf;

/// PipelineResponse - what a completed run hands back to the CLI
#[derive(Debug, Clone)]
pub struct PipelineResponse {
    /// SBOM path as configured (relative to the working directory)
    pub sbom_path: PathBuf,
    /// Outcome of the upload; advisory only
    pub upload_result: UploadResult,
    /// Published artifact, when publishing was requested and succeeded
    pub artifact: Option<ArtifactHandle>,
}

impl PipelineResponse {
    pub fn new(
        sbom_path: PathBuf,
        upload_result: UploadResult,
        artifact: Option<ArtifactHandle>,
    ) -> Self {
        Self {
            sbom_path,
            upload_result,
            artifact,
        }
    }
}
