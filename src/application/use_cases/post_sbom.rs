use super::CollectMetadataUseCase;
use crate::ports::outbound::{
    CommandRunner, EnvironmentProvider, IdentityRepository, IngestService, ProgressReporter,
};
use crate::sbom_publishing::domain::{RunMetadata, SbomSubmission, UploadResult};
use crate::shared::security;
use crate::shared::Result;
use std::path::Path;

/// File name sent when the SBOM path has no final component
const FALLBACK_FILE_NAME: &str = "sbom.cyclonedx.json";

/// PostSbomUseCase - uploads the SBOM together with the run metadata
///
/// The upload is advisory: every failure is logged as a warning and turned
/// into [`UploadResult::Error`], so the pipeline keeps going.
pub struct PostSbomUseCase<'a, CR, ENV, IR, IS, PR> {
    metadata_collector: CollectMetadataUseCase<'a, CR, ENV, IR, PR>,
    ingest_service: &'a IS,
    progress_reporter: &'a PR,
}

impl<'a, CR, ENV, IR, IS, PR> PostSbomUseCase<'a, CR, ENV, IR, IS, PR>
where
    CR: CommandRunner,
    ENV: EnvironmentProvider,
    IR: IdentityRepository,
    IS: IngestService,
    PR: ProgressReporter,
{
    pub fn new(
        command_runner: &'a CR,
        environment: &'a ENV,
        identity_repository: &'a IR,
        ingest_service: &'a IS,
        progress_reporter: &'a PR,
    ) -> Self {
        Self {
            metadata_collector: CollectMetadataUseCase::new(
                command_runner,
                environment,
                identity_repository,
                progress_reporter,
            ),
            ingest_service,
            progress_reporter,
        }
    }

    /// Posts the SBOM at `sbom_path` to `endpoint_url`
    ///
    /// # Returns
    /// The response status, or [`UploadResult::Error`] when no response was
    /// received. Never fails.
    pub async fn execute(
        &self,
        sbom_path: &Path,
        endpoint_url: &str,
        auth_token: &str,
        track_release: bool,
    ) -> UploadResult {
        self.progress_reporter
            .report(&format!("📤 Posting SBOM to {}...", endpoint_url));

        match self
            .post(sbom_path, endpoint_url, auth_token, track_release)
            .await
        {
            Ok(status) => {
                let result = UploadResult::Status(status);
                if result.is_success() {
                    self.progress_reporter.report(&format!(
                        "✅ SBOM posted successfully! Status: {}",
                        result
                    ));
                } else {
                    self.progress_reporter.report_warning(&format!(
                        "⚠️  SBOM endpoint responded with status {}",
                        result
                    ));
                    self.progress_reporter
                        .report_warning("Continuing with workflow execution...");
                }
                result
            }
            Err(e) => {
                self.progress_reporter
                    .report_warning(&format!("⚠️  Failed to POST SBOM to endpoint: {:#}", e));
                self.progress_reporter
                    .report_warning("Continuing with workflow execution...");
                UploadResult::Error
            }
        }
    }

    async fn post(
        &self,
        sbom_path: &Path,
        endpoint_url: &str,
        auth_token: &str,
        track_release: bool,
    ) -> Result<u16> {
        let metadata = self.metadata_collector.execute(track_release).await;
        self.report_metadata(&metadata);

        let content = security::read_regular_file(sbom_path, "SBOM")?;
        let file_name = sbom_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| FALLBACK_FILE_NAME.to_string());
        let submission = SbomSubmission::new(file_name, content, &metadata, track_release);

        self.ingest_service
            .submit_sbom(endpoint_url, auth_token, &submission)
            .await
    }

    fn report_metadata(&self, metadata: &RunMetadata) {
        let reporter = self.progress_reporter;
        reporter.report(&format!("Git commit: {}", metadata.commit_sha));
        reporter.report(&format!("Git branch: {}", metadata.ref_branch));
        reporter.report(&format!("Release ID: {}", metadata.ext_release_id));
        reporter.report(&format!(
            "Repository: {}/{}",
            metadata.organization_name, metadata.repository_name
        ));
        reporter.report(&format!("Repository ID: {}", metadata.repository_id));
        reporter.report(&format!("Repository Node ID: {}", metadata.repository_node_id));
        reporter.report(&format!("Organization ID: {}", metadata.organization_id));
        reporter.report(&format!(
            "Organization Node ID: {}",
            metadata.organization_node_id
        ));
    }
}
