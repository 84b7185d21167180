use crate::application::dto::{PipelineRequest, PipelineResponse};
use crate::application::use_cases::{
    GenerateSbomUseCase, PostSbomUseCase, ProvisionToolUseCase, PublishArtifactUseCase,
    ValidateTokenUseCase,
};
use crate::ports::outbound::{
    ArtifactStore, CommandRunner, EnvironmentProvider, IdentityRepository, IngestService,
    ProgressReporter, ToolCache, ToolDistribution, WorkflowCommands,
};
use crate::sbom_publishing::domain::Platform;
use crate::shared::Result;


/// Step output carrying the SBOM path
pub const OUTPUT_SBOM_PATH: &str = "sbom-path";
/// Step output carrying the upload status
pub const OUTPUT_RESPONSE_STATUS: &str = "response-status";
/// Step output carrying the artifact id
pub const OUTPUT_ARTIFACT_ID: &str = "artifact-id";

/// RunPipelineUseCase - the complete SBOM step
///
/// Runs, strictly in order: optional token validation, scanner provisioning,
/// SBOM generation, upload, optional artifact publishing. Validation,
/// provisioning and generation are fatal; upload and publishing only warn.
///
/// # Type Parameters
/// * `CR` - CommandRunner implementation
/// * `ENV` - EnvironmentProvider implementation
/// * `IR` - IdentityRepository implementation
/// * `IS` - IngestService implementation
/// * `TD` - ToolDistribution implementation
/// * `TC` - ToolCache implementation
/// * `AS` - ArtifactStore implementation
/// * `WC` - WorkflowCommands implementation
/// * `PR` - ProgressReporter implementation
pub struct RunPipelineUseCase<CR, ENV, IR, IS, TD, TC, AS, WC, PR> {
    command_runner: CR,
    environment: ENV,
    identity_repository: IR,
    ingest_service: IS,
    tool_distribution: TD,
    tool_cache: TC,
    artifact_store: AS,
    workflow_commands: WC,
    progress_reporter: PR,
    platform: Platform,
}

impl<CR, ENV, IR, IS, TD, TC, AS, WC, PR> RunPipelineUseCase<CR, ENV, IR, IS, TD, TC, AS, WC, PR>
where
    CR: CommandRunner,
    ENV: EnvironmentProvider,
    IR: IdentityRepository,
    IS: IngestService,
    TD: ToolDistribution,
    TC: ToolCache,
    AS: ArtifactStore,
    WC: WorkflowCommands,
    PR: ProgressReporter,
{
    /// Creates a new RunPipelineUseCase with injected dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        command_runner: CR,
        environment: ENV,
        identity_repository: IR,
        ingest_service: IS,
        tool_distribution: TD,
        tool_cache: TC,
        artifact_store: AS,
        workflow_commands: WC,
        progress_reporter: PR,
    ) -> Self {
        Self {
            command_runner,
            environment,
            identity_repository,
            ingest_service,
            tool_distribution,
            tool_cache,
            artifact_store,
            workflow_commands,
            progress_reporter,
            platform: Platform::detect(),
        }
    }

    /// Overrides the detected runner platform
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Executes the pipeline
    ///
    /// # Errors
    /// Returns an error when token validation, provisioning, generation or
    /// writing a step output fails
    pub async fn execute(&self, request: PipelineRequest) -> Result<PipelineResponse> {
        // Step 1: Pre-flight token validation
        if let Some(validation_endpoint) = request.validation_endpoint.as_deref() {
            ValidateTokenUseCase::new(&self.ingest_service, &self.progress_reporter)
                .execute(&request.auth_token, validation_endpoint)
                .await?;
        }

        // Step 2: Provision the scanner
        self.progress_reporter.report("🔍 Installing Trivy...");
        let scanner = ProvisionToolUseCase::new(
            &self.tool_distribution,
            &self.tool_cache,
            &self.workflow_commands,
            &self.progress_reporter,
            self.platform,
        )
        .execute(&request.tool_version)
        .await?;

        // Step 3: Generate the SBOM
        let generated = GenerateSbomUseCase::new(&self.command_runner, &self.progress_reporter)
            .execute(&scanner, &request.sbom_path, &request.working_dir)
            .await?;
        self.workflow_commands
            .set_output(OUTPUT_SBOM_PATH, &request.sbom_path.to_string_lossy())?;

        // Step 4: Upload with metadata (advisory)
        let upload_result = PostSbomUseCase::new(
            &self.command_runner,
            &self.environment,
            &self.identity_repository,
            &self.ingest_service,
            &self.progress_reporter,
        )
        .execute(
            &generated,
            &request.endpoint_url,
            &request.auth_token,
            request.track_release,
        )
        .await;

        // Step 5: Publish as artifact (advisory)
        let artifact = if request.publish_artifact {
            PublishArtifactUseCase::new(&self.artifact_store, &self.progress_reporter)
                .execute(&generated, &request.artifact_name, &request.working_dir)
                .await
        } else {
            None
        };

        if let Some(handle) = &artifact {
            self.workflow_commands
                .set_output(OUTPUT_ARTIFACT_ID, handle.id())?;
        }
        self.workflow_commands
            .set_output(OUTPUT_RESPONSE_STATUS, &upload_result.to_string())?;

        self.progress_reporter
            .report_completion("✅ SBOM step completed");

        Ok(PipelineResponse::new(
            request.sbom_path,
            upload_result,
            artifact,
        ))
    }
}
