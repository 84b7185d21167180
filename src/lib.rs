//! srm-sbom - SBOM generation and upload step for CI workflows
//!
//! This library installs Trivy, generates a CycloneDX SBOM for a checked-out
//! repository, enriches it with repository and commit metadata and uploads
//! it to an SRM ingestion endpoint, following hexagonal architecture.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`sbom_publishing`): Value types of the run (metadata, releases, artifacts)
//! - **Application Layer** (`application`): Use cases and the pipeline orchestration
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use srm_sbom::prelude::*;
//!
//! # async fn run() -> Result<()> {
//! let environment = ProcessEnvironment::new();
//! let context = RunnerContext::from_env(&environment);
//! let platform = Platform::detect();
//!
//! let use_case = RunPipelineUseCase::new(
//!     SystemCommandRunner::new("."),
//!     environment,
//!     GithubIdentityClient::new(context.api_url.as_str())?,
//!     IngestClient::new()?,
//!     GithubReleaseClient::new(context.api_url.as_str(), context.temp_dir.clone(), None)?,
//!     RunnerToolCache::new(context.tool_cache_dir.clone(), context.temp_dir.clone(), platform.arch()),
//!     GithubArtifactStore::new(context.results_url.clone(), context.runtime_token.clone())?,
//!     GithubWorkflowFiles::new(context.output_file.clone(), context.path_file.clone()),
//!     ConsoleProgressReporter::new(context.github_actions),
//! );
//!
//! let request = PipelineRequest::builder(&ActionConfig::default())
//!     .auth_token("srm-token")
//!     .build()?;
//! let response = use_case.execute(request).await?;
//! println!("{}", response.upload_result);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod sbom_publishing;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::ConsoleProgressReporter;
    pub use crate::adapters::outbound::environment::ProcessEnvironment;
    pub use crate::adapters::outbound::filesystem::{GithubWorkflowFiles, RunnerToolCache};
    pub use crate::adapters::outbound::network::{
        GithubArtifactStore, GithubIdentityClient, GithubReleaseClient, IngestClient,
    };
    pub use crate::adapters::outbound::process::SystemCommandRunner;
    pub use crate::application::dto::{PipelineRequest, PipelineResponse};
    pub use crate::application::use_cases::{
        CollectMetadataUseCase, GenerateSbomUseCase, PostSbomUseCase, ProvisionToolUseCase,
        PublishArtifactUseCase, RunPipelineUseCase, ValidateTokenUseCase,
    };
    pub use crate::config::{ActionConfig, RunnerContext};
    pub use crate::ports::outbound::{
        ArtifactStore, CommandOutput, CommandRunner, EnvironmentProvider, IdentityRepository,
        IngestService, ProgressReporter, ToolCache, ToolDistribution, WorkflowCommands,
    };
    pub use crate::sbom_publishing::domain::{
        ArtifactHandle, ArtifactName, IdentityRecord, Platform, RepositorySlug, RunMetadata,
        SbomSubmission, ToolRelease, UploadResult, NOT_AVAILABLE,
    };
    pub use crate::shared::Result;
}
