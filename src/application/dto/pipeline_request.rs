use crate::config::ActionConfig;
use crate::shared::error::ActionError;
use crate::shared::Result;
use std::path::PathBuf;

/// PipelineRequest - Internal request DTO for a full pipeline run
#[derive(Debug, Clone)]
pub struct PipelineRequest {
    /// Repository checkout the scanner runs against
    pub working_dir: PathBuf,
    /// SBOM output path, relative to `working_dir`
    pub sbom_path: PathBuf,
    /// Multipart upload endpoint
    pub endpoint_url: String,
    /// Bearer token for the ingestion service
    pub auth_token: String,
    /// Scanner version or `latest`
    pub tool_version: String,
    /// Whether to publish the SBOM as a workflow artifact
    pub publish_artifact: bool,
    /// Artifact name used when publishing
    pub artifact_name: String,
    /// Whether to resolve and send the release tag
    pub track_release: bool,
    /// Pre-flight token validation endpoint; validation is skipped when `None`
    pub validation_endpoint: Option<String>,
}

impl PipelineRequest {
    /// Creates a builder seeded with the defaults of `config`
    pub fn builder(config: &ActionConfig) -> PipelineRequestBuilder {
        PipelineRequestBuilder {
            working_dir: PathBuf::from("."),
            sbom_path: config.sbom_path.clone(),
            endpoint_url: config.endpoint_url.clone(),
            auth_token: None,
            tool_version: config.trivy_version.clone(),
            publish_artifact: false,
            artifact_name: config.artifact_name.clone(),
            track_release: false,
            validation_endpoint: config.validation_endpoint.clone(),
        }
    }
}

/// Builder for [`PipelineRequest`]
#[derive(Debug, Clone)]
pub struct PipelineRequestBuilder {
    working_dir: PathBuf,
    sbom_path: PathBuf,
    endpoint_url: String,
    auth_token: Option<String>,
    tool_version: String,
    publish_artifact: bool,
    artifact_name: String,
    track_release: bool,
    validation_endpoint: Option<String>,
}

impl PipelineRequestBuilder {
    pub fn working_dir(mut self, working_dir: impl Into<PathBuf>) -> Self {
        self.working_dir = working_dir.into();
        self
    }

    pub fn auth_token(mut self, auth_token: impl Into<String>) -> Self {
        self.auth_token = Some(auth_token.into());
        self
    }

    pub fn endpoint_url(mut self, endpoint_url: impl Into<String>) -> Self {
        self.endpoint_url = endpoint_url.into();
        self
    }

    pub fn tool_version(mut self, tool_version: impl Into<String>) -> Self {
        self.tool_version = tool_version.into();
        self
    }

    pub fn publish_artifact(mut self, publish_artifact: bool) -> Self {
        self.publish_artifact = publish_artifact;
        self
    }

    pub fn track_release(mut self, track_release: bool) -> Self {
        self.track_release = track_release;
        self
    }

    pub fn validation_endpoint(mut self, validation_endpoint: Option<String>) -> Self {
        if validation_endpoint.is_some() {
            self.validation_endpoint = validation_endpoint;
        }
        self
    }

    pub fn build(self) -> Result<PipelineRequest> {
        let auth_token = self
            .auth_token
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| ActionError::Validation {
                message: "An SRM token is required".to_string(),
            })?;

        if self.endpoint_url.trim().is_empty() {
            return Err(ActionError::Validation {
                message: "Endpoint URL must not be empty".to_string(),
            }
            .into());
        }

        let tool_version = if self.tool_version.trim().is_empty() {
            crate::sbom_publishing::domain::ToolRelease::LATEST.to_string()
        } else {
            self.tool_version.trim().to_string()
        };

        Ok(PipelineRequest {
            working_dir: self.working_dir,
            sbom_path: self.sbom_path,
            endpoint_url: self.endpoint_url,
            auth_token,
            tool_version,
            publish_artifact: self.publish_artifact,
            artifact_name: self.artifact_name,
            track_release: self.track_release,
            validation_endpoint: self.validation_endpoint,
        })
    }
}
