//! Configuration for srm-sbom.
//!
//! [`ActionConfig`] carries the baked-in defaults of the step. An optional
//! `srm-sbom.config.yml` file can override them; command-line flags and
//! step inputs take precedence over both. [`RunnerContext`] captures the
//! runner environment the adapters are built from.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::ports::outbound::EnvironmentProvider;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "srm-sbom.config.yml";

const DEFAULT_ENDPOINT_URL: &str =
    "https://reblown-concurrently-trisha.ngrok-free.dev/api/v1/sbom/upload";
const DEFAULT_ARTIFACT_NAME: &str = "sbom-cdxgen";
const DEFAULT_SBOM_PATH: &str = "sbom-cdxgen.cyclonedx.json";
const DEFAULT_TRIVY_VERSION: &str = "latest";
const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

/// Effective settings of the step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionConfig {
    /// Multipart upload endpoint
    pub endpoint_url: String,
    /// Pre-flight validation endpoint; `None` disables validation
    pub validation_endpoint: Option<String>,
    /// Artifact name used when publishing the SBOM
    pub artifact_name: String,
    /// SBOM output path, relative to the working directory
    pub sbom_path: PathBuf,
    /// Scanner version or `latest`
    pub trivy_version: String,
}

impl Default for ActionConfig {
    fn default() -> Self {
        Self {
            endpoint_url: DEFAULT_ENDPOINT_URL.to_string(),
            validation_endpoint: None,
            artifact_name: DEFAULT_ARTIFACT_NAME.to_string(),
            sbom_path: PathBuf::from(DEFAULT_SBOM_PATH),
            trivy_version: DEFAULT_TRIVY_VERSION.to_string(),
        }
    }
}

impl ActionConfig {
    /// Applies the values present in `file` over the current settings
    pub fn merge(mut self, file: ConfigFile) -> Self {
        if let Some(endpoint_url) = file.endpoint_url {
            self.endpoint_url = endpoint_url;
        }
        if let Some(validation_endpoint) = file.validation_endpoint {
            self.validation_endpoint = Some(validation_endpoint);
        }
        if let Some(artifact_name) = file.artifact_name {
            self.artifact_name = artifact_name;
        }
        if let Some(sbom_path) = file.sbom_path {
            self.sbom_path = PathBuf::from(sbom_path);
        }
        if let Some(trivy_version) = file.trivy_version {
            self.trivy_version = trivy_version;
        }
        self
    }
}

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub endpoint_url: Option<String>,
    pub validation_endpoint: Option<String>,
    pub artifact_name: Option<String>,
    pub sbom_path: Option<String>,
    pub trivy_version: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Names of fields that are not part of the schema
    pub fn unknown_field_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.unknown_fields.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    let values = [
        ("endpoint_url", &config.endpoint_url),
        ("validation_endpoint", &config.validation_endpoint),
        ("artifact_name", &config.artifact_name),
        ("sbom_path", &config.sbom_path),
        ("trivy_version", &config.trivy_version),
    ];

    for (field, value) in values {
        if let Some(value) = value {
            if value.trim().is_empty() {
                bail!(
                    "Invalid config: {} must not be empty.\n\n\
                     💡 Hint: Remove the field to use the default value.",
                    field
                );
            }
        }
    }

    if let Some(sbom_path) = &config.sbom_path {
        if Path::new(sbom_path).is_absolute() {
            bail!(
                "Invalid config: sbom_path must be relative to the working directory (got {}).",
                sbom_path
            );
        }
    }

    Ok(())
}

/// Runner environment captured once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerContext {
    /// Whether the process runs inside GitHub Actions
    pub github_actions: bool,
    /// REST API base URL (GitHub Enterprise aware)
    pub api_url: String,
    /// Step output file
    pub output_file: Option<PathBuf>,
    /// Search path file consumed by later steps
    pub path_file: Option<PathBuf>,
    /// Root of the tool cache
    pub tool_cache_dir: PathBuf,
    /// Scratch directory for downloads and extraction
    pub temp_dir: PathBuf,
    /// Artifact service base URL
    pub results_url: Option<String>,
    /// Runtime token for the artifact service
    pub runtime_token: Option<String>,
}

impl RunnerContext {
    pub fn from_env<E: EnvironmentProvider>(env: &E) -> Self {
        let temp_dir = env
            .var("RUNNER_TEMP")
            .map(PathBuf::from)
            .unwrap_or_else(std::env::temp_dir);
        let tool_cache_dir = env
            .var("RUNNER_TOOL_CACHE")
            .map(PathBuf::from)
            .unwrap_or_else(|| temp_dir.join("srm-sbom-tool-cache"));

        Self {
            github_actions: env
                .var("GITHUB_ACTIONS")
                .is_some_and(|value| value.eq_ignore_ascii_case("true")),
            api_url: env
                .var("GITHUB_API_URL")
                .unwrap_or_else(|| DEFAULT_GITHUB_API_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            output_file: env.var("GITHUB_OUTPUT").map(PathBuf::from),
            path_file: env.var("GITHUB_PATH").map(PathBuf::from),
            tool_cache_dir,
            temp_dir,
            results_url: env.var("ACTIONS_RESULTS_URL"),
            runtime_token: env.var("ACTIONS_RUNTIME_TOKEN"),
        }
    }
}
