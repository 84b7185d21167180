use crate::ports::outbound::ArtifactStore;
use crate::sbom_publishing::domain::{ArtifactHandle, ArtifactName};
use crate::shared::security::{read_regular_file, relative_to_root, validate_not_symlink};
use crate::shared::Result;
use async_trait::async_trait;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;
use zip::CompressionMethod;

const ARTIFACT_SERVICE: &str = "twirp/github.actions.results.api.v1.ArtifactService";
const ARTIFACT_VERSION: u32 = 4;

#[derive(Debug, Deserialize)]
struct RuntimeTokenClaims {
    #[serde(default)]
    scp: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct BackendIds {
    workflow_run_backend_id: String,
    workflow_job_run_backend_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateArtifactRequest<'a> {
    workflow_run_backend_id: &'a str,
    workflow_job_run_backend_id: &'a str,
    name: &'a str,
    version: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateArtifactResponse {
    #[serde(default)]
    ok: bool,
    #[serde(default)]
    signed_upload_url: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FinalizeArtifactRequest<'a> {
    workflow_run_backend_id: &'a str,
    workflow_job_run_backend_id: &'a str,
    name: &'a str,
    size: String,
    hash: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FinalizeArtifactResponse {
    #[serde(default)]
    ok: bool,
    #[serde(default)]
    artifact_id: serde_json::Value,
}

/// Extracts the run and job backend ids from the runtime token
///
/// The token is a JWT whose `scp` claim holds space separated scopes; the
/// one of interest looks like `Actions.Results:<runId>:<jobId>`.
fn backend_ids_from_token(token: &str) -> Result<BackendIds> {
    let payload = token
        .split('.')
        .nth(1)
        .ok_or_else(|| anyhow::anyhow!("Runtime token is not a JWT"))?;
    let decoded = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('='))?;
    let claims: RuntimeTokenClaims = serde_json::from_slice(&decoded)?;

    for scope in claims.scp.split_whitespace() {
        let parts: Vec<&str> = scope.split(':').collect();
        if parts.len() == 3 && parts[0] == "Actions.Results" {
            return Ok(BackendIds {
                workflow_run_backend_id: parts[1].to_string(),
                workflow_job_run_backend_id: parts[2].to_string(),
            });
        }
    }
    anyhow::bail!("Failed to get backend ids from the runtime token")
}

/// Zips `files` with entry names relative to `root`
fn build_archive(files: &[PathBuf], root: &Path) -> Result<Vec<u8>> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for file in files {
        validate_not_symlink(file, "artifact file")?;
        let relative = relative_to_root(file, root)?;
        let entry_name = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join("/");
        let content = read_regular_file(&root.join(&relative), "artifact file")?;

        writer.start_file(entry_name, options)?;
        writer.write_all(&content)?;
    }

    Ok(writer.finish()?.into_inner())
}

fn render_artifact_id(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// GithubArtifactStore adapter for the Actions artifact service
///
/// Speaks the v4 artifact protocol: create the artifact, upload the zipped
/// files to the returned signed blob URL, then finalize with size and hash.
/// Only usable inside a workflow run, where `ACTIONS_RUNTIME_TOKEN` and
/// `ACTIONS_RESULTS_URL` are provided.
pub struct GithubArtifactStore {
    client: reqwest::Client,
    results_url: Option<String>,
    runtime_token: Option<String>,
}

impl GithubArtifactStore {
    pub fn new(results_url: Option<String>, runtime_token: Option<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(super::user_agent())
            .build()?;

        Ok(Self {
            client,
            results_url: results_url.map(|url| url.trim_end_matches('/').to_string()),
            runtime_token,
        })
    }

    async fn call_service<Req, Resp>(
        &self,
        results_url: &str,
        token: &str,
        method: &str,
        request: &Req,
    ) -> Result<Resp>
    where
        Req: Serialize + Sync,
        Resp: serde::de::DeserializeOwned + Send,
    {
        let url = format!("{}/{}/{}", results_url, ARTIFACT_SERVICE, method);
        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("{} failed with status {}: {}", method, status, body);
        }
        Ok(response.json().await?)
    }

    async fn upload_blob(&self, signed_url: &str, archive: Vec<u8>) -> Result<()> {
        let response = self
            .client
            .put(signed_url)
            .header("x-ms-blob-type", "BlockBlob")
            .header(reqwest::header::CONTENT_TYPE, "application/zip")
            .body(archive)
            .send()
            .await?;

        if !response.status().is_success() {
            anyhow::bail!("Artifact blob upload failed with status {}", response.status());
        }
        Ok(())
    }
}

#[async_trait]
impl ArtifactStore for GithubArtifactStore {
    async fn upload_artifact(
        &self,
        name: &ArtifactName,
        files: &[PathBuf],
        root: &Path,
    ) -> Result<ArtifactHandle> {
        let results_url = self
            .results_url
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("ACTIONS_RESULTS_URL is not set"))?;
        let token = self
            .runtime_token
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("ACTIONS_RUNTIME_TOKEN is not set"))?;
        let ids = backend_ids_from_token(token)?;

        let archive = build_archive(files, root)?;
        let size = archive.len() as u64;
        let hash = format!("sha256:{}", hex::encode(Sha256::digest(&archive)));

        let created: CreateArtifactResponse = self
            .call_service(
                results_url,
                token,
                "CreateArtifact",
                &CreateArtifactRequest {
                    workflow_run_backend_id: &ids.workflow_run_backend_id,
                    workflow_job_run_backend_id: &ids.workflow_job_run_backend_id,
                    name: name.as_str(),
                    version: ARTIFACT_VERSION,
                },
            )
            .await?;
        if !created.ok || created.signed_upload_url.is_empty() {
            anyhow::bail!("CreateArtifact: response from backend was not ok");
        }

        self.upload_blob(&created.signed_upload_url, archive).await?;

        let finalized: FinalizeArtifactResponse = self
            .call_service(
                results_url,
                token,
                "FinalizeArtifact",
                &FinalizeArtifactRequest {
                    workflow_run_backend_id: &ids.workflow_run_backend_id,
                    workflow_job_run_backend_id: &ids.workflow_job_run_backend_id,
                    name: name.as_str(),
                    size: size.to_string(),
                    hash,
                },
            )
            .await?;
        if !finalized.ok {
            anyhow::bail!("FinalizeArtifact: response from backend was not ok");
        }
        let artifact_id = render_artifact_id(&finalized.artifact_id)
            .ok_or_else(|| anyhow::anyhow!("FinalizeArtifact: response carried no artifact id"))?;

        Ok(ArtifactHandle::new(artifact_id, size))
    }
}
