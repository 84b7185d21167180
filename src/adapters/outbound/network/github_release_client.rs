use crate::ports::outbound::ToolDistribution;
use crate::shared::error::ActionError;
use crate::shared::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
struct LatestRelease {
    #[serde(default)]
    tag_name: String,
}

/// GithubReleaseClient adapter for Trivy release metadata and archives
///
/// No request timeout is configured; archives are streamed to disk in chunks.
pub struct GithubReleaseClient {
    client: reqwest::Client,
    api_url: String,
    download_dir: PathBuf,
    token: Option<String>,
}

impl GithubReleaseClient {
    const REPOSITORY: &'static str = "aquasecurity/trivy";

    /// Creates a release client
    ///
    /// # Arguments
    /// * `api_url` - GitHub REST API base URL
    /// * `download_dir` - Directory receiving downloaded archives
    /// * `token` - Optional token, used only for the metadata request
    pub fn new(
        api_url: impl Into<String>,
        download_dir: impl Into<PathBuf>,
        token: Option<String>,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(super::user_agent())
            .build()?;

        Ok(Self {
            client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            download_dir: download_dir.into(),
            token,
        })
    }
}

#[async_trait]
impl ToolDistribution for GithubReleaseClient {
    async fn latest_version(&self) -> Result<String> {
        let url = format!("{}/repos/{}/releases/latest", self.api_url, Self::REPOSITORY);
        let mut request = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/vnd.github+json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            anyhow::bail!(
                "GitHub releases API returned status code {}",
                response.status()
            );
        }

        let release: LatestRelease = response.json().await?;
        Ok(release.tag_name)
    }

    async fn download(
        &self,
        url: &str,
        progress: &(dyn Fn(u64, Option<u64>) + Sync),
    ) -> Result<PathBuf> {
        let mut response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            anyhow::bail!(
                "Unexpected HTTP response {} while downloading {}",
                response.status(),
                url
            );
        }

        fs::create_dir_all(&self.download_dir).map_err(|e| ActionError::FileWriteError {
            path: self.download_dir.clone(),
            details: e.to_string(),
        })?;
        let destination = self.download_dir.join(uuid::Uuid::new_v4().to_string());
        let mut file = File::create(&destination).map_err(|e| ActionError::FileWriteError {
            path: destination.clone(),
            details: e.to_string(),
        })?;

        let total = response.content_length();
        let mut received: u64 = 0;
        progress(received, total);

        let streamed: Result<()> = async {
            while let Some(chunk) = response.chunk().await? {
                file.write_all(&chunk)
                    .map_err(|e| ActionError::FileWriteError {
                        path: destination.clone(),
                        details: e.to_string(),
                    })?;
                received += chunk.len() as u64;
                progress(received, total);
            }
            file.flush()?;
            Ok(())
        }
        .await;

        if let Err(e) = streamed {
            drop(file);
            let _ = fs::remove_file(&destination);
            return Err(e);
        }

        Ok(destination)
    }
}
