use crate::ports::outbound::IdentityRepository;
use crate::sbom_publishing::domain::{IdentityRecord, RepositorySlug};
use crate::shared::Result;
use async_trait::async_trait;

/// GithubIdentityClient adapter for repository and owner identifiers
///
/// Reads numeric `id` and GraphQL `node_id` from the GitHub REST API.
/// Each lookup is a single request; there is no retry and no fallback
/// between authenticated and anonymous access.
pub struct GithubIdentityClient {
    client: reqwest::Client,
    api_url: String,
}

impl GithubIdentityClient {
    const ACCEPT: &'static str = "application/vnd.github+json";
    const API_VERSION: &'static str = "2022-11-28";

    /// Creates a client for the given API base URL (e.g. `https://api.github.com`)
    pub fn new(api_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(super::user_agent())
            .build()?;

        Ok(Self {
            client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
        })
    }

    async fn fetch_record(&self, url: &str, token: Option<&str>) -> Result<IdentityRecord> {
        let mut request = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, Self::ACCEPT)
            .header("X-GitHub-Api-Version", Self::API_VERSION);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            anyhow::bail!("GitHub API returned status code {}", response.status());
        }

        let record: IdentityRecord = response.json().await?;
        Ok(record)
    }
}

#[async_trait]
impl IdentityRepository for GithubIdentityClient {
    async fn fetch_repository(
        &self,
        slug: &RepositorySlug,
        token: Option<&str>,
    ) -> Result<IdentityRecord> {
        let url = format!(
            "{}/repos/{}/{}",
            self.api_url,
            urlencoding::encode(slug.owner()),
            urlencoding::encode(slug.repository())
        );
        self.fetch_record(&url, token).await
    }

    async fn fetch_owner(&self, owner: &str, token: Option<&str>) -> Result<IdentityRecord> {
        let url = format!("{}/users/{}", self.api_url, urlencoding::encode(owner));
        self.fetch_record(&url, token).await
    }
}
