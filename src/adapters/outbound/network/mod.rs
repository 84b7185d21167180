/// Network adapters for external HTTP APIs
mod artifact_client;
mod github_identity_client;
mod github_release_client;
mod ingest_client;

pub use artifact_client::GithubArtifactStore;
pub use github_identity_client::GithubIdentityClient;
pub use github_release_client::GithubReleaseClient;
pub use ingest_client::IngestClient;

/// User agent sent with every request
fn user_agent() -> String {
    format!("srm-sbom/{}", env!("CARGO_PKG_VERSION"))
}

/// Header that suppresses the ngrok interstitial page on tunnelled endpoints
const NGROK_SKIP_BROWSER_WARNING: &str = "ngrok-skip-browser-warning";
