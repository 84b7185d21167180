use crate::sbom_publishing::domain::SbomSubmission;
use crate::shared::Result;
use async_trait::async_trait;

/// IngestService port for the remote SBOM ingestion backend
#[async_trait]
pub trait IngestService: Send + Sync {
    /// Posts the SBOM submission as multipart form data
    ///
    /// # Returns
    /// The HTTP status code of the response; the body is discarded.
    ///
    /// # Errors
    /// Returns an error only when no response was received
    async fn submit_sbom(
        &self,
        endpoint_url: &str,
        auth_token: &str,
        submission: &SbomSubmission,
    ) -> Result<u16>;

    /// Posts `{"apiKey": ...}` to the validation endpoint
    ///
    /// # Returns
    /// The response body with the three-digit status code appended
    async fn validate_token(&self, validation_endpoint: &str, api_key: &str) -> Result<String>;
}
