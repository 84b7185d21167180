use crate::ports::outbound::{IngestService, ProgressReporter};
use crate::sbom_publishing::domain::ValidationResponse;
use crate::shared::error::ActionError;
use crate::shared::Result;

/// ValidateTokenUseCase - pre-flight check of the ingestion token
///
/// Unlike the upload, a rejected token is fatal for the run.
pub struct ValidateTokenUseCase<'a, IS, PR> {
    ingest_service: &'a IS,
    progress_reporter: &'a PR,
}

impl<'a, IS, PR> ValidateTokenUseCase<'a, IS, PR>
where
    IS: IngestService,
    PR: ProgressReporter,
{
    pub fn new(ingest_service: &'a IS, progress_reporter: &'a PR) -> Self {
        Self {
            ingest_service,
            progress_reporter,
        }
    }

    /// Validates `api_key` against `validation_endpoint`
    ///
    /// # Returns
    /// `true` when the endpoint answers 200
    ///
    /// # Errors
    /// Returns [`ActionError::TokenValidation`] for any other status, or the
    /// transport error when the endpoint cannot be reached
    pub async fn execute(&self, api_key: &str, validation_endpoint: &str) -> Result<bool> {
        self.progress_reporter.report("🔐 Validating API token...");

        let outcome = self.validate(api_key, validation_endpoint).await;
        match &outcome {
            Ok(_) => self
                .progress_reporter
                .report("✅ Token validation successful"),
            Err(e) => self
                .progress_reporter
                .report_error(&format!("❌ Token validation failed: {:#}", e)),
        }
        outcome
    }

    async fn validate(&self, api_key: &str, validation_endpoint: &str) -> Result<bool> {
        let combined = self
            .ingest_service
            .validate_token(validation_endpoint, api_key)
            .await?;
        let response = ValidationResponse::parse(&combined);

        if response.is_accepted() {
            Ok(true)
        } else {
            Err(ActionError::TokenValidation {
                status: response.status().to_string(),
                body: response.body().to_string(),
            }
            .into())
        }
    }
}
