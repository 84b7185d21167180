use std::sync::{Arc, Mutex};
use srm_sbom::prelude::*;

/// Mock IngestService for testing
///
/// `upload_status: None` simulates an unreachable endpoint.
#[derive(Clone)]
pub struct MockIngestService {
    pub upload_status: Option<u16>,
    pub validation_stream: String,
    pub submissions: Arc<Mutex<Vec<SbomSubmission>>>,
    pub validations: Arc<Mutex<Vec<String>>>,
}

impl MockIngestService {
    pub fn responding(status: u16) -> Self {
        Self {
            upload_status: Some(status),
            validation_stream: r#"{"valid":true}200"#.to_string(),
            submissions: Arc::new(Mutex::new(Vec::new())),
            validations: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn unreachable() -> Self {
        Self {
            upload_status: None,
            ..Self::responding(0)
        }
    }

    pub fn with_validation(mut self, stream: &str) -> Self {
        self.validation_stream = stream.to_string();
        self
    }

    pub fn get_submissions(&self) -> Vec<SbomSubmission> {
        self.submissions.lock().unwrap().clone()
    }

    pub fn validation_count(&self) -> usize {
        self.validations.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl IngestService for MockIngestService {
    async fn submit_sbom(
        &self,
        _endpoint_url: &str,
        _auth_token: &str,
        submission: &SbomSubmission,
    ) -> Result<u16> {
        self.submissions.lock().unwrap().push(submission.clone());
        match self.upload_status {
            Some(status) => Ok(status),
            None => anyhow::bail!("error sending request: connection refused"),
        }
    }

    async fn validate_token(&self, _validation_endpoint: &str, api_key: &str) -> Result<String> {
        self.validations.lock().unwrap().push(api_key.to_string());
        Ok(self.validation_stream.clone())
    }
}
