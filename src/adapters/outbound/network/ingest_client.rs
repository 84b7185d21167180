use super::NGROK_SKIP_BROWSER_WARNING;
use crate::ports::outbound::IngestService;
use crate::sbom_publishing::domain::SbomSubmission;
use crate::shared::Result;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ValidationRequest<'a> {
    api_key: &'a str,
}

/// IngestClient adapter for the SBOM ingestion service
///
/// Uploads the document as multipart/form-data and reports back only the
/// HTTP status; response bodies of uploads are discarded.
pub struct IngestClient {
    client: reqwest::Client,
}

impl IngestClient {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(super::user_agent())
            .build()?;

        Ok(Self { client })
    }

    fn build_form(submission: &SbomSubmission) -> Result<Form> {
        let file_part = Part::bytes(submission.content().to_vec())
            .file_name(submission.file_name().to_string())
            .mime_str("application/json")?;

        let form = submission
            .fields()
            .iter()
            .fold(
                Form::new().part(SbomSubmission::FILE_FIELD, file_part),
                |form, (name, value)| form.text(name.clone(), value.clone()),
            );
        Ok(form)
    }
}

#[async_trait]
impl IngestService for IngestClient {
    async fn submit_sbom(
        &self,
        endpoint_url: &str,
        auth_token: &str,
        submission: &SbomSubmission,
    ) -> Result<u16> {
        let form = Self::build_form(submission)?;
        let response = self
            .client
            .post(endpoint_url)
            .bearer_auth(auth_token)
            .header(NGROK_SKIP_BROWSER_WARNING, "true")
            .multipart(form)
            .send()
            .await?;

        Ok(response.status().as_u16())
    }

    async fn validate_token(&self, validation_endpoint: &str, api_key: &str) -> Result<String> {
        let response = self
            .client
            .post(validation_endpoint)
            .header(NGROK_SKIP_BROWSER_WARNING, "true")
            .json(&ValidationRequest { api_key })
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(format!("{}{:03}", body, status))
    }
}
