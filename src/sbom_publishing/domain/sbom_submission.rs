use super::run_metadata::RunMetadata;

/// SbomSubmission - the multipart payload sent to the ingestion endpoint
///
/// Holds the SBOM bytes exactly as read from disk plus the text fields
/// that accompany them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SbomSubmission {
    file_name: String,
    content: Vec<u8>,
    fields: Vec<(String, String)>,
}

impl SbomSubmission {
    /// Form part carrying the SBOM document
    pub const FILE_FIELD: &'static str = "file";
    /// Discriminator for CycloneDX JSON documents
    pub const SBOM_TYPE: &'static str = "CDX_JSON";

    pub fn new(
        file_name: impl Into<String>,
        content: Vec<u8>,
        metadata: &RunMetadata,
        track_release: bool,
    ) -> Self {
        let mut fields: Vec<(String, String)> = metadata
            .form_fields()
            .into_iter()
            .map(|(name, value)| (name.to_string(), value))
            .collect();
        fields.push(("track_release".to_string(), track_release.to_string()));
        fields.push(("sbomType".to_string(), Self::SBOM_TYPE.to_string()));

        Self {
            file_name: file_name.into(),
            content,
            fields,
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    /// Value of a text field by name
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field_name, _)| field_name == name)
            .map(|(_, value)| value.as_str())
    }
}
