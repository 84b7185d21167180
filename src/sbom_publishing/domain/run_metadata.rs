/// Sentinel recorded for any metadata field that could not be resolved
pub const NOT_AVAILABLE: &str = "NA";

/// RunMetadata - repository and revision facts sent alongside the SBOM
///
/// Every field is resolved independently; a field that could not be
/// collected holds [`NOT_AVAILABLE`] without affecting the others.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunMetadata {
    pub commit_sha: String,
    pub ref_branch: String,
    pub ext_release_id: String,
    pub repository_name: String,
    pub organization_name: String,
    pub repository_id: String,
    pub repository_node_id: String,
    pub organization_id: String,
    pub organization_node_id: String,
}

impl RunMetadata {
    /// Metadata with every field set to the sentinel
    pub fn unavailable() -> Self {
        Self {
            commit_sha: NOT_AVAILABLE.to_string(),
            ref_branch: NOT_AVAILABLE.to_string(),
            ext_release_id: NOT_AVAILABLE.to_string(),
            repository_name: NOT_AVAILABLE.to_string(),
            organization_name: NOT_AVAILABLE.to_string(),
            repository_id: NOT_AVAILABLE.to_string(),
            repository_node_id: NOT_AVAILABLE.to_string(),
            organization_id: NOT_AVAILABLE.to_string(),
            organization_node_id: NOT_AVAILABLE.to_string(),
        }
    }

    /// Form field names and values, in submission order
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("commit_sha", self.commit_sha.clone()),
            ("ref_branch", self.ref_branch.clone()),
            ("ext_release_id", self.ext_release_id.clone()),
            ("repository_name", self.repository_name.clone()),
            ("organization_name", self.organization_name.clone()),
            ("repository_id", self.repository_id.clone()),
            ("organization_id", self.organization_id.clone()),
            ("repository_node_id", self.repository_node_id.clone()),
            ("organization_node_id", self.organization_node_id.clone()),
        ]
    }
}

impl Default for RunMetadata {
    fn default() -> Self {
        Self::unavailable()
    }
}
