pub mod artifact;
pub mod identity_record;
pub mod platform;
pub mod repository_slug;
pub mod run_metadata;
pub mod sbom_submission;
pub mod tool_release;
pub mod upload_result;
pub mod validation_response;

pub use artifact::{ArtifactHandle, ArtifactName};
pub use identity_record::{IdentityRecord, IdentityValue};
pub use platform::{CpuArch, OsFamily, Platform};
pub use repository_slug::RepositorySlug;
pub use run_metadata::{RunMetadata, NOT_AVAILABLE};
pub use sbom_submission::SbomSubmission;
pub use tool_release::ToolRelease;
pub use upload_result::UploadResult;
pub use validation_response::ValidationResponse;
