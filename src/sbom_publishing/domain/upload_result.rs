use std::fmt;

/// Outcome of the SBOM upload, used only for logging and step output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadResult {
    /// The endpoint answered with this HTTP status
    Status(u16),
    /// The request could not be completed
    Error,
}

impl UploadResult {
    pub fn is_success(&self) -> bool {
        matches!(self, UploadResult::Status(code) if (200..300).contains(code))
    }
}

impl fmt::Display for UploadResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadResult::Status(code) => write!(f, "{}", code),
            UploadResult::Error => write!(f, "error"),
        }
    }
}
