use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between argument mistakes
/// in the workflow file and failures of the step itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the SBOM was generated (upload and artifact outcomes are advisory)
    Success = 0,
    /// A fatal step failed (provisioning, generation, token validation, ...)
    Failure = 1,
    /// Invalid command-line arguments or inputs (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::Failure => write!(f, "Failure (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Fatal errors raised by the pipeline.
///
/// Best-effort steps never surface these; they map their failures to
/// sentinels at the call site instead.
#[derive(Debug, Error)]
pub enum ActionError {
    #[error("Invalid working directory: {path}\nReason: {reason}\n\n💡 Hint: Please specify the repository checkout directory")]
    InvalidWorkingDirectory { path: PathBuf, reason: String },

    #[error("Failed to provision {tool} {version}\nDetails: {details}\n\n💡 Hint: Check network access to github.com or pin a specific version with --trivy-version")]
    ToolProvisioning {
        tool: String,
        version: String,
        details: String,
    },

    #[error("SBOM generation failed: {path}\nDetails: {details}\n\n💡 Hint: Run the scanner locally to inspect its output")]
    SbomGeneration { path: PathBuf, details: String },

    #[error("Token validation failed with status {status}: {body}")]
    TokenValidation { status: String, body: String },

    #[error("Invalid artifact name: {name}\nReason: {reason}")]
    InvalidArtifactName { name: String, reason: String },

    /// Validation error for configuration values
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
