use crate::shared::error::ActionError;
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Maximum size of an SBOM document accepted for upload (100 MB)
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Validates that a path is not a symbolic link
///
/// # Security
/// This function uses `symlink_metadata()` instead of `metadata()` to ensure
/// we check the symlink itself, not the target it points to.
///
/// # Arguments
/// * `path` - The path to validate
/// * `operation` - Description of the operation (e.g., "read", "archive") for error messages
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read metadata for {} operation on {}: {}",
            operation,
            path.display(),
            e
        )
    })?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, {} operations on symbolic links are not allowed.",
            path.display(),
            operation
        );
    }

    Ok(())
}

/// Validates that a path exists and is a regular file (not a directory or symlink)
///
/// # Errors
/// Returns an error if:
/// - The path doesn't exist
/// - The path is a symbolic link
/// - The path is not a regular file
pub fn validate_regular_file(path: &Path, file_description: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e))?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    Ok(())
}

/// Validates file size is within acceptable limits
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}

/// Reads a regular file fully into memory after the symlink and size checks.
///
/// The bytes are returned untouched; SBOM documents are never decoded.
pub fn read_regular_file(path: &Path, file_description: &str) -> Result<Vec<u8>> {
    validate_regular_file(path, file_description)?;

    let metadata = fs::metadata(path).map_err(|e| ActionError::FileReadError {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;
    validate_file_size(metadata.len(), path, MAX_FILE_SIZE)?;

    let bytes = fs::read(path).map_err(|e| ActionError::FileReadError {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;
    Ok(bytes)
}

/// Returns the form of `path` relative to `root`.
///
/// Both arguments are resolved from the process working directory, so
/// `path` is expected to already include `root` (as `root.join(name)` does).
/// Rejects files that resolve outside of `root`, so archives never carry
/// `..` entries or absolute paths.
pub fn relative_to_root(path: &Path, root: &Path) -> Result<PathBuf> {
    let canonical_root = root.canonicalize().map_err(|e| ActionError::FileReadError {
        path: root.to_path_buf(),
        details: format!("Failed to canonicalize root directory: {}", e),
    })?;
    let canonical_path = path.canonicalize().map_err(|e| ActionError::FileReadError {
        path: path.to_path_buf(),
        details: format!("Failed to canonicalize path: {}", e),
    })?;

    canonical_path
        .strip_prefix(&canonical_root)
        .map(Path::to_path_buf)
        .map_err(|_| {
            ActionError::SecurityError {
                path: path.to_path_buf(),
                reason: format!("File is outside of the root directory {}", root.display()),
                hint: "Only files inside the working directory can be published".to_string(),
            }
            .into()
        })
}
