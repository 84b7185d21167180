use crate::shared::Result;
use std::path::{Path, PathBuf};

/// ToolCache port for versioned tool installations on the runner
pub trait ToolCache: Send + Sync {
    /// Returns the installation directory of `tool` at `version`, if cached
    fn find(&self, tool: &str, version: &str) -> Option<PathBuf>;

    /// Extracts a gzip-compressed tarball into a fresh directory
    fn extract_tar_gz(&self, archive: &Path) -> Result<PathBuf>;

    /// Copies `source` into the cache and returns the cached directory
    fn cache_dir(&self, source: &Path, tool: &str, version: &str) -> Result<PathBuf>;

    /// Removes a scratch file or directory; failures are ignored
    fn discard(&self, path: &Path);
}
