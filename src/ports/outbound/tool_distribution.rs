use crate::shared::Result;
use async_trait::async_trait;
use std::path::PathBuf;

/// ToolDistribution port for the scanner's release channel
#[async_trait]
pub trait ToolDistribution: Send + Sync {
    /// Resolves the tag of the newest published release (e.g. `v0.58.1`)
    async fn latest_version(&self) -> Result<String>;

    /// Downloads `url` into a new temporary file
    ///
    /// # Arguments
    /// * `url` - Asset URL
    /// * `progress` - Called with (bytes received, total bytes if known)
    ///
    /// # Returns
    /// Path of the downloaded file
    async fn download(
        &self,
        url: &str,
        progress: &(dyn Fn(u64, Option<u64>) + Sync),
    ) -> Result<PathBuf>;
}
