use crate::ports::outbound::{ProgressReporter, ToolCache, ToolDistribution, WorkflowCommands};
use crate::sbom_publishing::domain::{Platform, ToolRelease};
use crate::shared::error::ActionError;
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// ProvisionToolUseCase - makes the scanner executable available
///
/// Looks the requested version up in the tool cache first; only on a miss
/// is the release resolved, downloaded, extracted and cached. Any failure
/// on the download path is fatal.
pub struct ProvisionToolUseCase<'a, TD, TC, WC, PR> {
    tool_distribution: &'a TD,
    tool_cache: &'a TC,
    workflow_commands: &'a WC,
    progress_reporter: &'a PR,
    platform: Platform,
}

impl<'a, TD, TC, WC, PR> ProvisionToolUseCase<'a, TD, TC, WC, PR>
where
    TD: ToolDistribution,
    TC: ToolCache,
    WC: WorkflowCommands,
    PR: ProgressReporter,
{
    pub fn new(
        tool_distribution: &'a TD,
        tool_cache: &'a TC,
        workflow_commands: &'a WC,
        progress_reporter: &'a PR,
        platform: Platform,
    ) -> Self {
        Self {
            tool_distribution,
            tool_cache,
            workflow_commands,
            progress_reporter,
            platform,
        }
    }

    /// Returns the path of the scanner executable for `version`
    ///
    /// # Arguments
    /// * `version` - A release version (`0.58.1`, `v0.58.1`) or `latest`
    pub async fn execute(&self, version: &str) -> Result<PathBuf> {
        let tool = ToolRelease::TOOL_NAME;

        if let Some(cached) = self.tool_cache.find(tool, version) {
            return self.use_cached(&cached);
        }

        self.provision(version).await.map_err(|e| {
            ActionError::ToolProvisioning {
                tool: tool.to_string(),
                version: version.to_string(),
                details: format!("{:#}", e),
            }
            .into()
        })
    }

    async fn provision(&self, version: &str) -> Result<PathBuf> {
        let tool = ToolRelease::TOOL_NAME;
        self.progress_reporter.report("📥 Downloading Trivy...");

        let release = self.resolve_release(version).await?;
        if release.version() != version {
            if let Some(cached) = self.tool_cache.find(tool, release.version()) {
                return self.use_cached(&cached);
            }
        }

        let url = release.download_url(self.platform);
        self.progress_reporter
            .report(&format!("Downloading from: {}", url));

        let reporter = self.progress_reporter;
        let on_progress = move |received: u64, total: Option<u64>| {
            reporter.report_progress(received, total, Some("trivy"));
        };
        let archive = self.tool_distribution.download(&url, &on_progress).await?;
        self.progress_reporter
            .report_completion(&format!("✅ Downloaded {}", archive.display()));

        let installed = self.install(&archive, release.version());
        self.tool_cache.discard(&archive);
        let cached = installed?;
        self.progress_reporter
            .report(&format!("✅ Trivy cached at: {}", cached.display()));

        self.register(&cached)
    }

    /// Extracts `archive` and copies it into the cache; the scratch
    /// extraction directory is removed either way
    fn install(&self, archive: &Path, version: &str) -> Result<PathBuf> {
        let extracted = self.tool_cache.extract_tar_gz(archive)?;
        let cached = self
            .tool_cache
            .cache_dir(&extracted, ToolRelease::TOOL_NAME, version);
        self.tool_cache.discard(&extracted);
        cached
    }

    async fn resolve_release(&self, version: &str) -> Result<ToolRelease> {
        if !ToolRelease::is_latest(version) {
            return Ok(ToolRelease::new(version));
        }

        let tag = self.tool_distribution.latest_version().await?;
        let release = ToolRelease::new(tag);
        if release.version().is_empty() {
            anyhow::bail!("Release metadata did not contain a tag name");
        }
        self.progress_reporter
            .report(&format!("Resolved latest Trivy release: {}", release.version()));
        Ok(release)
    }

    fn use_cached(&self, dir: &Path) -> Result<PathBuf> {
        self.progress_reporter
            .report(&format!("✅ Using cached Trivy from: {}", dir.display()));
        self.register(dir)
    }

    fn register(&self, dir: &Path) -> Result<PathBuf> {
        self.workflow_commands.add_path(dir)?;
        Ok(dir.join(ToolRelease::TOOL_NAME))
    }
}
