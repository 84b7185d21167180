use super::platform::Platform;

/// ToolRelease - a concrete, resolved release of the SBOM scanner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolRelease {
    version: String,
}

impl ToolRelease {
    /// Tool name used as the cache key and executable name
    pub const TOOL_NAME: &'static str = "trivy";
    /// Version spelling that requests the newest release
    pub const LATEST: &'static str = "latest";
    const DOWNLOAD_BASE: &'static str = "https://github.com/aquasecurity/trivy/releases/download";

    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: Self::normalize_tag(&version.into()),
        }
    }

    /// Strips surrounding whitespace and a leading `v` from a release tag
    pub fn normalize_tag(tag: &str) -> String {
        let trimmed = tag.trim();
        trimmed.strip_prefix('v').unwrap_or(trimmed).to_string()
    }

    pub fn is_latest(version: &str) -> bool {
        version.trim().eq_ignore_ascii_case(Self::LATEST)
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Release asset URL for the given platform
    pub fn download_url(&self, platform: Platform) -> String {
        format!(
            "{}/v{}/{}_{}_{}.tar.gz",
            Self::DOWNLOAD_BASE,
            self.version,
            Self::TOOL_NAME,
            self.version,
            platform
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sbom_publishing::domain::platform::{CpuArch, OsFamily};

    #[test]
    fn test_normalize_tag() {
        assert_eq!(ToolRelease::normalize_tag("v0.58.1"), "0.58.1");
        assert_eq!(ToolRelease::normalize_tag("0.58.1"), "0.58.1");
        assert_eq!(ToolRelease::normalize_tag(" v0.50.0\n"), "0.50.0");
    }

    #[test]
    fn test_is_latest() {
        assert!(ToolRelease::is_latest("latest"));
        assert!(ToolRelease::is_latest("Latest"));
        assert!(!ToolRelease::is_latest("0.58.1"));
    }

    #[test]
    fn test_download_url_linux_x64() {
        let release = ToolRelease::new("v0.58.1");
        assert_eq!(
            release.download_url(Platform::new(OsFamily::Linux, CpuArch::X64)),
            "https://github.com/aquasecurity/trivy/releases/download/v0.58.1/trivy_0.58.1_Linux-64bit.tar.gz"
        );
    }

    #[test]
    fn test_download_url_macos_arm64() {
        let release = ToolRelease::new("0.58.1");
        assert_eq!(
            release.download_url(Platform::new(OsFamily::MacOs, CpuArch::Arm64)),
            "https://github.com/aquasecurity/trivy/releases/download/v0.58.1/trivy_0.58.1_macOS-ARM64.tar.gz"
        );
    }
}
