use crate::ports::outbound::ToolCache;
use crate::sbom_publishing::domain::{CpuArch, ToolRelease};
use crate::shared::error::ActionError;
use crate::shared::security::validate_not_symlink;
use crate::shared::Result;
use flate2::read::GzDecoder;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// RunnerToolCache adapter for the hosted runner tool cache
///
/// Tools live under `<root>/<tool>/<version>/<arch>`, and a sibling
/// `<arch>.complete` file marks the entry as fully written. Entries without
/// the marker are treated as missing.
pub struct RunnerToolCache {
    root: PathBuf,
    temp_dir: PathBuf,
    arch: CpuArch,
}

impl RunnerToolCache {
    /// Creates a tool cache
    ///
    /// # Arguments
    /// * `root` - Cache root (`RUNNER_TOOL_CACHE` on hosted runners)
    /// * `temp_dir` - Scratch directory for extracted archives
    /// * `arch` - Architecture component of the cache path
    pub fn new(root: impl Into<PathBuf>, temp_dir: impl Into<PathBuf>, arch: CpuArch) -> Self {
        Self {
            root: root.into(),
            temp_dir: temp_dir.into(),
            arch,
        }
    }

    fn version_dir(&self, tool: &str, version: &str) -> PathBuf {
        self.root.join(tool).join(ToolRelease::normalize_tag(version))
    }

    fn entry_dir(&self, tool: &str, version: &str) -> PathBuf {
        self.version_dir(tool, version).join(self.arch.cache_label())
    }

    fn marker_file(&self, tool: &str, version: &str) -> PathBuf {
        self.version_dir(tool, version)
            .join(format!("{}.complete", self.arch.cache_label()))
    }

    fn copy_dir_recursive(source: &Path, destination: &Path) -> Result<()> {
        fs::create_dir_all(destination).map_err(|e| ActionError::FileWriteError {
            path: destination.to_path_buf(),
            details: e.to_string(),
        })?;

        let entries = fs::read_dir(source).map_err(|e| ActionError::FileReadError {
            path: source.to_path_buf(),
            details: e.to_string(),
        })?;

        for entry in entries {
            let entry = entry?;
            let path = entry.path();
            let target = destination.join(entry.file_name());
            let file_type = entry.file_type()?;

            if file_type.is_dir() {
                Self::copy_dir_recursive(&path, &target)?;
            } else if file_type.is_file() {
                fs::copy(&path, &target).map_err(|e| ActionError::FileWriteError {
                    path: target.clone(),
                    details: e.to_string(),
                })?;
            }
            // Symlinks inside release archives are skipped
        }
        Ok(())
    }
}

impl ToolCache for RunnerToolCache {
    fn find(&self, tool: &str, version: &str) -> Option<PathBuf> {
        if version.trim().is_empty() || ToolRelease::is_latest(version) {
            return None;
        }

        let dir = self.entry_dir(tool, version);
        if dir.is_dir() && self.marker_file(tool, version).is_file() {
            Some(dir)
        } else {
            None
        }
    }

    fn extract_tar_gz(&self, archive: &Path) -> Result<PathBuf> {
        validate_not_symlink(archive, "archive")?;

        let file = File::open(archive).map_err(|e| ActionError::FileReadError {
            path: archive.to_path_buf(),
            details: e.to_string(),
        })?;

        let destination = self.temp_dir.join(uuid::Uuid::new_v4().to_string());
        fs::create_dir_all(&destination).map_err(|e| ActionError::FileWriteError {
            path: destination.clone(),
            details: e.to_string(),
        })?;

        let mut tarball = tar::Archive::new(GzDecoder::new(file));
        if let Err(e) = tarball.unpack(&destination) {
            self.discard(&destination);
            return Err(ActionError::FileReadError {
                path: archive.to_path_buf(),
                details: format!("Failed to extract archive: {}", e),
            }
            .into());
        }

        Ok(destination)
    }

    fn cache_dir(&self, source: &Path, tool: &str, version: &str) -> Result<PathBuf> {
        let destination = self.entry_dir(tool, version);
        let marker = self.marker_file(tool, version);

        // A leftover entry without a marker is a partial copy
        if destination.exists() {
            fs::remove_dir_all(&destination).map_err(|e| ActionError::FileWriteError {
                path: destination.clone(),
                details: e.to_string(),
            })?;
        }
        let _ = fs::remove_file(&marker);

        Self::copy_dir_recursive(source, &destination)?;
        fs::write(&marker, b"").map_err(|e| ActionError::FileWriteError {
            path: marker.clone(),
            details: e.to_string(),
        })?;

        Ok(destination)
    }

    fn discard(&self, path: &Path) {
        let _ = match fs::symlink_metadata(path) {
            Ok(metadata) if metadata.is_dir() => fs::remove_dir_all(path),
            Ok(_) => fs::remove_file(path),
            Err(_) => return,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use tempfile::TempDir;

    fn build_archive(dir: &Path) -> PathBuf {
        let archive_path = dir.join("trivy.tar.gz");
        let file = File::create(&archive_path).unwrap();
        let mut builder = tar::Builder::new(GzEncoder::new(file, Compression::default()));

        let content = b"#!/bin/sh\necho trivy\n";
        let mut header = tar::Header::new_gnu();
        header.set_size(content.len() as u64);
        header.set_mode(0o755);
        header.set_cksum();
        builder
            .append_data(&mut header, "trivy", &content[..])
            .unwrap();

        let readme = b"readme";
        let mut header = tar::Header::new_gnu();
        header.set_size(readme.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();
        builder
            .append_data(&mut header, "contrib/README.md", &readme[..])
            .unwrap();

        builder.into_inner().unwrap().finish().unwrap();
        archive_path
    }

    fn cache_in(dir: &TempDir) -> RunnerToolCache {
        RunnerToolCache::new(dir.path().join("cache"), dir.path().join("tmp"), CpuArch::X64)
    }

    #[test]
    fn test_find_missing_tool() {
        let dir = TempDir::new().unwrap();
        let cache = cache_in(&dir);
        assert!(cache.find("trivy", "0.50.0").is_none());
    }

    #[test]
    fn test_find_never_matches_latest() {
        let dir = TempDir::new().unwrap();
        let cache = cache_in(&dir);
        let entry = dir.path().join("cache/trivy/latest/x64");
        fs::create_dir_all(&entry).unwrap();
        fs::write(dir.path().join("cache/trivy/latest/x64.complete"), "").unwrap();

        assert!(cache.find("trivy", "latest").is_none());
    }

    #[test]
    fn test_find_requires_complete_marker() {
        let dir = TempDir::new().unwrap();
        let cache = cache_in(&dir);
        fs::create_dir_all(dir.path().join("cache/trivy/0.50.0/x64")).unwrap();

        assert!(cache.find("trivy", "0.50.0").is_none());

        fs::write(dir.path().join("cache/trivy/0.50.0/x64.complete"), "").unwrap();
        assert_eq!(
            cache.find("trivy", "0.50.0"),
            Some(dir.path().join("cache/trivy/0.50.0/x64"))
        );
    }

    #[test]
    fn test_find_accepts_v_prefixed_version() {
        let dir = TempDir::new().unwrap();
        let cache = cache_in(&dir);
        fs::create_dir_all(dir.path().join("cache/trivy/0.50.0/x64")).unwrap();
        fs::write(dir.path().join("cache/trivy/0.50.0/x64.complete"), "").unwrap();

        assert!(cache.find("trivy", "v0.50.0").is_some());
    }

    #[test]
    fn test_extract_and_cache() {
        let dir = TempDir::new().unwrap();
        let cache = cache_in(&dir);
        let archive = build_archive(dir.path());

        let extracted = cache.extract_tar_gz(&archive).unwrap();
        assert!(extracted.join("trivy").is_file());
        assert!(extracted.starts_with(dir.path().join("tmp")));

        let cached = cache.cache_dir(&extracted, "trivy", "0.50.0").unwrap();
        assert_eq!(cached, dir.path().join("cache/trivy/0.50.0/x64"));
        assert!(cached.join("trivy").is_file());
        assert_eq!(
            fs::read_to_string(cached.join("contrib/README.md")).unwrap(),
            "readme"
        );
        assert_eq!(cache.find("trivy", "0.50.0"), Some(cached));
    }

    #[cfg(unix)]
    #[test]
    fn test_cached_binary_keeps_executable_bit() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let cache = cache_in(&dir);
        let archive = build_archive(dir.path());

        let extracted = cache.extract_tar_gz(&archive).unwrap();
        let cached = cache.cache_dir(&extracted, "trivy", "0.50.0").unwrap();
        let mode = fs::metadata(cached.join("trivy")).unwrap().permissions().mode();
        assert_ne!(mode & 0o111, 0);
    }

    #[test]
    fn test_extract_invalid_archive() {
        let dir = TempDir::new().unwrap();
        let cache = cache_in(&dir);
        let archive = dir.path().join("broken.tar.gz");
        fs::write(&archive, "not a gzip stream").unwrap();

        let result = cache.extract_tar_gz(&archive);
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to extract archive"));
        assert_eq!(fs::read_dir(dir.path().join("tmp")).unwrap().count(), 0);
    }

    #[test]
    fn test_discard_removes_scratch_paths() {
        let dir = TempDir::new().unwrap();
        let cache = cache_in(&dir);
        let archive = build_archive(dir.path());
        let extracted = cache.extract_tar_gz(&archive).unwrap();

        cache.discard(&archive);
        cache.discard(&extracted);
        cache.discard(&dir.path().join("never-created"));

        assert!(!archive.exists());
        assert!(!extracted.exists());
    }

    #[test]
    fn test_cache_dir_replaces_partial_entry() {
        let dir = TempDir::new().unwrap();
        let cache = cache_in(&dir);
        let stale = dir.path().join("cache/trivy/0.50.0/x64");
        fs::create_dir_all(&stale).unwrap();
        fs::write(stale.join("stale.txt"), "old").unwrap();

        let source = dir.path().join("source");
        fs::create_dir_all(&source).unwrap();
        fs::write(source.join("trivy"), "bin").unwrap();

        let cached = cache.cache_dir(&source, "trivy", "0.50.0").unwrap();
        assert!(cached.join("trivy").is_file());
        assert!(!cached.join("stale.txt").exists());
    }
}
