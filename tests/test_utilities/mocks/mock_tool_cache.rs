use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use srm_sbom::prelude::*;

/// Mock ToolCache for testing, keyed by version only
pub struct MockToolCache {
    pub root: PathBuf,
    pub entries: Mutex<HashMap<String, PathBuf>>,
    pub discarded: Mutex<Vec<PathBuf>>,
    pub fail_cache: bool,
}

impl MockToolCache {
    pub fn empty(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            entries: Mutex::new(HashMap::new()),
            discarded: Mutex::new(Vec::new()),
            fail_cache: false,
        }
    }

    pub fn with_cache_failure(mut self) -> Self {
        self.fail_cache = true;
        self
    }

    pub fn get_discarded(&self) -> Vec<PathBuf> {
        self.discarded.lock().unwrap().clone()
    }

    pub fn with_entry(self, version: &str) -> Self {
        let dir = self.root.join("trivy").join(version).join("x64");
        self.entries
            .lock()
            .unwrap()
            .insert(version.to_string(), dir);
        self
    }

    pub fn contains(&self, version: &str) -> bool {
        self.entries.lock().unwrap().contains_key(version)
    }
}

impl ToolCache for MockToolCache {
    fn find(&self, _tool: &str, version: &str) -> Option<PathBuf> {
        self.entries.lock().unwrap().get(version).cloned()
    }

    fn extract_tar_gz(&self, archive: &Path) -> Result<PathBuf> {
        Ok(archive.with_extension("extracted"))
    }

    fn cache_dir(&self, _source: &Path, tool: &str, version: &str) -> Result<PathBuf> {
        if self.fail_cache {
            anyhow::bail!("Mock cache write failure");
        }
        let dir = self.root.join(tool).join(version).join("x64");
        self.entries
            .lock()
            .unwrap()
            .insert(version.to_string(), dir.clone());
        Ok(dir)
    }

    fn discard(&self, path: &Path) {
        self.discarded.lock().unwrap().push(path.to_path_buf());
    }
}
