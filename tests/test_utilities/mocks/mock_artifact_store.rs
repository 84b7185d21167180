use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use srm_sbom::prelude::*;

/// Mock ArtifactStore for testing
#[derive(Clone, Default)]
pub struct MockArtifactStore {
    pub should_fail: bool,
    pub uploads: Arc<Mutex<Vec<(String, Vec<PathBuf>)>>>,
}

impl MockArtifactStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn upload_count(&self) -> usize {
        self.uploads.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl ArtifactStore for MockArtifactStore {
    async fn upload_artifact(
        &self,
        name: &ArtifactName,
        files: &[PathBuf],
        _root: &Path,
    ) -> Result<ArtifactHandle> {
        self.uploads
            .lock()
            .unwrap()
            .push((name.as_str().to_string(), files.to_vec()));
        if self.should_fail {
            anyhow::bail!("Failed to get backend ids from the runtime token");
        }
        Ok(ArtifactHandle::new("4242", 512))
    }
}
