use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use srm_sbom::prelude::*;

/// Mock ToolDistribution for testing that counts downloads
#[derive(Clone)]
pub struct MockToolDistribution {
    pub latest_tag: String,
    pub archive: PathBuf,
    pub downloads: Arc<AtomicUsize>,
    pub latest_lookups: Arc<AtomicUsize>,
}

impl MockToolDistribution {
    pub fn new(latest_tag: &str, archive: PathBuf) -> Self {
        Self {
            latest_tag: latest_tag.to_string(),
            archive,
            downloads: Arc::new(AtomicUsize::new(0)),
            latest_lookups: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn download_count(&self) -> usize {
        self.downloads.load(Ordering::SeqCst)
    }

    pub fn latest_lookup_count(&self) -> usize {
        self.latest_lookups.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl ToolDistribution for MockToolDistribution {
    async fn latest_version(&self) -> Result<String> {
        self.latest_lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.latest_tag.clone())
    }

    async fn download(
        &self,
        _url: &str,
        progress: &(dyn Fn(u64, Option<u64>) + Sync),
    ) -> Result<PathBuf> {
        self.downloads.fetch_add(1, Ordering::SeqCst);
        progress(0, Some(100));
        progress(100, Some(100));
        Ok(self.archive.clone())
    }
}
