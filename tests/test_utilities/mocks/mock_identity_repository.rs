use std::sync::{Arc, Mutex};
use srm_sbom::prelude::*;
use srm_sbom::sbom_publishing::domain::IdentityValue;

/// Mock IdentityRepository for testing
#[derive(Clone)]
pub struct MockIdentityRepository {
    pub repository: IdentityRecord,
    pub owner: IdentityRecord,
    pub should_fail: bool,
    pub tokens: Arc<Mutex<Vec<Option<String>>>>,
}

impl MockIdentityRepository {
    pub fn new() -> Self {
        Self {
            repository: IdentityRecord::new(
                Some(IdentityValue::Number(1296269u64.into())),
                Some("MDEwOlJlcG9zaXRvcnkxMjk2MjY5".to_string()),
            ),
            owner: IdentityRecord::new(
                Some(IdentityValue::Text("9919".to_string())),
                Some("MDEyOk9yZ2FuaXphdGlvbjk5MTk=".to_string()),
            ),
            should_fail: false,
            tokens: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::new()
        }
    }

    pub fn call_count(&self) -> usize {
        self.tokens.lock().unwrap().len()
    }

    pub fn get_tokens(&self) -> Vec<Option<String>> {
        self.tokens.lock().unwrap().clone()
    }

    fn record(&self, token: Option<&str>, record: &IdentityRecord) -> Result<IdentityRecord> {
        self.tokens
            .lock()
            .unwrap()
            .push(token.map(str::to_string));
        if self.should_fail {
            anyhow::bail!("GitHub API returned status code 403 Forbidden");
        }
        Ok(record.clone())
    }
}

impl Default for MockIdentityRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IdentityRepository for MockIdentityRepository {
    async fn fetch_repository(
        &self,
        _slug: &RepositorySlug,
        token: Option<&str>,
    ) -> Result<IdentityRecord> {
        self.record(token, &self.repository)
    }

    async fn fetch_owner(&self, _owner: &str, token: Option<&str>) -> Result<IdentityRecord> {
        self.record(token, &self.owner)
    }
}
