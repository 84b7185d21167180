use crate::sbom_publishing::domain::{IdentityRecord, RepositorySlug};
use crate::shared::Result;
use async_trait::async_trait;

/// IdentityRepository port for resolving repository and account identifiers
///
/// Implementations query the hosting platform's REST API. A bearer token is
/// sent when one is given; otherwise the request is anonymous.
#[async_trait]
pub trait IdentityRepository: Send + Sync {
    /// Fetches `id` and `node_id` of a repository
    ///
    /// # Errors
    /// Returns an error if the request fails, the API answers with a
    /// non-success status or the payload is not a JSON object
    async fn fetch_repository(
        &self,
        slug: &RepositorySlug,
        token: Option<&str>,
    ) -> Result<IdentityRecord>;

    /// Fetches `id` and `node_id` of the account owning a repository
    async fn fetch_owner(&self, owner: &str, token: Option<&str>) -> Result<IdentityRecord>;
}
