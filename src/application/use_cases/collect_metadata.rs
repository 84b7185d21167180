use crate::ports::outbound::{CommandRunner, EnvironmentProvider, IdentityRepository, ProgressReporter};
use crate::sbom_publishing::domain::{IdentityRecord, RepositorySlug, RunMetadata, NOT_AVAILABLE};
use crate::shared::Result;

/// Variable holding the `owner/repo` slug of the current repository
const REPOSITORY_VAR: &str = "GITHUB_REPOSITORY";
/// Variables consulted, in order, for an identity API token
const TOKEN_VARS: [&str; 2] = ["GITHUB_TOKEN", "GH_TOKEN"];

/// CollectMetadataUseCase - best-effort collection of [`RunMetadata`]
///
/// Each field is resolved on its own: a failing lookup is logged as a
/// warning and recorded as `"NA"`, and never stops the remaining lookups.
pub struct CollectMetadataUseCase<'a, CR, ENV, IR, PR> {
    command_runner: &'a CR,
    environment: &'a ENV,
    identity_repository: &'a IR,
    progress_reporter: &'a PR,
}

impl<'a, CR, ENV, IR, PR> CollectMetadataUseCase<'a, CR, ENV, IR, PR>
where
    CR: CommandRunner,
    ENV: EnvironmentProvider,
    IR: IdentityRepository,
    PR: ProgressReporter,
{
    pub fn new(
        command_runner: &'a CR,
        environment: &'a ENV,
        identity_repository: &'a IR,
        progress_reporter: &'a PR,
    ) -> Self {
        Self {
            command_runner,
            environment,
            identity_repository,
            progress_reporter,
        }
    }

    /// Collects every metadata field
    ///
    /// # Arguments
    /// * `track_release` - When false the release tag lookup is skipped and
    ///   the field is `"NA"`
    pub async fn execute(&self, track_release: bool) -> RunMetadata {
        let commit_sha = self.commit_sha().await;
        let ref_branch = self.ref_branch().await;
        let ext_release_id = if track_release {
            self.release_tag().await
        } else {
            NOT_AVAILABLE.to_string()
        };

        let slug = self.repository_slug();
        let (repository_name, organization_name) = match &slug {
            Some(slug) => (slug.repository().to_string(), slug.owner().to_string()),
            None => (NOT_AVAILABLE.to_string(), NOT_AVAILABLE.to_string()),
        };

        let token = self.environment.first_var(&TOKEN_VARS);
        let repository = self.repository_identity(slug.as_ref(), token.as_deref()).await;
        let organization = self.owner_identity(slug.as_ref(), token.as_deref()).await;

        RunMetadata {
            commit_sha,
            ref_branch,
            ext_release_id,
            repository_name,
            organization_name,
            repository_id: repository.id(),
            repository_node_id: repository.node_id(),
            organization_id: organization.id(),
            organization_node_id: organization.node_id(),
        }
    }

    async fn commit_sha(&self) -> String {
        let result = self.git_value(&["rev-parse", "HEAD"]).await;
        self.or_sentinel("git commit SHA", result)
    }

    async fn ref_branch(&self) -> String {
        let result = match self.git_value(&["rev-parse", "--abbrev-ref", "HEAD"]).await {
            Ok(branch) if branch == "HEAD" => Err(anyhow::anyhow!("HEAD is detached")),
            other => other,
        };
        self.or_sentinel("git branch", result)
    }

    async fn release_tag(&self) -> String {
        let result = self.git_value(&["describe", "--tags", "--exact-match"]).await;
        self.or_sentinel("git tag", result)
    }

    fn repository_slug(&self) -> Option<RepositorySlug> {
        let Some(value) = self.environment.var(REPOSITORY_VAR) else {
            self.progress_reporter.report_warning(&format!(
                "⚠️  {} not available, using {} for repository and organization name",
                REPOSITORY_VAR, NOT_AVAILABLE
            ));
            return None;
        };

        let slug = RepositorySlug::parse(&value);
        if slug.is_none() {
            self.progress_reporter.report_warning(&format!(
                "⚠️  {}='{}' is not of the form owner/repo, using {} for repository and organization name",
                REPOSITORY_VAR, value, NOT_AVAILABLE
            ));
        }
        slug
    }

    async fn repository_identity(
        &self,
        slug: Option<&RepositorySlug>,
        token: Option<&str>,
    ) -> IdentityRecord {
        let Some(slug) = slug else {
            return self.identity_skipped("repository data");
        };

        match self.identity_repository.fetch_repository(slug, token).await {
            Ok(record) => record,
            Err(e) => self.identity_failed("repository data", e),
        }
    }

    async fn owner_identity(
        &self,
        slug: Option<&RepositorySlug>,
        token: Option<&str>,
    ) -> IdentityRecord {
        let Some(slug) = slug else {
            return self.identity_skipped("organization data");
        };

        match self.identity_repository.fetch_owner(slug.owner(), token).await {
            Ok(record) => record,
            Err(e) => self.identity_failed("organization data", e),
        }
    }

    fn identity_skipped(&self, what: &str) -> IdentityRecord {
        self.progress_reporter.report_warning(&format!(
            "⚠️  Unable to get {}: {} not available",
            what, REPOSITORY_VAR
        ));
        IdentityRecord::unavailable()
    }

    fn identity_failed(&self, what: &str, error: anyhow::Error) -> IdentityRecord {
        self.progress_reporter
            .report_warning(&format!("⚠️  Unable to get {}: {:#}", what, error));
        IdentityRecord::unavailable()
    }

    /// Runs git and returns its trimmed stdout
    async fn git_value(&self, args: &[&str]) -> Result<String> {
        let output = self.command_runner.output("git", args).await?;
        if !output.success() {
            anyhow::bail!(
                "git {} exited with {}: {}",
                args.join(" "),
                output
                    .exit_code
                    .map(|code| code.to_string())
                    .unwrap_or_else(|| "a signal".to_string()),
                output.stderr.trim()
            );
        }

        let value = output.trimmed_stdout();
        if value.is_empty() {
            anyhow::bail!("git {} produced no output", args.join(" "));
        }
        Ok(value.to_string())
    }

    fn or_sentinel(&self, what: &str, result: Result<String>) -> String {
        match result {
            Ok(value) => value,
            Err(e) => {
                self.progress_reporter.report_warning(&format!(
                    "⚠️  Unable to get {}, using {}: {:#}",
                    what, NOT_AVAILABLE, e
                ));
                NOT_AVAILABLE.to_string()
            }
        }
    }
}
