mod adapters;
mod application;
mod cli;
mod config;
mod ports;
mod sbom_publishing;
mod shared;

use adapters::outbound::console::ConsoleProgressReporter;
use adapters::outbound::environment::ProcessEnvironment;
use adapters::outbound::filesystem::{GithubWorkflowFiles, RunnerToolCache};
use adapters::outbound::network::{
    GithubArtifactStore, GithubIdentityClient, GithubReleaseClient, IngestClient,
};
use adapters::outbound::process::SystemCommandRunner;
use application::dto::PipelineRequest;
use application::use_cases::RunPipelineUseCase;
use clap::error::ErrorKind;
use cli::Args;
use config::{discover_config, load_config_from_path, ActionConfig, RunnerContext};
use ports::outbound::{EnvironmentProvider, ProgressReporter};
use sbom_publishing::domain::Platform;
use shared::error::{ActionError, ExitCode};
use shared::Result;
use std::path::Path;
use std::process;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = match Args::try_parse_args() {
        Ok(args) => args,
        Err(e) => {
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                e.exit();
            }
            let _ = e.print();
            process::exit(ExitCode::InvalidArguments.as_i32());
        }
    };

    let environment = ProcessEnvironment::new();
    let context = RunnerContext::from_env(&environment);

    if let Err(e) = run(args, &environment, &context).await {
        if context.github_actions {
            ConsoleProgressReporter::new(true).report_error(&format!("{:#}", e));
        }

        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::Failure.as_i32());
    }
}

async fn run(args: Args, environment: &ProcessEnvironment, context: &RunnerContext) -> Result<()> {
    let progress_reporter = ConsoleProgressReporter::new(context.github_actions);

    let working_dir = args.path.clone();
    validate_working_directory(&working_dir)?;

    let config = load_action_config(&args, &working_dir, &progress_reporter)?;

    let mut builder = PipelineRequest::builder(&config)
        .working_dir(working_dir.clone())
        .auth_token(args.srm_token)
        .publish_artifact(args.sbom_artifact)
        .track_release(args.track_release)
        .validation_endpoint(args.validation_endpoint);
    if let Some(endpoint_url) = args.endpoint_url {
        builder = builder.endpoint_url(endpoint_url);
    }
    if let Some(trivy_version) = args.trivy_version {
        builder = builder.tool_version(trivy_version);
    }
    let request = builder.build()?;

    // Create adapters (Dependency Injection)
    let platform = Platform::detect();
    let github_token = environment.first_var(&["GITHUB_TOKEN", "GH_TOKEN"]);
    let command_runner = SystemCommandRunner::new(&working_dir);
    let identity_repository = GithubIdentityClient::new(context.api_url.as_str())?;
    let ingest_service = IngestClient::new()?;
    let tool_distribution = GithubReleaseClient::new(
        context.api_url.as_str(),
        context.temp_dir.clone(),
        github_token,
    )?;
    let tool_cache = RunnerToolCache::new(
        context.tool_cache_dir.clone(),
        context.temp_dir.clone(),
        platform.arch(),
    );
    let artifact_store =
        GithubArtifactStore::new(context.results_url.clone(), context.runtime_token.clone())?;
    let workflow_commands =
        GithubWorkflowFiles::new(context.output_file.clone(), context.path_file.clone());

    let use_case = RunPipelineUseCase::new(
        command_runner,
        *environment,
        identity_repository,
        ingest_service,
        tool_distribution,
        tool_cache,
        artifact_store,
        workflow_commands,
        progress_reporter,
    )
    .with_platform(platform);

    use_case.execute(request).await?;

    Ok(())
}

/// Builds the effective config: defaults, then the config file if any
fn load_action_config(
    args: &Args,
    working_dir: &Path,
    reporter: &ConsoleProgressReporter,
) -> Result<ActionConfig> {
    let config_file = match &args.config {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(working_dir)?,
    };

    let Some(config_file) = config_file else {
        return Ok(ActionConfig::default());
    };

    for field in config_file.unknown_field_names() {
        reporter.report_warning(&format!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            field
        ));
    }
    Ok(ActionConfig::default().merge(config_file))
}

fn validate_working_directory(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(ActionError::InvalidWorkingDirectory {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    // Security check: Reject symbolic links for the working directory
    let metadata =
        std::fs::symlink_metadata(path).map_err(|e| ActionError::InvalidWorkingDirectory {
            path: path.to_path_buf(),
            reason: format!("Failed to read path metadata: {}", e),
        })?;

    if metadata.is_symlink() {
        return Err(ActionError::InvalidWorkingDirectory {
            path: path.to_path_buf(),
            reason: "Security: Working directory is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(ActionError::InvalidWorkingDirectory {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    path.canonicalize()
        .map_err(|e| ActionError::InvalidWorkingDirectory {
            path: path.to_path_buf(),
            reason: format!("Failed to canonicalize path: {}", e),
        })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn args_for(dir: &Path, extra: &[&str]) -> Args {
        let mut argv = vec![
            "srm-sbom".to_string(),
            "--srm-token".to_string(),
            "secret".to_string(),
            "-p".to_string(),
            dir.display().to_string(),
        ];
        argv.extend(extra.iter().map(|s| s.to_string()));
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_validate_working_directory_valid() {
        let temp_dir = TempDir::new().unwrap();
        assert!(validate_working_directory(temp_dir.path()).is_ok());
    }

    #[test]
    fn test_validate_working_directory_nonexistent() {
        let path = PathBuf::from("/nonexistent/path/that/does/not/exist");
        let err = validate_working_directory(&path).unwrap_err();
        assert!(err.to_string().contains("Directory does not exist"));
    }

    #[test]
    fn test_validate_working_directory_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("file.txt");
        fs::write(&file_path, "content").unwrap();

        let err = validate_working_directory(&file_path).unwrap_err();
        assert!(err.to_string().contains("Not a directory"));
    }

    #[cfg(unix)]
    #[test]
    fn test_validate_working_directory_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("target");
        fs::create_dir(&target).unwrap();
        let link = temp_dir.path().join("link");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let err = validate_working_directory(&link).unwrap_err();
        assert!(err.to_string().contains("symbolic link"));
    }

    #[test]
    fn test_load_action_config_defaults_without_file() {
        let temp_dir = TempDir::new().unwrap();
        let args = args_for(temp_dir.path(), &[]);
        let reporter = ConsoleProgressReporter::default();

        let config = load_action_config(&args, temp_dir.path(), &reporter).unwrap();
        assert_eq!(config, ActionConfig::default());
    }

    #[test]
    fn test_load_action_config_discovers_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(config::CONFIG_FILENAME),
            "artifact_name: my-sbom\nsome_unknown: 1\n",
        )
        .unwrap();
        let args = args_for(temp_dir.path(), &[]);
        let reporter = ConsoleProgressReporter::default();

        let config = load_action_config(&args, temp_dir.path(), &reporter).unwrap();
        assert_eq!(config.artifact_name, "my-sbom");
    }

    #[test]
    fn test_load_action_config_explicit_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.yml");
        let args = args_for(temp_dir.path(), &["-c", missing.to_str().unwrap()]);
        let reporter = ConsoleProgressReporter::default();

        let err = load_action_config(&args, temp_dir.path(), &reporter).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
