use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Parses a boolean step input
///
/// Accepts exactly the YAML 1.2 core schema spellings that GitHub uses for
/// boolean inputs: `true | True | TRUE | false | False | FALSE`.
pub fn parse_boolean_input(value: &str) -> Result<bool, String> {
    match value {
        "true" | "True" | "TRUE" => Ok(true),
        "false" | "False" | "FALSE" => Ok(false),
        _ => Err(format!(
            "Invalid boolean: {}. Support boolean input list: `true | True | TRUE | false | False | FALSE`",
            value
        )),
    }
}

/// Generate a CycloneDX SBOM with Trivy and upload it to an SRM ingestion endpoint
///
/// Every input can also be provided through the `INPUT_*` variable GitHub
/// Actions sets for the step.
#[derive(Parser, Debug)]
#[command(name = "srm-sbom")]
#[command(version)]
#[command(
    about = "Generate a CycloneDX SBOM with Trivy and upload it with repository metadata",
    long_about = None
)]
pub struct Args {
    /// Token sent as bearer credential to the ingestion endpoint
    #[arg(long, env = "INPUT_SRM-TOKEN", hide_env_values = true)]
    pub srm_token: String,

    /// Trivy version to install (e.g. 0.50.1), or `latest`
    #[arg(long, env = "INPUT_TRIVY-VERSION")]
    pub trivy_version: Option<String>,

    /// Also publish the SBOM as a workflow artifact
    #[arg(
        long,
        env = "INPUT_SBOM-ARTIFACT",
        value_name = "BOOL",
        default_value = "false",
        action = ArgAction::Set,
        value_parser = parse_boolean_input
    )]
    pub sbom_artifact: bool,

    /// Attach the exact-match release tag of HEAD to the upload
    #[arg(
        long,
        env = "INPUT_TRACK-RELEASE",
        value_name = "BOOL",
        default_value = "false",
        action = ArgAction::Set,
        value_parser = parse_boolean_input
    )]
    pub track_release: bool,

    /// Upload endpoint (overrides the config file)
    #[arg(long, env = "INPUT_ENDPOINT-URL")]
    pub endpoint_url: Option<String>,

    /// Token validation endpoint; validation is skipped when unset
    #[arg(long, env = "INPUT_VALIDATION-ENDPOINT")]
    pub validation_endpoint: Option<String>,

    /// Path to the working directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub path: PathBuf,

    /// Path to a config file (defaults to srm-sbom.config.yml in the working directory)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }
}
