use crate::ports::outbound::{CommandRunner, ProgressReporter};
use crate::shared::error::ActionError;
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// GenerateSbomUseCase - runs the scanner to produce a CycloneDX document
///
/// The run cannot continue without an SBOM, so every failure here is fatal.
pub struct GenerateSbomUseCase<'a, CR, PR> {
    command_runner: &'a CR,
    progress_reporter: &'a PR,
}

impl<'a, CR, PR> GenerateSbomUseCase<'a, CR, PR>
where
    CR: CommandRunner,
    PR: ProgressReporter,
{
    pub fn new(command_runner: &'a CR, progress_reporter: &'a PR) -> Self {
        Self {
            command_runner,
            progress_reporter,
        }
    }

    /// Scans the working directory with `scanner`
    ///
    /// # Arguments
    /// * `scanner` - Path to the scanner executable
    /// * `sbom_path` - Output path relative to `working_dir`
    /// * `working_dir` - Directory the command runner executes in
    ///
    /// # Returns
    /// The SBOM location (`working_dir` joined with `sbom_path`)
    pub async fn execute(
        &self,
        scanner: &Path,
        sbom_path: &Path,
        working_dir: &Path,
    ) -> Result<PathBuf> {
        self.progress_reporter
            .report("📦 Generating SBOM with Trivy...");

        let scanner_program = scanner.to_string_lossy();
        let output_arg = sbom_path.to_string_lossy();
        let args = [
            "fs",
            "--format",
            "cyclonedx",
            "--output",
            output_arg.as_ref(),
            ".",
        ];

        let exit_code = self
            .command_runner
            .run_streamed(&scanner_program, &args)
            .await
            .map_err(|e| ActionError::SbomGeneration {
                path: sbom_path.to_path_buf(),
                details: format!("Failed to start {}: {:#}", scanner.display(), e),
            })?;

        match exit_code {
            Some(0) => {}
            Some(code) => {
                return Err(ActionError::SbomGeneration {
                    path: sbom_path.to_path_buf(),
                    details: format!("trivy exited with code {}", code),
                }
                .into())
            }
            None => {
                return Err(ActionError::SbomGeneration {
                    path: sbom_path.to_path_buf(),
                    details: "trivy was terminated by a signal".to_string(),
                }
                .into())
            }
        }

        let generated = working_dir.join(sbom_path);
        if !generated.is_file() {
            return Err(ActionError::SbomGeneration {
                path: sbom_path.to_path_buf(),
                details: "trivy exited successfully but no SBOM file was written".to_string(),
            }
            .into());
        }

        self.progress_reporter
            .report(&format!("✅ SBOM generated at: {}", sbom_path.display()));
        Ok(generated)
    }
}
