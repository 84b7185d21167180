use crate::ports::outbound::WorkflowCommands;
use crate::shared::error::ActionError;
use crate::shared::Result;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// GithubWorkflowFiles adapter for step outputs and PATH registration
///
/// Writes to the files named by `GITHUB_OUTPUT` and `GITHUB_PATH`. When a
/// file is not configured, the equivalent legacy workflow command is printed
/// to stdout instead.
pub struct GithubWorkflowFiles {
    output_file: Option<PathBuf>,
    path_file: Option<PathBuf>,
}

impl GithubWorkflowFiles {
    pub fn new(output_file: Option<PathBuf>, path_file: Option<PathBuf>) -> Self {
        Self {
            output_file,
            path_file,
        }
    }

    fn append(path: &Path, content: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| ActionError::FileWriteError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;

        file.write_all(content.as_bytes())
            .map_err(|e| ActionError::FileWriteError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;
        Ok(())
    }

    /// Formats a `name<<delimiter` block for the output file
    fn format_output(name: &str, value: &str) -> Result<String> {
        let delimiter = format!("ghadelimiter_{}", uuid::Uuid::new_v4());
        if name.contains(&delimiter) || value.contains(&delimiter) {
            anyhow::bail!(
                "Unexpected input: output '{}' contains the delimiter {}",
                name,
                delimiter
            );
        }
        Ok(format!("{name}<<{delimiter}\n{value}\n{delimiter}\n"))
    }
}

impl WorkflowCommands for GithubWorkflowFiles {
    fn set_output(&self, name: &str, value: &str) -> Result<()> {
        match &self.output_file {
            Some(path) => Self::append(path, &Self::format_output(name, value)?),
            None => {
                println!("::set-output name={}::{}", name, value);
                Ok(())
            }
        }
    }

    fn add_path(&self, dir: &Path) -> Result<()> {
        match &self.path_file {
            Some(path) => Self::append(path, &format!("{}\n", dir.display())),
            None => {
                println!("::add-path::{}", dir.display());
                Ok(())
            }
        }
    }
}
