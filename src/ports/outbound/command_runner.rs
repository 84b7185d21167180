use crate::shared::Result;
use async_trait::async_trait;

/// Captured result of an external process
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` when the process was terminated by a signal
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn new(exit_code: Option<i32>, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            exit_code,
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// Stdout without surrounding whitespace
    pub fn trimmed_stdout(&self) -> &str {
        self.stdout.trim()
    }
}

/// CommandRunner port for invoking external programs (git, the scanner)
///
/// Every call blocks the pipeline until the process exits; no timeout is
/// applied beyond what the runner enforces.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Runs a program and captures its output
    ///
    /// # Errors
    /// Returns an error only when the process cannot be spawned. A nonzero
    /// exit is reported through [`CommandOutput::exit_code`].
    async fn output(&self, program: &str, args: &[&str]) -> Result<CommandOutput>;

    /// Runs a program with its output streamed to the job log
    ///
    /// # Returns
    /// The exit code, `None` when the process was terminated by a signal
    async fn run_streamed(&self, program: &str, args: &[&str]) -> Result<Option<i32>>;
}
