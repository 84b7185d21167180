use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use srm_sbom::prelude::*;

/// Mock CommandRunner for testing
///
/// `git` invocations are answered from a table keyed by the joined
/// arguments; unknown invocations fail like git outside a repository.
/// Streamed runs act as the scanner and write the configured SBOM to the
/// `--output` argument inside `working_dir`.
#[derive(Clone)]
pub struct MockCommandRunner {
    pub responses: HashMap<String, CommandOutput>,
    pub working_dir: Option<PathBuf>,
    pub sbom_content: Vec<u8>,
    pub scanner_exit: Option<i32>,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl MockCommandRunner {
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
            working_dir: None,
            sbom_content: Vec::new(),
            scanner_exit: Some(0),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Answers `git <args>` with a successful `stdout`
    pub fn with_git(mut self, args: &str, stdout: &str) -> Self {
        self.responses.insert(
            args.to_string(),
            CommandOutput::new(Some(0), format!("{}\n", stdout), ""),
        );
        self
    }

    /// A repository on `main` at a fixed commit, tagged `v1.2.3`
    pub fn repository() -> Self {
        Self::new()
            .with_git("rev-parse HEAD", "0123456789abcdef0123456789abcdef01234567")
            .with_git("rev-parse --abbrev-ref HEAD", "main")
            .with_git("describe --tags --exact-match", "v1.2.3")
    }

    pub fn with_scanner(mut self, working_dir: PathBuf, sbom_content: &[u8]) -> Self {
        self.working_dir = Some(working_dir);
        self.sbom_content = sbom_content.to_vec();
        self
    }

    pub fn with_scanner_exit(mut self, exit: Option<i32>) -> Self {
        self.scanner_exit = exit;
        self
    }

    pub fn get_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn was_called_with(&self, needle: &str) -> bool {
        self.get_calls().iter().any(|call| call.contains(needle))
    }
}

impl Default for MockCommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl CommandRunner for MockCommandRunner {
    async fn output(&self, program: &str, args: &[&str]) -> Result<CommandOutput> {
        let key = args.join(" ");
        self.calls
            .lock()
            .unwrap()
            .push(format!("{} {}", program, key));
        Ok(self.responses.get(&key).cloned().unwrap_or_else(|| {
            CommandOutput::new(Some(128), "", "fatal: not a git repository")
        }))
    }

    async fn run_streamed(&self, program: &str, args: &[&str]) -> Result<Option<i32>> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("{} {}", program, args.join(" ")));

        if self.scanner_exit == Some(0) {
            if let Some(dir) = &self.working_dir {
                let output = args
                    .iter()
                    .position(|arg| *arg == "--output")
                    .and_then(|i| args.get(i + 1))
                    .ok_or_else(|| anyhow::anyhow!("scanner invoked without --output"))?;
                std::fs::write(dir.join(output), &self.sbom_content)?;
            }
        }
        Ok(self.scanner_exit)
    }
}
