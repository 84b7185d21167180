use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use srm_sbom::prelude::*;

/// Mock WorkflowCommands capturing outputs and PATH registrations
#[derive(Clone, Default)]
pub struct MockWorkflowCommands {
    pub outputs: Arc<Mutex<Vec<(String, String)>>>,
    pub paths: Arc<Mutex<Vec<PathBuf>>>,
}

impl MockWorkflowCommands {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn output(&self, name: &str) -> Option<String> {
        self.outputs
            .lock()
            .unwrap()
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.clone())
    }

    pub fn get_paths(&self) -> Vec<PathBuf> {
        self.paths.lock().unwrap().clone()
    }
}

impl WorkflowCommands for MockWorkflowCommands {
    fn set_output(&self, name: &str, value: &str) -> Result<()> {
        self.outputs
            .lock()
            .unwrap()
            .push((name.to_string(), value.to_string()));
        Ok(())
    }

    fn add_path(&self, dir: &Path) -> Result<()> {
        self.paths.lock().unwrap().push(dir.to_path_buf());
        Ok(())
    }
}
