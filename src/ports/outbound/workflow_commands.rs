use crate::shared::Result;
use std::path::Path;

/// WorkflowCommands port for the CI platform's step primitives
pub trait WorkflowCommands: Send + Sync {
    /// Publishes a step output
    fn set_output(&self, name: &str, value: &str) -> Result<()>;

    /// Prepends a directory to the search path of later steps
    fn add_path(&self, dir: &Path) -> Result<()>;
}
