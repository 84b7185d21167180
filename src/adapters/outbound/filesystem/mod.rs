/// Filesystem adapters for the runner tool cache and workflow command files
mod tool_cache;
mod workflow_files;

pub use tool_cache::RunnerToolCache;
pub use workflow_files::GithubWorkflowFiles;
