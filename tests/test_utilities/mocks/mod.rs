/// Mock implementations for testing
mod mock_artifact_store;
mod mock_command_runner;
mod mock_environment;
mod mock_identity_repository;
mod mock_ingest_service;
mod mock_progress_reporter;
mod mock_tool_cache;
mod mock_tool_distribution;
mod mock_workflow_commands;

pub use mock_artifact_store::MockArtifactStore;
pub use mock_command_runner::MockCommandRunner;
pub use mock_environment::MockEnvironment;
pub use mock_identity_repository::MockIdentityRepository;
pub use mock_ingest_service::MockIngestService;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_tool_cache::MockToolCache;
pub use mock_tool_distribution::MockToolDistribution;
pub use mock_workflow_commands::MockWorkflowCommands;
