/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (processes, network, runner files, console).
pub mod artifact_store;
pub mod command_runner;
pub mod environment_provider;
pub mod identity_repository;
pub mod ingest_service;
pub mod progress_reporter;
pub mod tool_cache;
pub mod tool_distribution;
pub mod workflow_commands;

pub use artifact_store::ArtifactStore;
pub use command_runner::{CommandOutput, CommandRunner};
pub use environment_provider::EnvironmentProvider;
pub use identity_repository::IdentityRepository;
pub use ingest_service::IngestService;
pub use progress_reporter::ProgressReporter;
pub use tool_cache::ToolCache;
pub use tool_distribution::ToolDistribution;
pub use workflow_commands::WorkflowCommands;
