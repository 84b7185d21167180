/// Use cases module containing application business logic orchestration
mod collect_metadata;
mod generate_sbom;
mod post_sbom;
mod provision_tool;
mod publish_artifact;
mod run_pipeline;
mod validate_token;

pub use collect_metadata::CollectMetadataUseCase;
pub use generate_sbom::GenerateSbomUseCase;
pub use post_sbom::PostSbomUseCase;
pub use provision_tool::ProvisionToolUseCase;
pub use publish_artifact::PublishArtifactUseCase;
pub use run_pipeline::RunPipelineUseCase;
pub use validate_token::ValidateTokenUseCase;
