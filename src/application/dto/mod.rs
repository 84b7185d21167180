/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod pipeline_request;
mod pipeline_response;

pub use pipeline_request::{PipelineRequest, PipelineRequestBuilder};
pub use pipeline_response::PipelineResponse;
