/// Domain layer - value objects and pure rules of the SBOM publishing step
pub mod domain;
