//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "generate a repository" or "register bindings".

pub mod binding_service;
pub mod generator_service;

pub use binding_service::BindingService;
pub use generator_service::{GeneratedArtifact, GenerationPlan, GeneratorService};
