//! Application layer for Stubwright.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (GeneratorService, BindingService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! naming rules itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{BindingService, GeneratedArtifact, GenerationPlan, GeneratorService};

pub use ports::{DIRECTORY_MODE, DependencyRegistry, Filesystem, StubStore};

pub use error::ApplicationError;
