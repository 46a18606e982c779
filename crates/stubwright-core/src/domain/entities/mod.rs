pub mod identity;
pub mod location;
pub mod settings;

pub use crate::domain::DomainError;
pub use identity::{GeneratorRequest, ResolvedIdentity};
pub use location::{InterfaceLocation, ResolvedLocation};
pub use settings::{ArtifactSettings, GeneratorSettings};
