//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `stubwright-adapters`
//! implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: directory creation and file writes
//!   - `StubStore`: stub template retrieval
//!   - `DependencyRegistry`: interface → implementation registration
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{DIRECTORY_MODE, DependencyRegistry, Filesystem, StubStore};

#[cfg(test)]
pub use output::{MockDependencyRegistry, MockFilesystem, MockStubStore};
