//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `stubwright-adapters` crate provides implementations.

use std::path::Path;

#[cfg(test)]
use mockall::automock;

use crate::domain::StubKind;
use crate::error::StubwrightResult;

/// Permission mode for directories created by the writer (unix only).
pub const DIRECTORY_MODE: u32 = 0o755;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `stubwright_adapters::filesystem::LocalFilesystem` (production)
/// - `stubwright_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all missing parents with [`DIRECTORY_MODE`].
    /// Succeeds if the directory already exists.
    fn create_dir_all(&self, path: &Path) -> StubwrightResult<()>;

    /// Write content to a file, creating or truncating it.
    fn write_file(&self, path: &Path, content: &str) -> StubwrightResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for stub template retrieval.
///
/// Implemented by:
/// - `stubwright_adapters::stub_store::BuiltinStubStore` (compiled in)
/// - `stubwright_adapters::stub_store::DirectoryStubStore` (a stubs folder)
/// - `stubwright_adapters::stub_store::LayeredStubStore` (first hit wins)
#[cfg_attr(test, automock)]
pub trait StubStore: Send + Sync {
    /// Load the raw text of `stub`.
    ///
    /// Fails with `ApplicationError::StubNotFound` when this store does not
    /// have the stub, and `StubUnreadable` when it exists but cannot be read.
    fn load(&self, stub: StubKind) -> StubwrightResult<String>;

    /// Human description of where stubs come from, for logs and errors.
    fn describe(&self) -> String;
}

/// Port for the host application's dependency resolution mechanism.
///
/// Implemented by:
/// - `stubwright_adapters::registry::MemoryRegistry`
#[cfg_attr(test, automock)]
pub trait DependencyRegistry: Send + Sync {
    /// Register that requests for `contract` resolve to `implementation`.
    fn bind(&mut self, contract: &str, implementation: &str) -> StubwrightResult<()>;

    /// The implementation registered for `contract`, if any.
    fn resolve(&self, contract: &str) -> Option<String>;
}
