//! Infrastructure adapters for Stubwright.
//!
//! This crate implements the ports defined in `stubwright-core::application::ports`.
//! It contains all I/O: the filesystem, stub files and the dependency
//! registry.

pub mod filesystem;
pub mod registry;
pub mod stub_store;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use registry::MemoryRegistry;
pub use stub_store::{
    BuiltinStubStore, DirectoryStubStore, LayeredStubStore, StubDiscovery, StubSource,
};
