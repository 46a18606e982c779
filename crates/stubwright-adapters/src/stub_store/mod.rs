//! Stub store adapters.
//!
//! Stubs can come from a directory on disk or from the copies compiled into
//! the binary. [`StubDiscovery`] decides which of those a run uses.

mod builtin;
mod directory;
mod discovery;
mod layered;

pub use builtin::BuiltinStubStore;
pub use directory::DirectoryStubStore;
pub use discovery::{PUBLISHED_STUBS_DIR, STUBS_DIR_ENV, StubDiscovery, StubSource};
pub use layered::LayeredStubStore;
