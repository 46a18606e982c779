//! Dependency registry adapters.

mod memory;

pub use memory::MemoryRegistry;
