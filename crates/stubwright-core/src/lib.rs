//! Stubwright Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Stubwright
//! code generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          stubwright-cli (CLI)           │
//! │      (make:*, bindings, config)         │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (GeneratorService, BindingService)    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │ (StubStore, Filesystem, DependencyReg.) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    stubwright-adapters (Infrastructure) │
//! │  (LocalFilesystem, stub stores, etc)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (NameResolver, LayoutBuilder, Binding) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stubwright_core::prelude::*;
//!
//! let settings = GeneratorSettings::new("/srv/app");
//! let service = GeneratorService::new(stubs, filesystem, settings);
//! service.generate(
//!     ArtifactKind::Repository,
//!     &GeneratorRequest::new("Common/Book").with_model("BookModel"),
//!     |artifact| println!("{} created: {}", artifact.label, artifact.path.display()),
//! )?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        BindingService, GeneratedArtifact, GenerationPlan, GeneratorService,
        ports::{DependencyRegistry, Filesystem, StubStore},
    };
    pub use crate::domain::{
        ArtifactKind, ArtifactSettings, BindingTable, GeneratorRequest, GeneratorSettings,
        StubKind,
    };
    pub use crate::error::{ErrorCategory, StubwrightError, StubwrightResult};
}
