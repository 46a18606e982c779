//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not naming
//! rules. Naming and configuration rule violations are `DomainError`s.

use std::path::PathBuf;
use thiserror::Error;

use crate::{domain::StubKind, error::ErrorCategory};

/// Errors that occur while loading stubs, writing files or registering
/// bindings.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// No stub source provides this stub.
    #[error("Stub '{stub}' not found in {searched}")]
    StubNotFound { stub: StubKind, searched: String },

    /// The stub exists but could not be read.
    #[error("Stub '{stub}' could not be read from {location}: {reason}")]
    StubUnreadable {
        stub: StubKind,
        location: String,
        reason: String,
    },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The dependency registry refused a binding.
    #[error("Binding for '{contract}' rejected: {reason}")]
    BindingRejected { contract: String, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::StubNotFound { stub, searched } => vec![
                format!("Add {} to {}", stub.file_name(), searched),
                "Or unset stubs_path / STUBWRIGHT_STUBS_DIR to use the built-in stubs".into(),
                "Run: stubwright init --stubs to publish editable copies".into(),
            ],
            Self::StubUnreadable { location, .. } => vec![
                format!("Check that {} holds a readable, non-empty UTF-8 stub", location),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check --root points at the application directory".into(),
            ],
            Self::BindingRejected { contract, .. } => vec![format!(
                "Review the [bindings.repositories] entry for '{}'",
                contract
            )],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::StubNotFound { .. } => ErrorCategory::NotFound,
            Self::StubUnreadable { .. } | Self::FilesystemError { .. } => ErrorCategory::Io,
            Self::BindingRejected { .. } => ErrorCategory::Configuration,
        }
    }
}
