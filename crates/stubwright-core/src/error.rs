//! Unified error handling for Stubwright Core.
//!
//! This module provides a unified error type that wraps domain and
//! application errors, with categories and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Stubwright Core operations.
#[derive(Debug, Error, Clone)]
pub enum StubwrightError {
    /// Naming, settings or binding rule violations.
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Stub loading, filesystem or registry failures.
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl StubwrightError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in Stubwright".into(),
                "Please report this issue at: https://github.com/stubwright/stubwright/issues"
                    .into(),
            ],
        }
    }

    /// Get error category for display and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Configuration => ErrorCategory::Configuration,
            },
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad user input (InvalidArgument).
    Validation,
    /// A stub could not be found.
    NotFound,
    /// Malformed settings or bindings.
    Configuration,
    /// Directory or file I/O failed.
    Io,
    Internal,
}

/// Convenient result type alias.
pub type StubwrightResult<T> = Result<T, StubwrightError>;
