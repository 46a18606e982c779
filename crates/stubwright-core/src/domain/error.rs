// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (carried into reports and test assertions)
/// - Categorizable (for CLI display and exit codes)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Invalid argument '{value}': {reason}")]
    InvalidArgument { value: String, reason: String },

    #[error("Invalid {field} setting '{value}': {reason}")]
    InvalidSetting {
        field: &'static str,
        value: String,
        reason: String,
    },

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    #[error("Invalid binding '{contract}' => '{implementation}': {reason}")]
    InvalidBinding {
        contract: String,
        implementation: String,
        reason: String,
    },
}

impl DomainError {
    /// Shorthand for the most common variant.
    pub fn invalid_argument(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidArgument { .. } => vec![
                "Names are slash-separated class paths, e.g. Common/Item".into(),
                "Each segment must start with a letter or underscore".into(),
                "The class name (last segment) must start with a letter that has an uppercase form"
                    .into(),
            ],
            Self::InvalidSetting { field, .. } => vec![
                format!("Check the '{}' key in stubwright.toml", field),
                "Run: stubwright config show".into(),
            ],
            Self::InvalidBinding { contract, .. } => vec![
                format!("Fix the [bindings.repositories] entry for '{}'", contract),
                "Both sides must be fully-qualified class names, e.g. App\\Repositories\\ItemRepository".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidArgument { .. } => ErrorCategory::Validation,
            Self::InvalidSetting { .. } | Self::InvalidBinding { .. } => {
                ErrorCategory::Configuration
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
}
