//! Domain value objects: ArtifactKind and StubKind.
//!
//! Pure value types: `Copy`, equality-by-value, no identity. Each carries
//! its string representation and the conventions attached to it.

use serde::{Deserialize, Serialize};
use std::fmt;

// ── ArtifactKind ─────────────────────────────────────────────────────────────

/// A family of generated source files, one per `make:*` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Repository,
    Transformer,
    Filter,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 3] = [Self::Repository, Self::Transformer, Self::Filter];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Repository => "repository",
            Self::Transformer => "transformer",
            Self::Filter => "filter",
        }
    }

    /// Human label used in confirmation lines ("Repository created: ...").
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Repository => "Repository",
            Self::Transformer => "Transformer",
            Self::Filter => "Filter",
        }
    }

    /// Default class-name suffix appended to the base name.
    pub const fn default_suffix(&self) -> &'static str {
        match self {
            Self::Repository => "Repository",
            Self::Transformer => "Transformer",
            Self::Filter => "ListFilter",
        }
    }

    /// Default base directory, relative to the application root.
    pub const fn default_path(&self) -> &'static str {
        match self {
            Self::Repository => "app/Repositories",
            Self::Transformer => "app/Transformers",
            Self::Filter => "app/Filters",
        }
    }

    /// Stub used for the main class of this artifact.
    pub const fn class_stub(&self) -> StubKind {
        match self {
            Self::Repository => StubKind::Repository,
            Self::Transformer => StubKind::Transformer,
            Self::Filter => StubKind::Filter,
        }
    }

    /// Whether an interface is generated next to the class.
    pub const fn has_interface(&self) -> bool {
        matches!(self, Self::Repository)
    }

    /// Whether the `modelName`/`modelNamespace` placeholders apply.
    pub const fn uses_model(&self) -> bool {
        matches!(self, Self::Repository | Self::Transformer)
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── StubKind ─────────────────────────────────────────────────────────────────

/// Identifies one stub template on disk or in the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StubKind {
    Repository,
    RepositoryInterface,
    Transformer,
    Filter,
}

impl StubKind {
    pub const ALL: [StubKind; 4] = [
        Self::Repository,
        Self::RepositoryInterface,
        Self::Transformer,
        Self::Filter,
    ];

    /// Fixed file name of this stub inside a stubs directory.
    pub const fn file_name(&self) -> &'static str {
        match self {
            Self::Repository => "repository.stub",
            Self::RepositoryInterface => "repository.interface.stub",
            Self::Transformer => "transformer.stub",
            Self::Filter => "filter.stub",
        }
    }
}

impl fmt::Display for StubKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_repositories_have_interfaces() {
        assert!(ArtifactKind::Repository.has_interface());
        assert!(!ArtifactKind::Transformer.has_interface());
        assert!(!ArtifactKind::Filter.has_interface());
    }

    #[test]
    fn filters_do_not_use_models() {
        assert!(!ArtifactKind::Filter.uses_model());
        assert_eq!(ArtifactKind::Filter.default_suffix(), "ListFilter");
    }

    #[test]
    fn stub_file_names_are_distinct() {
        let names: std::collections::HashSet<_> =
            StubKind::ALL.iter().map(|s| s.file_name()).collect();
        assert_eq!(names.len(), StubKind::ALL.len());
    }
}
