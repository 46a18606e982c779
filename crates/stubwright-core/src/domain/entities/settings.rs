//! Generator settings: the typed, validated configuration core works from.
//!
//! The CLI owns the configuration file; it converts what it loaded into a
//! [`GeneratorSettings`] once at startup. Core never reads configuration
//! keys by name.

use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::{
    error::DomainError, naming::ucfirst, validation::DomainValidator, value_objects::ArtifactKind,
};

/// Location and naming conventions for one artifact kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactSettings {
    /// Base directory; relative paths are resolved against the app root.
    pub path: PathBuf,
    /// Appended to the capitalized base name to form the class name.
    pub suffix: String,
    /// Explicit base namespace. Derived from `path` when absent.
    pub namespace: Option<String>,
}

impl ArtifactSettings {
    pub fn defaults_for(kind: ArtifactKind) -> Self {
        Self {
            path: PathBuf::from(kind.default_path()),
            suffix: kind.default_suffix().to_string(),
            namespace: None,
        }
    }
}

/// Everything the resolver and layout builder need, with documented defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorSettings {
    /// Root of the host application (the directory holding `app/`).
    pub app_root: PathBuf,
    pub repository: ArtifactSettings,
    pub transformer: ArtifactSettings,
    pub filter: ArtifactSettings,
    /// Appended to the capitalized base name to form the interface name.
    pub interface_suffix: String,
    /// Place interfaces under an `Interfaces` sub-folder and sub-namespace.
    pub interface_subfolder: bool,
    /// Namespace that holds the models, e.g. `App\Models`.
    pub model_namespace: String,
    /// Extension of generated files, without the dot.
    pub file_extension: String,
}

impl GeneratorSettings {
    pub const DEFAULT_INTERFACE_SUFFIX: &'static str = "RepositoryInterface";
    pub const DEFAULT_MODEL_NAMESPACE: &'static str = "App\\Models";
    pub const DEFAULT_FILE_EXTENSION: &'static str = "php";

    /// Default settings rooted at `app_root`.
    pub fn new(app_root: impl Into<PathBuf>) -> Self {
        Self {
            app_root: app_root.into(),
            repository: ArtifactSettings::defaults_for(ArtifactKind::Repository),
            transformer: ArtifactSettings::defaults_for(ArtifactKind::Transformer),
            filter: ArtifactSettings::defaults_for(ArtifactKind::Filter),
            interface_suffix: Self::DEFAULT_INTERFACE_SUFFIX.to_string(),
            interface_subfolder: false,
            model_namespace: Self::DEFAULT_MODEL_NAMESPACE.to_string(),
            file_extension: Self::DEFAULT_FILE_EXTENSION.to_string(),
        }
    }

    pub fn artifact(&self, kind: ArtifactKind) -> &ArtifactSettings {
        match kind {
            ArtifactKind::Repository => &self.repository,
            ArtifactKind::Transformer => &self.transformer,
            ArtifactKind::Filter => &self.filter,
        }
    }

    /// Absolute (or root-relative) base directory for `kind`.
    pub fn base_directory(&self, kind: ArtifactKind) -> PathBuf {
        let path = &self.artifact(kind).path;
        if path.is_absolute() {
            path.clone()
        } else {
            self.app_root.join(path)
        }
    }

    /// Base namespace for `kind`, e.g. `App\Repositories`.
    ///
    /// An explicit namespace wins. Otherwise the configured path is turned
    /// into a namespace: the app-root prefix is stripped, separators become
    /// `\` and the first character is uppercased (`app/Filters` gives
    /// `App\Filters`).
    pub fn base_namespace(&self, kind: ArtifactKind) -> Result<String, DomainError> {
        let artifact = self.artifact(kind);
        if let Some(ns) = &artifact.namespace {
            return Ok(ucfirst(ns.trim_matches('\\')));
        }

        let relative = if artifact.path.is_absolute() {
            artifact.path.strip_prefix(&self.app_root).map_err(|_| {
                DomainError::InvalidSetting {
                    field: "path",
                    value: artifact.path.display().to_string(),
                    reason: format!(
                        "lies outside the application root {}; set an explicit namespace",
                        self.app_root.display()
                    ),
                }
            })?
        } else {
            artifact.path.as_path()
        };

        let segments = namespace_segments(relative).ok_or_else(|| DomainError::InvalidSetting {
            field: "path",
            value: artifact.path.display().to_string(),
            reason: "cannot derive a namespace from this path".into(),
        })?;

        Ok(ucfirst(&segments.join("\\")))
    }

    /// Check every field eagerly so bad configuration fails at startup.
    pub fn validate(&self) -> Result<(), DomainError> {
        for kind in ArtifactKind::ALL {
            let artifact = self.artifact(kind);
            if artifact.path.as_os_str().is_empty() {
                return Err(DomainError::InvalidSetting {
                    field: "path",
                    value: String::new(),
                    reason: format!("{kind} path cannot be empty"),
                });
            }
            DomainValidator::validate_suffix("suffix", &artifact.suffix)?;
            let namespace = self.base_namespace(kind)?;
            DomainValidator::validate_namespace("namespace", &namespace)?;
        }

        DomainValidator::validate_suffix("interface_suffix", &self.interface_suffix)?;
        DomainValidator::validate_namespace("model_namespace", &self.model_namespace)?;

        let ext = &self.file_extension;
        if ext.is_empty() || ext.starts_with('.') || ext.contains(['/', '\\']) {
            return Err(DomainError::InvalidSetting {
                field: "file_extension",
                value: ext.clone(),
                reason: "expected a bare extension such as 'php'".into(),
            });
        }

        Ok(())
    }
}

/// Normal path components as strings; `None` for `..`, roots or non-UTF-8.
fn namespace_segments(path: &Path) -> Option<Vec<&str>> {
    let mut segments = Vec::new();
    for component in path.components() {
        match component {
            Component::Normal(part) => segments.push(part.to_str()?),
            Component::CurDir => {}
            _ => return None,
        }
    }
    (!segments.is_empty()).then_some(segments)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_conventional_layout() {
        let s = GeneratorSettings::new("/srv/app");
        assert_eq!(s.repository.path, PathBuf::from("app/Repositories"));
        assert_eq!(s.repository.suffix, "Repository");
        assert_eq!(s.filter.suffix, "ListFilter");
        assert_eq!(s.interface_suffix, "RepositoryInterface");
        assert!(!s.interface_subfolder);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn base_directory_is_rooted() {
        let s = GeneratorSettings::new("/srv/app");
        assert_eq!(
            s.base_directory(ArtifactKind::Transformer),
            PathBuf::from("/srv/app/app/Transformers")
        );
    }

    #[test]
    fn base_namespace_derived_from_path() {
        let s = GeneratorSettings::new("/srv/app");
        assert_eq!(
            s.base_namespace(ArtifactKind::Filter).unwrap(),
            "App\\Filters"
        );
    }

    #[test]
    fn absolute_path_inside_root_strips_prefix() {
        let mut s = GeneratorSettings::new("/srv/app");
        s.repository.path = PathBuf::from("/srv/app/app/Data/Repositories");
        assert_eq!(
            s.base_namespace(ArtifactKind::Repository).unwrap(),
            "App\\Data\\Repositories"
        );
    }

    #[test]
    fn absolute_path_outside_root_needs_namespace() {
        let mut s = GeneratorSettings::new("/srv/app");
        s.repository.path = PathBuf::from("/opt/shared/Repositories");
        assert!(s.base_namespace(ArtifactKind::Repository).is_err());

        s.repository.namespace = Some("\\Shared\\Repositories".into());
        assert_eq!(
            s.base_namespace(ArtifactKind::Repository).unwrap(),
            "Shared\\Repositories"
        );
    }

    #[test]
    fn parent_components_are_rejected() {
        let mut s = GeneratorSettings::new("/srv/app");
        s.filter.path = PathBuf::from("../Filters");
        assert!(matches!(
            s.validate(),
            Err(DomainError::InvalidSetting { field: "path", .. })
        ));
    }

    #[test]
    fn empty_suffix_is_rejected() {
        let mut s = GeneratorSettings::new("/srv/app");
        s.transformer.suffix = String::new();
        assert!(s.validate().is_err());
    }

    #[test]
    fn dotted_extension_is_rejected() {
        let mut s = GeneratorSettings::new("/srv/app");
        s.file_extension = ".php".into();
        assert!(matches!(
            s.validate(),
            Err(DomainError::InvalidSetting {
                field: "file_extension",
                ..
            })
        ));
    }
}
