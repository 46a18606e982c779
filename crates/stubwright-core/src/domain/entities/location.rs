use std::path::{Path, PathBuf};

use serde::Serialize;

/// Where the artifacts of one request land, and under which namespaces.
///
/// Invariant: `target_directory` is the configured base directory or a
/// descendant of it; file paths are `<directory>/<Name>.<ext>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedLocation {
    pub(crate) target_directory: PathBuf,
    pub(crate) namespace: String,
    pub(crate) model_namespace: String,
    pub(crate) class_file: PathBuf,
    pub(crate) interface: Option<InterfaceLocation>,
}

/// Interface placement; present only for artifacts that have one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterfaceLocation {
    pub(crate) directory: PathBuf,
    pub(crate) namespace: String,
    pub(crate) file: PathBuf,
}

impl ResolvedLocation {
    pub fn target_directory(&self) -> &Path {
        &self.target_directory
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn model_namespace(&self) -> &str {
        &self.model_namespace
    }

    pub fn class_file(&self) -> &Path {
        &self.class_file
    }

    pub fn interface(&self) -> Option<&InterfaceLocation> {
        self.interface.as_ref()
    }

    pub fn interface_directory(&self) -> Option<&Path> {
        self.interface.as_ref().map(|i| i.directory.as_path())
    }

    pub fn interface_namespace(&self) -> Option<&str> {
        self.interface.as_ref().map(|i| i.namespace.as_str())
    }

    pub fn interface_file(&self) -> Option<&Path> {
        self.interface.as_ref().map(|i| i.file.as_path())
    }
}

impl InterfaceLocation {
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn file(&self) -> &Path {
        &self.file
    }
}
