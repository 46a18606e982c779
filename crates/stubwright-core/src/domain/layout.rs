//! Path and namespace building.
//!
//! Combines the configured base directory and namespace with a resolved
//! identity. Directory separators in the sub-path mirror the `\` separators
//! of the sub-namespace. Nothing here touches the filesystem; directories
//! are created later by the writer.

use crate::domain::{
    entities::{
        identity::ResolvedIdentity,
        location::{InterfaceLocation, ResolvedLocation},
        settings::GeneratorSettings,
    },
    error::DomainError,
    naming::ucfirst,
    value_objects::ArtifactKind,
};

/// Folder and namespace segment holding interfaces when the sub-folder
/// option is on.
pub const INTERFACES_SEGMENT: &str = "Interfaces";

/// Builds [`ResolvedLocation`]s from settings.
#[derive(Debug, Clone, Copy)]
pub struct LayoutBuilder<'a> {
    settings: &'a GeneratorSettings,
}

impl<'a> LayoutBuilder<'a> {
    pub fn new(settings: &'a GeneratorSettings) -> Self {
        Self { settings }
    }

    /// Place `identity` for `kind`.
    ///
    /// Deterministic: identical inputs always give identical locations.
    pub fn locate(
        &self,
        kind: ArtifactKind,
        identity: &ResolvedIdentity,
    ) -> Result<ResolvedLocation, DomainError> {
        let settings = self.settings;
        let sub_namespace = identity.sub_namespace();

        let mut target_directory = settings.base_directory(kind);
        target_directory.extend(identity.sub_segments());
        let namespace = ucfirst(&join_namespace(
            &settings.base_namespace(kind)?,
            &sub_namespace,
        ));
        let model_namespace = join_namespace(
            settings.model_namespace.trim_start_matches('\\'),
            &sub_namespace,
        );

        let ext = &settings.file_extension;
        let class_file = target_directory.join(format!("{}.{ext}", identity.class_name()));

        let interface = identity.interface_name().map(|interface_name| {
            let (directory, namespace) = if settings.interface_subfolder {
                (
                    target_directory.join(INTERFACES_SEGMENT),
                    join_namespace(&namespace, INTERFACES_SEGMENT),
                )
            } else {
                (target_directory.clone(), namespace.clone())
            };
            InterfaceLocation {
                file: directory.join(format!("{interface_name}.{ext}")),
                directory,
                namespace,
            }
        });

        Ok(ResolvedLocation {
            target_directory,
            namespace,
            model_namespace,
            class_file,
            interface,
        })
    }
}

fn join_namespace(base: &str, tail: &str) -> String {
    match (base.is_empty(), tail.is_empty()) {
        (_, true) => base.to_string(),
        (true, false) => tail.to_string(),
        (false, false) => format!("{base}\\{tail}"),
    }
}
