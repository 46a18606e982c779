//! Stub placeholders and literal substitution.
//!
//! A stub is plain text containing tokens such as `{{ className }}`. Filling
//! is plain find-and-replace over an ordered list of `(token, value)` pairs:
//! no conditionals, no loops, no escaping. Tokens the map does not know are
//! left in place.

use std::fmt;

use crate::domain::{
    entities::{identity::ResolvedIdentity, location::ResolvedLocation},
    value_objects::ArtifactKind,
};

/// A named placeholder token.
///
/// The spelling, including the single spaces inside the braces, must match
/// the stub exactly for substitution to happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    Namespace,
    ClassName,
    ModelName,
    ModelNamespace,
    InterfaceName,
    InterfaceNamespace,
    ModelVar,
}

impl Placeholder {
    pub const ALL: [Placeholder; 7] = [
        Self::Namespace,
        Self::ClassName,
        Self::ModelName,
        Self::ModelNamespace,
        Self::InterfaceName,
        Self::InterfaceNamespace,
        Self::ModelVar,
    ];

    pub const fn token(&self) -> &'static str {
        match self {
            Self::Namespace => "{{ namespace }}",
            Self::ClassName => "{{ className }}",
            Self::ModelName => "{{ modelName }}",
            Self::ModelNamespace => "{{ modelNamespace }}",
            Self::InterfaceName => "{{ interfaceName }}",
            Self::InterfaceNamespace => "{{ interfaceNamespace }}",
            Self::ModelVar => "{{ modelVar }}",
        }
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Ordered placeholder → value pairs. Keys are unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceholderMap {
    entries: Vec<(Placeholder, String)>,
}

impl PlaceholderMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key`, replacing any previous value.
    pub fn insert(&mut self, key: Placeholder, value: impl Into<String>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn with(mut self, key: Placeholder, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: Placeholder) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Placeholder, &str)> {
        self.entries.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Replace every occurrence of every known token in `stub`.
    pub fn fill(&self, stub: &str) -> String {
        self.entries
            .iter()
            .fold(stub.to_string(), |text, (key, value)| {
                text.replace(key.token(), value)
            })
    }

    /// The fixed key set for one artifact kind.
    ///
    /// | kind        | keys |
    /// |-------------|------|
    /// | repository  | namespace, className, modelName, modelNamespace, interfaceName, interfaceNamespace |
    /// | transformer | namespace, modelNamespace, modelName, className, modelVar |
    /// | filter      | namespace, className |
    ///
    /// The repository map fills both the class and the interface stub.
    pub fn for_artifact(
        kind: ArtifactKind,
        identity: &ResolvedIdentity,
        location: &ResolvedLocation,
    ) -> Self {
        let mut map = Self::new()
            .with(Placeholder::Namespace, location.namespace())
            .with(Placeholder::ClassName, identity.class_name());

        if kind.uses_model() {
            map.insert(Placeholder::ModelName, identity.model_name());
            map.insert(Placeholder::ModelNamespace, location.model_namespace());
        }
        if let (Some(name), Some(namespace)) =
            (identity.interface_name(), location.interface_namespace())
        {
            map.insert(Placeholder::InterfaceName, name);
            map.insert(Placeholder::InterfaceNamespace, namespace);
        }
        if let Some(var) = identity.model_var() {
            map.insert(Placeholder::ModelVar, var);
        }
        map
    }
}
