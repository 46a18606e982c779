//! Stub source discovery.
//!
//! # Resolution order
//!
//! 1. **`$STUBWRIGHT_STUBS_DIR`**: environment override.
//! 2. **`stubs_path`** from configuration.
//! 3. **`<root>/stubs/stubwright`**: copies published by
//!    `stubwright init --stubs`, when that directory exists.
//! 4. The built-in stubs.
//!
//! An explicit directory (1 or 2) is authoritative: it is the only source,
//! and a stub missing from it is an error instead of a silent fallback.
//! Otherwise the published directory is layered over the built-in stubs.
//!
//! Relative directories resolve against the application root.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use stubwright_core::application::ports::StubStore;

use super::{BuiltinStubStore, DirectoryStubStore, LayeredStubStore};

/// Environment variable naming an authoritative stubs directory.
pub const STUBS_DIR_ENV: &str = "STUBWRIGHT_STUBS_DIR";

/// Where `init --stubs` publishes, relative to the application root.
pub const PUBLISHED_STUBS_DIR: &str = "stubs/stubwright";

/// A place stubs may come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StubSource {
    Environment(PathBuf),
    Configured(PathBuf),
    Published(PathBuf),
    Builtin,
}

impl StubSource {
    /// Sources 1 and 2 are used alone.
    pub fn is_authoritative(&self) -> bool {
        matches!(self, Self::Environment(_) | Self::Configured(_))
    }

    pub fn dir(&self) -> Option<&Path> {
        match self {
            Self::Environment(p) | Self::Configured(p) | Self::Published(p) => Some(p),
            Self::Builtin => None,
        }
    }
}

/// Decides which stub store a run uses.
#[derive(Debug, Clone)]
pub struct StubDiscovery {
    app_root: PathBuf,
    env_dir: Option<PathBuf>,
    configured: Option<PathBuf>,
}

impl StubDiscovery {
    pub fn new(app_root: impl Into<PathBuf>) -> Self {
        Self {
            app_root: app_root.into(),
            env_dir: None,
            configured: None,
        }
    }

    /// Pick up `$STUBWRIGHT_STUBS_DIR`. Empty values are ignored.
    pub fn with_env(self) -> Self {
        let env_dir = std::env::var_os(STUBS_DIR_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        self.env_dir(env_dir)
    }

    pub fn env_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.env_dir = dir;
        self
    }

    pub fn configured(mut self, dir: Option<PathBuf>) -> Self {
        self.configured = dir;
        self
    }

    /// Sources in the order they will be consulted.
    pub fn sources(&self) -> Vec<StubSource> {
        if let Some(dir) = &self.env_dir {
            debug!(path = %dir.display(), "stubs from ${}", STUBS_DIR_ENV);
            return vec![StubSource::Environment(self.resolve(dir))];
        }
        if let Some(dir) = &self.configured {
            debug!(path = %dir.display(), "stubs from configured stubs_path");
            return vec![StubSource::Configured(self.resolve(dir))];
        }

        let mut sources = Vec::with_capacity(2);
        let published = self.app_root.join(PUBLISHED_STUBS_DIR);
        if published.is_dir() {
            debug!(path = %published.display(), "published stubs found");
            sources.push(StubSource::Published(published));
        }
        sources.push(StubSource::Builtin);
        sources
    }

    /// Build the store for [`sources`](Self::sources).
    pub fn build(&self) -> Box<dyn StubStore> {
        let sources = self.sources();
        let store = sources
            .into_iter()
            .fold(LayeredStubStore::new(), |store, source| match source {
                StubSource::Builtin => store.with_layer(BuiltinStubStore),
                other => match other.dir() {
                    Some(dir) => store.with_layer(DirectoryStubStore::new(dir)),
                    None => store,
                },
            });
        info!(source = %store.describe(), "stub store ready");
        Box::new(store)
    }

    fn resolve(&self, dir: &Path) -> PathBuf {
        if dir.is_absolute() {
            dir.to_path_buf()
        } else {
            self.app_root.join(dir)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use stubwright_core::{domain::StubKind, error::ErrorCategory};
    use tempfile::TempDir;

    #[test]
    fn builtin_only_by_default() {
        let temp = TempDir::new().unwrap();
        let discovery = StubDiscovery::new(temp.path());
        assert_eq!(discovery.sources(), vec![StubSource::Builtin]);
    }

    #[test]
    fn published_stubs_layer_over_builtin() {
        let temp = TempDir::new().unwrap();
        let published = temp.path().join(PUBLISHED_STUBS_DIR);
        fs::create_dir_all(&published).unwrap();
        fs::write(published.join("filter.stub"), "<?php // mine").unwrap();

        let discovery = StubDiscovery::new(temp.path());
        assert_eq!(
            discovery.sources(),
            vec![StubSource::Published(published), StubSource::Builtin]
        );

        let store = discovery.build();
        assert_eq!(store.load(StubKind::Filter).unwrap(), "<?php // mine");
        assert!(store.load(StubKind::Repository).unwrap().contains("{{ className }}"));
    }

    #[test]
    fn env_beats_configured() {
        let discovery = StubDiscovery::new("/srv/app")
            .configured(Some("custom".into()))
            .env_dir(Some("/opt/stubs".into()));
        assert_eq!(
            discovery.sources(),
            vec![StubSource::Environment("/opt/stubs".into())]
        );
    }

    #[test]
    fn configured_relative_path_resolves_against_root() {
        let discovery = StubDiscovery::new("/srv/app").configured(Some("resources/stubs".into()));
        let sources = discovery.sources();
        assert_eq!(
            sources,
            vec![StubSource::Configured("/srv/app/resources/stubs".into())]
        );
        assert!(sources[0].is_authoritative());
    }

    #[test]
    fn authoritative_directory_does_not_fall_back() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("repository.stub"), "<?php").unwrap();

        let store = StubDiscovery::new("/srv/app")
            .configured(Some(temp.path().to_path_buf()))
            .build();

        assert!(store.load(StubKind::Repository).is_ok());
        let err = store.load(StubKind::RepositoryInterface).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }
}
