//! Generator Service - main application orchestrator.
//!
//! This service coordinates one `make:*` command:
//! 1. Resolve the identity from the raw name
//! 2. Build the target location
//! 3. Load and fill every stub the artifact needs
//! 4. Write each file, class before interface
//!
//! Steps 1-3 happen before anything touches the filesystem, so a bad name
//! or a missing stub never leaves a directory behind.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, StubStore},
    },
    domain::{
        ArtifactKind, GeneratorRequest, GeneratorSettings, LayoutBuilder, NameResolver,
        PlaceholderMap, ResolvedIdentity, ResolvedLocation, StubKind,
    },
    error::StubwrightResult,
};

/// One file the generator produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedArtifact {
    /// Confirmation label, e.g. `Repository` or `Interface`.
    pub label: &'static str,
    pub stub: StubKind,
    pub class_name: String,
    pub namespace: String,
    pub directory: PathBuf,
    pub path: PathBuf,
    #[serde(skip)]
    pub content: String,
}

/// Everything resolved for one request, ready to be written.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationPlan {
    pub kind: ArtifactKind,
    pub identity: ResolvedIdentity,
    pub location: ResolvedLocation,
    pub artifacts: Vec<GeneratedArtifact>,
}

impl GenerationPlan {
    /// Paths of every file in write order.
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.artifacts.iter().map(|a| a.path.as_path())
    }
}

/// Main generation service.
///
/// Owns the stub source, the filesystem and the settings for the whole run.
pub struct GeneratorService {
    stubs: Box<dyn StubStore>,
    filesystem: Box<dyn Filesystem>,
    settings: GeneratorSettings,
}

impl GeneratorService {
    /// Create a new generator service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use stubwright_core::application::GeneratorService;
    ///
    /// let service = GeneratorService::new(
    ///     stubs,      // impl StubStore
    ///     filesystem, // impl Filesystem
    ///     settings,   // GeneratorSettings
    /// );
    /// ```
    pub fn new(
        stubs: Box<dyn StubStore>,
        filesystem: Box<dyn Filesystem>,
        settings: GeneratorSettings,
    ) -> Self {
        Self {
            stubs,
            filesystem,
            settings,
        }
    }

    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    /// Resolve names and paths and fill every stub, without writing.
    ///
    /// This is what `--dry-run` prints.
    #[instrument(skip_all, fields(kind = %kind, name = %request.raw_name()))]
    pub fn plan(
        &self,
        kind: ArtifactKind,
        request: &GeneratorRequest,
    ) -> StubwrightResult<GenerationPlan> {
        let identity = NameResolver::new(kind, &self.settings).resolve(request)?;
        let location = LayoutBuilder::new(&self.settings).locate(kind, &identity)?;
        let placeholders = PlaceholderMap::for_artifact(kind, &identity, &location);

        let mut artifacts = vec![GeneratedArtifact {
            label: kind.label(),
            stub: kind.class_stub(),
            class_name: identity.class_name().to_string(),
            namespace: location.namespace().to_string(),
            directory: location.target_directory().to_path_buf(),
            path: location.class_file().to_path_buf(),
            content: self.fill(kind.class_stub(), &placeholders)?,
        }];

        if let (Some(name), Some(interface)) = (identity.interface_name(), location.interface()) {
            artifacts.push(GeneratedArtifact {
                label: "Interface",
                stub: StubKind::RepositoryInterface,
                class_name: name.to_string(),
                namespace: interface.namespace().to_string(),
                directory: interface.directory().to_path_buf(),
                path: interface.file().to_path_buf(),
                content: self.fill(StubKind::RepositoryInterface, &placeholders)?,
            });
        }

        debug!(artifacts = artifacts.len(), "Generation planned");
        Ok(GenerationPlan {
            kind,
            identity,
            location,
            artifacts,
        })
    }

    /// Plan and then write every artifact.
    ///
    /// `on_written` runs after each successful write, in order. A failed
    /// write aborts the run; later artifacts are not attempted.
    #[instrument(skip_all, fields(kind = %kind, name = %request.raw_name()))]
    pub fn generate(
        &self,
        kind: ArtifactKind,
        request: &GeneratorRequest,
        mut on_written: impl FnMut(&GeneratedArtifact),
    ) -> StubwrightResult<GenerationPlan> {
        let plan = self.plan(kind, request)?;

        for artifact in &plan.artifacts {
            if !self.filesystem.exists(&artifact.directory) {
                debug!(path = %artifact.directory.display(), "Creating directory");
                self.filesystem.create_dir_all(&artifact.directory)?;
            }
            self.filesystem.write_file(&artifact.path, &artifact.content)?;
            info!(
                label = artifact.label,
                path = %artifact.path.display(),
                "Artifact written"
            );
            on_written(artifact);
        }

        Ok(plan)
    }

    fn fill(&self, stub: StubKind, placeholders: &PlaceholderMap) -> StubwrightResult<String> {
        let text = self.stubs.load(stub)?;
        if text.trim().is_empty() {
            return Err(ApplicationError::StubUnreadable {
                stub,
                location: self.stubs.describe(),
                reason: "stub is empty".into(),
            }
            .into());
        }
        Ok(placeholders.fill(&text))
    }
}
