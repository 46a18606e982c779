//! Boot: everything built once from configuration before a command runs.

use std::path::PathBuf;

use tracing::{debug, instrument};

use stubwright_adapters::{MemoryRegistry, StubDiscovery};
use stubwright_core::{
    application::{BindingService, ports::StubStore},
    domain::{BindingTable, GeneratorSettings},
};

use crate::{
    cli::GlobalArgs,
    config::AppConfig,
    error::{CliResult, IntoCli},
};

/// Immutable state shared by reference with every command.
#[derive(Debug)]
pub struct AppContext {
    pub root: PathBuf,
    pub config: AppConfig,
    pub settings: GeneratorSettings,
    pub bindings: BindingTable,
    pub registry: MemoryRegistry,
}

impl AppContext {
    /// Load config, validate settings, build and register the bindings.
    ///
    /// Malformed settings or bindings fail here with a configuration error,
    /// before any command touches the filesystem.
    #[instrument(skip_all)]
    pub fn boot(global: &GlobalArgs) -> CliResult<Self> {
        let root = global
            .app_root()
            .with_cli_context(|| "cannot determine the application root")?;
        let config = AppConfig::load(global.config.as_deref(), &root)?;
        let settings = config.to_settings(&root)?;
        let bindings = config.binding_table()?;

        let mut registry = MemoryRegistry::new();
        BindingService::register_all(&bindings, &mut registry)?;

        debug!(
            root = %root.display(),
            config = ?config.source,
            bindings = bindings.len(),
            "context ready"
        );
        Ok(Self {
            root,
            config,
            settings,
            bindings,
            registry,
        })
    }

    /// Stub store for this run: `$STUBWRIGHT_STUBS_DIR`, `stubs_path`, the
    /// published stubs, then the built-in ones.
    pub fn stub_store(&self) -> Box<dyn StubStore> {
        StubDiscovery::new(&self.root)
            .with_env()
            .configured(self.config.stubs_path.clone())
            .build()
    }
}
