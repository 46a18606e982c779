//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and turned into the typed
//! [`GeneratorSettings`] and [`BindingTable`] core works with.  The CLI
//! layer owns config; the core crate never sees a configuration key.
//!
//! # Resolution order (highest priority first)
//!
//! 1. Environment variables: `STUBWRIGHT__REPOSITORY_PATH`, ...
//! 2. One config file: `--config FILE`, else `<root>/stubwright.toml`, else
//!    the user config file (`directories::ProjectDirs`)
//! 3. Built-in defaults (always present)
//!
//! `[bindings.repositories]` is only read from the file.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, anyhow, bail};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use stubwright_core::domain::{
    ArtifactKind, ArtifactSettings, BindingTable, DomainError, GeneratorSettings,
};

use crate::error::{CliError, CliResult};

/// Name of the project-level configuration file.
pub const PROJECT_CONFIG_FILE: &str = "stubwright.toml";

/// Prefix of configuration environment variables (`STUBWRIGHT__KEY`).
pub const ENV_PREFIX: &str = "STUBWRIGHT";

/// Commented default file written by `stubwright init`.
pub const DEFAULT_CONFIG_TOML: &str = r#"# stubwright configuration
#
# Relative paths resolve against the application root (--root, default: the
# current directory). Every key can be overridden with an environment
# variable such as STUBWRIGHT__REPOSITORY_PATH.

repository_path = "app/Repositories"
transformer_path = "app/Transformers"
filter_path = "app/Filters"

repository_suffix = "Repository"
transformer_suffix = "Transformer"
filter_suffix = "ListFilter"
interface_suffix = "RepositoryInterface"

# Put interfaces in an Interfaces/ sub-folder and sub-namespace.
interface_subfolder = false

model_namespace = "App\\Models"
file_extension = "php"

# Explicit base namespaces. When unset they are derived from the paths.
# repository_namespace = "App\\Repositories"
# transformer_namespace = "App\\Transformers"
# filter_namespace = "App\\Filters"

# Directory holding repository.stub, repository.interface.stub,
# transformer.stub and filter.stub. When set it is the only stub source.
# stubs_path = "stubs/stubwright"

[bindings.repositories]
# "App\\Repositories\\ItemRepositoryInterface" = "App\\Repositories\\ItemRepository"
"#;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub repository_path: PathBuf,
    pub transformer_path: PathBuf,
    pub filter_path: PathBuf,

    pub repository_suffix: String,
    pub transformer_suffix: String,
    pub filter_suffix: String,
    pub interface_suffix: String,
    pub interface_subfolder: bool,

    pub model_namespace: String,
    pub file_extension: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository_namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transformer_namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_namespace: Option<String>,

    /// Authoritative stubs directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stubs_path: Option<PathBuf>,

    /// Raw `[bindings]` section; read by [`read_bindings`], not by `config`.
    #[serde(skip_deserializing)]
    pub bindings: BindingsConfig,

    /// File the values came from, if any.
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

/// The `[bindings]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingsConfig {
    /// Interface → implementation, sorted by interface name.
    pub repositories: BTreeMap<String, String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        let defaults = |kind: ArtifactKind| ArtifactSettings::defaults_for(kind);
        Self {
            repository_path: defaults(ArtifactKind::Repository).path,
            transformer_path: defaults(ArtifactKind::Transformer).path,
            filter_path: defaults(ArtifactKind::Filter).path,
            repository_suffix: defaults(ArtifactKind::Repository).suffix,
            transformer_suffix: defaults(ArtifactKind::Transformer).suffix,
            filter_suffix: defaults(ArtifactKind::Filter).suffix,
            interface_suffix: GeneratorSettings::DEFAULT_INTERFACE_SUFFIX.into(),
            interface_subfolder: false,
            model_namespace: GeneratorSettings::DEFAULT_MODEL_NAMESPACE.into(),
            file_extension: GeneratorSettings::DEFAULT_FILE_EXTENSION.into(),
            repository_namespace: None,
            transformer_namespace: None,
            filter_namespace: None,
            stubs_path: None,
            bindings: BindingsConfig::default(),
            source: None,
        }
    }
}

impl AppConfig {
    /// Load configuration for the application at `root`.
    ///
    /// `explicit` is the `--config` path; it must exist. Any failure is a
    /// configuration error (exit code 4).
    #[instrument(skip_all, fields(root = %root.display()))]
    pub fn load(explicit: Option<&Path>, root: &Path) -> CliResult<Self> {
        Self::load_inner(explicit, root).map_err(|e| CliError::ConfigError {
            message: format!("{e:#}"),
            source: Some(e.into()),
        })
    }

    fn load_inner(explicit: Option<&Path>, root: &Path) -> anyhow::Result<Self> {
        let file = match explicit {
            Some(path) if !path.is_file() => {
                bail!("config file not found: {}", path.display())
            }
            Some(path) => Some(path.to_path_buf()),
            None => Self::discover(root),
        };

        let mut builder = Config::builder();
        if let Some(path) = &file {
            debug!(path = %path.display(), "reading config file");
            builder = builder.add_source(
                File::new(&path.to_string_lossy(), FileFormat::Toml).required(true),
            );
        }
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .try_parsing(true),
        );

        let mut config: AppConfig = builder
            .build()
            .context("failed to read configuration")?
            .try_deserialize()
            .context("invalid configuration value")?;

        if let Some(path) = &file {
            config.bindings = read_bindings(path)?;
        }
        config.source = file;
        Ok(config)
    }

    /// First existing config file for `root`, if any.
    pub fn discover(root: &Path) -> Option<PathBuf> {
        let project = root.join(PROJECT_CONFIG_FILE);
        if project.is_file() {
            return Some(project);
        }
        Self::user_config_path().filter(|p| p.is_file())
    }

    /// Path to the per-user configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness.
    pub fn user_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "stubwright", "stubwright")
            .map(|d| d.config_dir().join("config.toml"))
    }

    /// Typed, validated generator settings rooted at `root`.
    pub fn to_settings(&self, root: &Path) -> Result<GeneratorSettings, DomainError> {
        let settings = GeneratorSettings {
            app_root: root.to_path_buf(),
            repository: ArtifactSettings {
                path: self.repository_path.clone(),
                suffix: self.repository_suffix.clone(),
                namespace: self.repository_namespace.clone(),
            },
            transformer: ArtifactSettings {
                path: self.transformer_path.clone(),
                suffix: self.transformer_suffix.clone(),
                namespace: self.transformer_namespace.clone(),
            },
            filter: ArtifactSettings {
                path: self.filter_path.clone(),
                suffix: self.filter_suffix.clone(),
                namespace: self.filter_namespace.clone(),
            },
            interface_suffix: self.interface_suffix.clone(),
            interface_subfolder: self.interface_subfolder,
            model_namespace: self.model_namespace.clone(),
            file_extension: self.file_extension.clone(),
        };
        settings.validate()?;
        Ok(settings)
    }

    /// The immutable binding table; malformed entries are rejected.
    pub fn binding_table(&self) -> Result<BindingTable, DomainError> {
        BindingTable::from_pairs(
            self.bindings
                .repositories
                .iter()
                .map(|(c, i)| (c.as_str(), i.as_str())),
        )
    }
}

/// Read `[bindings.repositories]` straight from the TOML file.
///
/// Every value must be a string; anything else is an error rather than
/// being skipped.
pub fn read_bindings(path: &Path) -> anyhow::Result<BindingsConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let table: toml::Table =
        toml::from_str(&text).with_context(|| format!("failed to parse {}", path.display()))?;

    let Some(bindings) = table.get("bindings") else {
        return Ok(BindingsConfig::default());
    };
    let bindings = bindings
        .as_table()
        .ok_or_else(|| anyhow!("[bindings] must be a table"))?;
    let Some(repositories) = bindings.get("repositories") else {
        return Ok(BindingsConfig::default());
    };
    let repositories = repositories
        .as_table()
        .ok_or_else(|| anyhow!("[bindings.repositories] must be a table"))?;

    let mut out = BTreeMap::new();
    for (contract, value) in repositories {
        let implementation = value.as_str().ok_or_else(|| {
            anyhow!(
                "binding for '{contract}' must be a class name string, found {}",
                value.type_str()
            )
        })?;
        out.insert(contract.clone(), implementation.to_string());
    }
    Ok(BindingsConfig { repositories: out })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &Path, text: &str) -> PathBuf {
        let path = dir.join(PROJECT_CONFIG_FILE);
        fs::write(&path, text).unwrap();
        path
    }

    #[test]
    fn defaults_match_documented_values() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.repository_path, PathBuf::from("app/Repositories"));
        assert_eq!(cfg.transformer_path, PathBuf::from("app/Transformers"));
        assert_eq!(cfg.filter_path, PathBuf::from("app/Filters"));
        assert_eq!(cfg.repository_suffix, "Repository");
        assert_eq!(cfg.interface_suffix, "RepositoryInterface");
        assert!(!cfg.interface_subfolder);
        assert_eq!(cfg.model_namespace, "App\\Models");
        assert_eq!(cfg.file_extension, "php");
        assert!(cfg.stubs_path.is_none());
        assert!(cfg.bindings.repositories.is_empty());
    }

    #[test]
    fn published_default_file_parses_to_defaults() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), DEFAULT_CONFIG_TOML);

        let cfg = AppConfig::load(None, temp.path()).unwrap();
        let expected = AppConfig {
            source: Some(temp.path().join(PROJECT_CONFIG_FILE)),
            ..AppConfig::default()
        };
        assert_eq!(cfg, expected);
    }

    #[test]
    fn project_file_overrides_defaults() {
        let temp = TempDir::new().unwrap();
        write_config(
            temp.path(),
            r#"
repository_path = "src/Repos"
interface_subfolder = true

[bindings.repositories]
"App\\Repos\\ItemRepositoryInterface" = "App\\Repos\\ItemRepository"
"#,
        );

        let cfg = AppConfig::load(None, temp.path()).unwrap();
        assert_eq!(cfg.repository_path, PathBuf::from("src/Repos"));
        assert!(cfg.interface_subfolder);
        assert_eq!(cfg.filter_path, PathBuf::from("app/Filters"));

        let table = cfg.binding_table().unwrap();
        assert_eq!(
            table.resolve("App\\Repos\\ItemRepositoryInterface"),
            Some("App\\Repos\\ItemRepository")
        );
    }

    #[test]
    fn missing_explicit_file_is_config_error() {
        let temp = TempDir::new().unwrap();
        let err = AppConfig::load(Some(&temp.path().join("nope.toml")), temp.path()).unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn non_string_binding_is_rejected() {
        let temp = TempDir::new().unwrap();
        let path = write_config(
            temp.path(),
            "[bindings.repositories]\n\"App\\\\ItemInterface\" = 42\n",
        );

        let err = read_bindings(&path).unwrap_err();
        assert!(err.to_string().contains("App\\ItemInterface"));
        assert!(AppConfig::load(None, temp.path()).is_err());
    }

    #[test]
    fn bindings_from_file_are_sorted_by_contract() {
        let temp = TempDir::new().unwrap();
        write_config(
            temp.path(),
            r#"
[bindings.repositories]
"App\\ZetaInterface" = "App\\Zeta"
"App\\AlphaInterface" = "App\\Alpha"
"#,
        );

        let table = AppConfig::load(None, temp.path())
            .unwrap()
            .binding_table()
            .unwrap();
        let contracts: Vec<_> = table.iter().map(|b| b.contract()).collect();
        assert_eq!(contracts, ["App\\AlphaInterface", "App\\ZetaInterface"]);
    }

    #[test]
    fn invalid_class_name_binding_fails_table_build() {
        let mut cfg = AppConfig::default();
        cfg.bindings
            .repositories
            .insert("App\\Item Interface".into(), "App\\ItemRepository".into());
        assert!(cfg.binding_table().is_err());
    }

    #[test]
    fn settings_resolve_against_root() {
        let settings = AppConfig::default().to_settings(Path::new("/srv/app")).unwrap();
        assert_eq!(
            settings.base_directory(ArtifactKind::Repository),
            PathBuf::from("/srv/app/app/Repositories")
        );
        assert_eq!(
            settings.base_namespace(ArtifactKind::Filter).unwrap(),
            "App\\Filters"
        );
    }

    #[test]
    fn empty_suffix_fails_validation() {
        let cfg = AppConfig {
            repository_suffix: String::new(),
            ..AppConfig::default()
        };
        assert!(cfg.to_settings(Path::new("/srv/app")).is_err());
    }

    #[test]
    fn serializes_with_bindings_last() {
        let mut cfg = AppConfig::default();
        cfg.bindings
            .repositories
            .insert("App\\AInterface".into(), "App\\A".into());
        let text = toml::to_string_pretty(&cfg).unwrap();
        assert!(text.contains("repository_path = \"app/Repositories\""));
        assert!(text.contains("[bindings.repositories]"));
        assert!(!text.contains("stubs_path"));
    }
}
