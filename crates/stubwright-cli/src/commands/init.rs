//! `stubwright init`: publish the configuration file and the stubs.

use std::path::Path;

use tracing::instrument;

use stubwright_adapters::{BuiltinStubStore, LocalFilesystem, stub_store::PUBLISHED_STUBS_DIR};
use stubwright_core::{application::ports::Filesystem, domain::StubKind};

use crate::{
    cli::{GlobalArgs, InitArgs},
    config::{DEFAULT_CONFIG_TOML, PROJECT_CONFIG_FILE},
    error::{CliResult, IntoCli},
    output::OutputManager,
};

/// Write `stubwright.toml` (or the `--config` path) and, with `--stubs`,
/// editable copies of the built-in stubs under `stubs/stubwright`.
///
/// Existing files are kept unless `--force` is given.
#[instrument(skip_all, fields(force = args.force, stubs = args.stubs))]
pub fn execute(args: InitArgs, global: &GlobalArgs, output: &OutputManager) -> CliResult<()> {
    let root = global
        .app_root()
        .with_cli_context(|| "cannot determine the application root")?;
    let fs = LocalFilesystem::new();

    let config_path = global
        .config
        .clone()
        .unwrap_or_else(|| root.join(PROJECT_CONFIG_FILE));
    publish(&fs, &config_path, DEFAULT_CONFIG_TOML, args.force, output)?;

    if args.stubs {
        let dir = root.join(PUBLISHED_STUBS_DIR);
        fs.create_dir_all(&dir)?;
        for stub in StubKind::ALL {
            publish(
                &fs,
                &dir.join(stub.file_name()),
                BuiltinStubStore::text(stub),
                args.force,
                output,
            )?;
        }
    }

    Ok(())
}

/// Returns whether the file was written.
fn publish(
    fs: &dyn Filesystem,
    path: &Path,
    content: &str,
    force: bool,
    output: &OutputManager,
) -> CliResult<bool> {
    if fs.exists(path) && !force {
        output.warning(&format!(
            "{} already exists  (use --force to overwrite)",
            path.display()
        ))?;
        return Ok(false);
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs.create_dir_all(parent)?;
    }
    fs.write_file(path, content)?;
    output.success(&format!("Published {}", path.display()))?;
    Ok(true)
}
