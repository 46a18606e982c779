//! `stubwright config`: inspect the effective configuration.

use serde_json::Value;

use crate::{
    cli::ConfigCommands,
    config::{AppConfig, PROJECT_CONFIG_FILE},
    context::AppContext,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, ctx: &AppContext, output: &OutputManager) -> CliResult<()> {
    let config = &ctx.config;
    match cmd {
        ConfigCommands::Show => {
            if output.is_json() {
                output.json(&to_json(config)?)?;
            } else {
                output.header("Current Configuration:")?;
                let serialised =
                    toml::to_string_pretty(config).map_err(|e| CliError::ConfigError {
                        message: format!("Failed to serialise config: {e}"),
                        source: Some(Box::new(e)),
                    })?;
                output.print(&serialised)?;
            }
        }

        ConfigCommands::Get { key } => {
            let value = get_config_value(config, &key)?;
            if output.is_json() {
                output.json(&value)?;
            } else {
                output.print(&render(&value))?;
            }
        }

        ConfigCommands::Path => match &config.source {
            Some(path) => output.print(&path.display().to_string())?,
            None => output.info(&format!(
                "No config file found; using defaults. Create one with 'stubwright init' at {}",
                ctx.root.join(PROJECT_CONFIG_FILE).display()
            ))?,
        },
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn to_json(config: &AppConfig) -> CliResult<Value> {
    serde_json::to_value(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })
}

/// Look up a dotted key such as `bindings.repositories`.
fn get_config_value(config: &AppConfig, key: &str) -> CliResult<Value> {
    let root = to_json(config)?;
    key.split('.')
        .try_fold(&root, |value, part| value.get(part))
        .cloned()
        .ok_or_else(|| CliError::ConfigError {
            message: format!("Unknown config key: '{key}'"),
            source: None,
        })
}

/// Strings print bare; everything else prints as JSON.
fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_known_key() {
        let cfg = AppConfig::default();
        let value = get_config_value(&cfg, "repository_path").unwrap();
        assert_eq!(render(&value), "app/Repositories");
    }

    #[test]
    fn get_nested_key() {
        let mut cfg = AppConfig::default();
        cfg.bindings
            .repositories
            .insert("App\\AInterface".into(), "App\\A".into());
        let value = get_config_value(&cfg, "bindings.repositories").unwrap();
        assert_eq!(value["App\\AInterface"], "App\\A");
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        assert!(matches!(
            get_config_value(&cfg, "does.not.exist"),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn get_bool_renders_as_json() {
        let cfg = AppConfig::default();
        let value = get_config_value(&cfg, "interface_subfolder").unwrap();
        assert_eq!(render(&value), "false");
    }
}
