//! `stubwright bindings`: show the table built at boot.

use serde_json::json;

use stubwright_core::{
    application::ports::DependencyRegistry,
    domain::{DataArraySerializer, ResourceSerializer},
};

use crate::{
    cli::BindingsCommands,
    context::AppContext,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(cmd: BindingsCommands, ctx: &AppContext, output: &OutputManager) -> CliResult<()> {
    match cmd {
        BindingsCommands::List => list(ctx, output),
        BindingsCommands::Resolve { contract } => resolve(&contract, ctx, output),
    }
}

fn list(ctx: &AppContext, output: &OutputManager) -> CliResult<()> {
    if output.is_json() {
        let data = serde_json::to_value(&ctx.bindings).map_err(std::io::Error::other)?;
        output.json(&DataArraySerializer.collection(Some("bindings"), data))?;
        return Ok(());
    }

    if ctx.bindings.is_empty() {
        output.info("No bindings configured")?;
        return Ok(());
    }

    output.header(&format!("Bindings ({}):", ctx.bindings.len()))?;
    for binding in &ctx.bindings {
        output.print(&format!(
            "  {} => {}",
            binding.contract(),
            binding.implementation()
        ))?;
    }
    Ok(())
}

fn resolve(contract: &str, ctx: &AppContext, output: &OutputManager) -> CliResult<()> {
    let contract = contract.trim();
    if contract.is_empty() {
        return Err(CliError::InvalidInput {
            message: "contract cannot be empty".into(),
        });
    }

    let implementation =
        ctx.registry
            .resolve(contract)
            .ok_or_else(|| CliError::BindingNotFound {
                contract: contract.to_string(),
            })?;

    if output.is_json() {
        output.json(&DataArraySerializer.item(
            None,
            json!({ "contract": contract, "implementation": implementation }),
        ))?;
    } else {
        output.print(&implementation)?;
    }
    Ok(())
}
