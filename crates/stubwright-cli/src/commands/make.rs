//! `make:repository`, `make:transformer` and `make:filter`.

use serde_json::{Value, json};
use tracing::{info, instrument};

use stubwright_adapters::LocalFilesystem;
use stubwright_core::{
    application::{GenerationPlan, GeneratorService},
    domain::{ArtifactKind, DataArraySerializer, GeneratorRequest, ResourceSerializer},
};

use crate::{context::AppContext, error::CliResult, output::OutputManager};

/// Generate one artifact kind.
///
/// 1. Resolve names, paths and stub text (nothing written yet)
/// 2. Early-exit if `--dry-run`
/// 3. Write each file and print its confirmation line
#[instrument(skip_all, fields(kind = %kind, name = %request.raw_name()))]
pub fn execute(
    kind: ArtifactKind,
    request: GeneratorRequest,
    dry_run: bool,
    ctx: &AppContext,
    output: &OutputManager,
) -> CliResult<()> {
    let service = GeneratorService::new(
        ctx.stub_store(),
        Box::new(LocalFilesystem::new()),
        ctx.settings.clone(),
    );

    if dry_run {
        let plan = service.plan(kind, &request)?;
        if output.is_json() {
            output.json(&report(&plan, true))?;
        } else {
            show_plan(&plan, output)?;
        }
        return Ok(());
    }

    let json = output.is_json();
    let mut printed = Ok(());
    let plan = service.generate(kind, &request, |artifact| {
        if !json && printed.is_ok() {
            printed = output.success(&format!(
                "{} created: {}",
                artifact.label,
                artifact.path.display()
            ));
        }
    })?;
    printed?;

    if json {
        output.json(&report(&plan, false))?;
    }
    info!(files = plan.artifacts.len(), "generation finished");
    Ok(())
}

fn show_plan(plan: &GenerationPlan, output: &OutputManager) -> CliResult<()> {
    output.info("Dry run: nothing will be written")?;
    for artifact in &plan.artifacts {
        output.print(&format!(
            "  {} {}\\{} -> {}",
            artifact.label,
            artifact.namespace,
            artifact.class_name,
            artifact.path.display()
        ))?;
    }
    Ok(())
}

/// JSON document for `--output-format json`.
fn report(plan: &GenerationPlan, dry_run: bool) -> Value {
    let artifacts: Vec<Value> = plan
        .artifacts
        .iter()
        .map(|a| {
            json!({
                "label": a.label,
                "stub": a.stub.file_name(),
                "class": a.class_name,
                "namespace": a.namespace,
                "path": a.path,
            })
        })
        .collect();

    DataArraySerializer.item(
        None,
        json!({
            "kind": plan.kind,
            "dry_run": dry_run,
            "model": plan.identity.model_name(),
            "artifacts": DataArraySerializer.collection(None, Value::Array(artifacts)),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use stubwright_adapters::{BuiltinStubStore, MemoryFilesystem};
    use stubwright_core::domain::GeneratorSettings;

    #[test]
    fn report_lists_artifacts_in_write_order() {
        let service = GeneratorService::new(
            Box::new(BuiltinStubStore),
            Box::new(MemoryFilesystem::new()),
            GeneratorSettings::new("/srv/app"),
        );
        let plan = service
            .plan(ArtifactKind::Repository, &GeneratorRequest::new("Item"))
            .unwrap();

        let value = report(&plan, true);
        assert_eq!(value["kind"], "repository");
        assert_eq!(value["dry_run"], true);
        assert_eq!(value["model"], "Item");
        assert_eq!(value["artifacts"][0]["class"], "ItemRepository");
        assert_eq!(value["artifacts"][1]["class"], "ItemRepositoryInterface");
        assert_eq!(
            value["artifacts"][1]["path"],
            "/srv/app/app/Repositories/ItemRepositoryInterface.php"
        );
    }
}
