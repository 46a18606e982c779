//! Binding Service - registers the boot-time binding table.

use tracing::{debug, info, instrument};

use crate::{
    application::{ApplicationError, ports::DependencyRegistry},
    domain::BindingTable,
    error::{StubwrightError, StubwrightResult},
};

/// Feeds a [`BindingTable`] into the host's dependency registry.
///
/// Runs once during boot. The table itself is never modified.
pub struct BindingService;

impl BindingService {
    /// Register every binding in table order.
    ///
    /// Stops at the first binding the registry refuses; the error names the
    /// contract.
    #[instrument(skip_all, fields(bindings = table.len()))]
    pub fn register_all(
        table: &BindingTable,
        registry: &mut dyn DependencyRegistry,
    ) -> StubwrightResult<usize> {
        for binding in table {
            registry
                .bind(binding.contract(), binding.implementation())
                .map_err(|e| rejected(binding.contract(), e))?;
            debug!(
                contract = binding.contract(),
                implementation = binding.implementation(),
                "Binding registered"
            );
        }
        info!(count = table.len(), "Bindings registered");
        Ok(table.len())
    }
}

fn rejected(contract: &str, source: StubwrightError) -> StubwrightError {
    match source {
        StubwrightError::Application(ApplicationError::BindingRejected { .. }) => source,
        other => ApplicationError::BindingRejected {
            contract: contract.to_string(),
            reason: other.to_string(),
        }
        .into(),
    }
}
