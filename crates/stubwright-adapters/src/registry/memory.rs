//! In-process dependency registry.

use tracing::debug;

use stubwright_core::{
    application::{ApplicationError, ports::DependencyRegistry},
    error::StubwrightResult,
};

/// Contract → implementation map standing in for the host container.
///
/// Binding a contract again replaces the earlier implementation, the way a
/// service container rebinds. Lookups ignore ASCII case, as PHP class names
/// do.
#[derive(Debug, Clone, Default)]
pub struct MemoryRegistry {
    entries: Vec<(String, String)>,
}

impl MemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered pairs in registration order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(c, i)| (c.as_str(), i.as_str()))
    }

    fn position(&self, contract: &str) -> Option<usize> {
        let contract = contract.trim_start_matches('\\');
        self.entries
            .iter()
            .position(|(c, _)| c.eq_ignore_ascii_case(contract))
    }
}

impl DependencyRegistry for MemoryRegistry {
    fn bind(&mut self, contract: &str, implementation: &str) -> StubwrightResult<()> {
        if contract.trim().is_empty() {
            return Err(ApplicationError::BindingRejected {
                contract: contract.to_string(),
                reason: "contract is empty".into(),
            }
            .into());
        }

        let contract = contract.trim_start_matches('\\').to_string();
        let implementation = implementation.trim_start_matches('\\').to_string();
        match self.position(&contract) {
            Some(index) => {
                debug!(%contract, %implementation, "rebinding contract");
                self.entries[index].1 = implementation;
            }
            None => self.entries.push((contract, implementation)),
        }
        Ok(())
    }

    fn resolve(&self, contract: &str) -> Option<String> {
        self.position(contract).map(|i| self.entries[i].1.clone())
    }
}
