//! First-hit-wins composition of stub stores.

use tracing::trace;

use stubwright_core::{
    application::{ApplicationError, ports::StubStore},
    domain::StubKind,
    error::{StubwrightError, StubwrightResult},
};

/// Asks each layer in order and returns the first stub found.
///
/// Only "not found" falls through to the next layer. Any other failure,
/// such as an unreadable file, stops the search.
pub struct LayeredStubStore {
    layers: Vec<Box<dyn StubStore>>,
}

impl LayeredStubStore {
    pub fn new() -> Self {
        Self { layers: Vec::new() }
    }

    pub fn with_layer(mut self, layer: impl StubStore + 'static) -> Self {
        self.layers.push(Box::new(layer));
        self
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl Default for LayeredStubStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StubStore for LayeredStubStore {
    fn load(&self, stub: StubKind) -> StubwrightResult<String> {
        for layer in &self.layers {
            match layer.load(stub) {
                Err(StubwrightError::Application(ApplicationError::StubNotFound { .. })) => {
                    trace!(layer = %layer.describe(), %stub, "stub not in layer");
                }
                result => return result,
            }
        }
        Err(ApplicationError::StubNotFound {
            stub,
            searched: self.describe(),
        }
        .into())
    }

    fn describe(&self) -> String {
        self.layers
            .iter()
            .map(|l| l.describe())
            .collect::<Vec<_>>()
            .join(", then ")
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::stub_store::{BuiltinStubStore, DirectoryStubStore};
    use tempfile::TempDir;

    #[test]
    fn earlier_layer_wins() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("filter.stub"), "custom filter").unwrap();

        let store = LayeredStubStore::new()
            .with_layer(DirectoryStubStore::new(temp.path()))
            .with_layer(BuiltinStubStore);

        assert_eq!(store.load(StubKind::Filter).unwrap(), "custom filter");
        // Falls back for stubs the directory lacks.
        assert!(store.load(StubKind::Transformer).unwrap().starts_with("<?php"));
    }

    #[test]
    fn empty_store_reports_not_found() {
        let err = LayeredStubStore::new().load(StubKind::Filter).unwrap_err();
        assert!(matches!(
            err,
            StubwrightError::Application(ApplicationError::StubNotFound { .. })
        ));
    }

    #[test]
    fn describe_lists_layers_in_order() {
        let store = LayeredStubStore::new()
            .with_layer(DirectoryStubStore::new("/project/stubs/stubwright"))
            .with_layer(BuiltinStubStore);
        assert_eq!(
            store.describe(),
            "/project/stubs/stubwright, then built-in stubs"
        );
    }
}
