//! Stubs compiled into the binary.

use stubwright_core::{application::ports::StubStore, domain::StubKind, error::StubwrightResult};

const REPOSITORY: &str = include_str!("../../stubs/repository.stub");
const REPOSITORY_INTERFACE: &str = include_str!("../../stubs/repository.interface.stub");
const TRANSFORMER: &str = include_str!("../../stubs/transformer.stub");
const FILTER: &str = include_str!("../../stubs/filter.stub");

/// The default stubs shipped with stubwright.
///
/// Always has every [`StubKind`]; `load` never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinStubStore;

impl BuiltinStubStore {
    pub fn new() -> Self {
        Self
    }

    /// Raw stub text. Used by `stubwright init --stubs` to publish copies.
    pub fn text(stub: StubKind) -> &'static str {
        match stub {
            StubKind::Repository => REPOSITORY,
            StubKind::RepositoryInterface => REPOSITORY_INTERFACE,
            StubKind::Transformer => TRANSFORMER,
            StubKind::Filter => FILTER,
        }
    }
}

impl StubStore for BuiltinStubStore {
    fn load(&self, stub: StubKind) -> StubwrightResult<String> {
        Ok(Self::text(stub).to_string())
    }

    fn describe(&self) -> String {
        "built-in stubs".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stubwright_core::domain::Placeholder;

    #[test]
    fn every_stub_is_present_and_php() {
        for stub in StubKind::ALL {
            let text = BuiltinStubStore.load(stub).unwrap();
            assert!(text.starts_with("<?php"), "{stub}");
        }
    }

    #[test]
    fn stubs_use_their_tokens() {
        let class_token = Placeholder::ClassName.token();
        assert!(BuiltinStubStore::text(StubKind::Repository).contains(class_token));
        assert!(BuiltinStubStore::text(StubKind::Filter).contains(class_token));
        assert!(
            BuiltinStubStore::text(StubKind::Transformer).contains(Placeholder::ModelVar.token())
        );
        assert!(
            BuiltinStubStore::text(StubKind::RepositoryInterface)
                .contains(Placeholder::InterfaceName.token())
        );
    }
}
