//! Core domain layer for Stubwright.
//!
//! Pure logic only: name resolution, path/namespace layout, placeholder
//! filling, the binding table and the resource serializers. All I/O goes
//! through ports defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable values**: resolved identities and locations are never mutated
//!
// Public API - what the world sees
pub mod bindings;
pub mod entities;
pub mod error;
pub mod layout;
pub mod naming;
pub mod placeholders;
pub mod serializer;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use bindings::{Binding, BindingTable};
pub use entities::{
    identity::{GeneratorRequest, ResolvedIdentity},
    location::{InterfaceLocation, ResolvedLocation},
    settings::{ArtifactSettings, GeneratorSettings},
};
pub use error::{DomainError, ErrorCategory};
pub use layout::{INTERFACES_SEGMENT, LayoutBuilder};
pub use naming::NameResolver;
pub use placeholders::{Placeholder, PlaceholderMap};
pub use serializer::{ArraySerializer, DataArraySerializer, ResourceSerializer};
pub use validation::DomainValidator;
pub use value_objects::{ArtifactKind, StubKind};

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // End-to-end domain pipeline: resolve → locate → fill
    // ========================================================================

    const REPOSITORY_STUB: &str = "<?php\n\nnamespace {{ namespace }};\n\n\
        use {{ modelNamespace }}\\{{ modelName }};\n\n\
        class {{ className }} implements {{ interfaceName }}\n{\n}\n";

    fn pipeline(
        settings: &GeneratorSettings,
        kind: ArtifactKind,
        request: GeneratorRequest,
    ) -> (ResolvedIdentity, ResolvedLocation, PlaceholderMap) {
        let identity = NameResolver::new(kind, settings).resolve(&request).unwrap();
        let location = LayoutBuilder::new(settings).locate(kind, &identity).unwrap();
        let map = PlaceholderMap::for_artifact(kind, &identity, &location);
        (identity, location, map)
    }

    #[test]
    fn item_scenario() {
        let settings = GeneratorSettings::new("/srv/app");
        let (identity, location, map) =
            pipeline(&settings, ArtifactKind::Repository, GeneratorRequest::new("Item"));

        assert_eq!(identity.class_name(), "ItemRepository");
        assert_eq!(identity.interface_name(), Some("ItemRepositoryInterface"));
        assert_eq!(identity.model_name(), "Item");
        assert_eq!(identity.sub_namespace(), "");
        assert_eq!(
            location.target_directory(),
            settings.base_directory(ArtifactKind::Repository)
        );

        let text = map.fill(REPOSITORY_STUB);
        assert!(text.contains("class ItemRepository implements ItemRepositoryInterface"));
        assert!(text.contains("use App\\Models\\Item;"));
        assert!(text.contains("namespace App\\Repositories;"));
    }

    #[test]
    fn common_book_scenario() {
        let settings = GeneratorSettings::new("/srv/app");
        let (identity, location, _) = pipeline(
            &settings,
            ArtifactKind::Transformer,
            GeneratorRequest::new("Common/Book").with_model("BookModel"),
        );

        assert_eq!(identity.sub_namespace(), "Common");
        assert_eq!(identity.model_name(), "BookModel");
        assert_eq!(identity.model_var(), Some("bookModel"));
        assert_eq!(
            location.target_directory(),
            settings.base_directory(ArtifactKind::Transformer).join("Common")
        );
    }

    #[test]
    fn generated_text_contains_class_name() {
        let settings = GeneratorSettings::new("/srv/app");
        for raw in ["Item", "a/b/c", "Admin/UserProfile"] {
            let (identity, _, map) =
                pipeline(&settings, ArtifactKind::Repository, GeneratorRequest::new(raw));
            assert!(map.fill(REPOSITORY_STUB).contains(identity.class_name()));
        }
    }
}
