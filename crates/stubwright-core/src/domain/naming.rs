//! Name resolution: `Common/Item` into class, interface and model names.
//!
//! ```text
//! "common/item"  ──split──►  ["common"] + "item"
//!                ──ucfirst─►  sub_namespace "Common", base "Item"
//!                ──suffix──►  class "ItemRepository"
//!                              interface "ItemRepositoryInterface"
//!                              model "Item"
//! ```
//!
//! Pure functions of their inputs and the supplied settings.

use tracing::debug;

use crate::domain::{
    entities::{
        identity::{GeneratorRequest, ResolvedIdentity},
        settings::GeneratorSettings,
    },
    error::DomainError,
    validation::DomainValidator,
    value_objects::ArtifactKind,
};

/// Resolves generator requests for one artifact kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameResolver {
    kind: ArtifactKind,
    class_suffix: String,
    interface_suffix: Option<String>,
}

impl NameResolver {
    pub fn new(kind: ArtifactKind, settings: &GeneratorSettings) -> Self {
        Self {
            kind,
            class_suffix: settings.artifact(kind).suffix.clone(),
            interface_suffix: kind
                .has_interface()
                .then(|| settings.interface_suffix.clone()),
        }
    }

    pub fn kind(&self) -> ArtifactKind {
        self.kind
    }

    /// Derive the identity for `request`.
    ///
    /// Backslashes count as separators and empty segments are dropped, so
    /// `/Common//Item` and `Common\Item` both resolve like `Common/Item`.
    ///
    /// # Errors
    /// `InvalidArgument` when the name is blank, when a segment is not a
    /// valid class label, when the class segment cannot start with an
    /// uppercase letter (`_item`, `ßeta`), or when the model override is
    /// blank or invalid.
    pub fn resolve(&self, request: &GeneratorRequest) -> Result<ResolvedIdentity, DomainError> {
        let raw = request.raw_name().trim();
        if raw.is_empty() {
            return Err(DomainError::invalid_argument(
                request.raw_name(),
                "name cannot be empty",
            ));
        }

        let normalized = raw.replace('\\', "/");
        let mut segments: Vec<&str> = normalized.split('/').filter(|s| !s.is_empty()).collect();
        let base = segments
            .pop()
            .ok_or_else(|| DomainError::invalid_argument(raw, "name has no class segment"))?;

        for segment in segments.iter().chain(std::iter::once(&base)) {
            DomainValidator::validate_segment(raw, segment)?;
        }

        let base = ucfirst(base);
        if !base.chars().next().is_some_and(char::is_uppercase) {
            return Err(DomainError::invalid_argument(
                raw,
                format!("class name '{base}' must start with an uppercase letter"),
            ));
        }
        let sub_segments: Vec<String> = segments.into_iter().map(ucfirst).collect();

        let model_name = match request.model_override().map(str::trim) {
            Some("") => {
                return Err(DomainError::invalid_argument(
                    "",
                    "model name cannot be empty",
                ));
            }
            Some(model) => {
                DomainValidator::validate_segment(model, model)?;
                model.to_string()
            }
            None => base.clone(),
        };

        let identity = ResolvedIdentity {
            class_name: format!("{base}{}", self.class_suffix),
            interface_name: self
                .interface_suffix
                .as_ref()
                .map(|suffix| format!("{base}{suffix}")),
            sub_segments,
            model_var: (self.kind == ArtifactKind::Transformer).then(|| camel(&model_name)),
            model_name,
        };

        debug!(
            kind = %self.kind,
            class = %identity.class_name,
            sub_namespace = %identity.sub_namespace(),
            "name resolved"
        );
        Ok(identity)
    }
}

// ============================================================================
// Case helpers
// ============================================================================

/// Uppercase the first character, leave the rest untouched.
///
/// A first character whose uppercase form is not a single character
/// (`ß` gives `SS`) is kept as is.
pub fn ucfirst(s: &str) -> String {
    map_first(s, char::to_uppercase)
}

/// Lowercase the first character, leave the rest untouched.
pub fn lcfirst(s: &str) -> String {
    map_first(s, char::to_lowercase)
}

fn map_first<I>(s: &str, case: impl FnOnce(char) -> I) -> String
where
    I: Iterator<Item = char>,
{
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut mapped = case(first);
    match (mapped.next(), mapped.next()) {
        (Some(single), None) => std::iter::once(single).chain(chars).collect(),
        _ => s.to_string(),
    }
}

/// `book_model`, `book-model` and `book model` all give `BookModel`.
pub fn studly(s: &str) -> String {
    s.split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|w| !w.is_empty())
        .map(ucfirst)
        .collect()
}

/// Lower camel case: `BookModel` gives `bookModel`.
pub fn camel(s: &str) -> String {
    lcfirst(&studly(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver(kind: ArtifactKind) -> NameResolver {
        NameResolver::new(kind, &GeneratorSettings::new("/srv/app"))
    }

    // ---------------------------------------------------------------------
    // Case helpers
    // ---------------------------------------------------------------------

    #[test]
    fn case_helpers() {
        assert_eq!(ucfirst("item"), "Item");
        assert_eq!(ucfirst("élan"), "Élan");
        assert_eq!(ucfirst("ßeta"), "ßeta");
        assert_eq!(ucfirst(""), "");
        assert_eq!(lcfirst("BookModel"), "bookModel");
        assert_eq!(studly("book_model"), "BookModel");
        assert_eq!(studly("book-model item"), "BookModelItem");
        assert_eq!(camel("BookModel"), "bookModel");
        assert_eq!(camel("user_profile"), "userProfile");
    }

    // ---------------------------------------------------------------------
    // Resolution
    // ---------------------------------------------------------------------

    #[test]
    fn bare_name_repository() {
        let id = resolver(ArtifactKind::Repository)
            .resolve(&GeneratorRequest::new("Item"))
            .unwrap();
        assert_eq!(id.class_name(), "ItemRepository");
        assert_eq!(id.interface_name(), Some("ItemRepositoryInterface"));
        assert_eq!(id.model_name(), "Item");
        assert_eq!(id.sub_namespace(), "");
        assert!(id.model_var().is_none());
    }

    #[test]
    fn nested_name_capitalizes_every_segment() {
        let id = resolver(ArtifactKind::Filter)
            .resolve(&GeneratorRequest::new("a/b/c"))
            .unwrap();
        assert_eq!(id.class_name(), "CListFilter");
        assert_eq!(id.sub_namespace(), "A\\B");
        assert!(id.interface_name().is_none());
    }

    #[test]
    fn casing_of_input_does_not_matter_for_first_letters() {
        let lower = resolver(ArtifactKind::Filter)
            .resolve(&GeneratorRequest::new("a/b/c"))
            .unwrap();
        let upper = resolver(ArtifactKind::Filter)
            .resolve(&GeneratorRequest::new("A/B/C"))
            .unwrap();
        assert_eq!(lower, upper);
    }

    #[test]
    fn model_override_and_model_var() {
        let id = resolver(ArtifactKind::Transformer)
            .resolve(&GeneratorRequest::new("Common/Book").with_model("BookModel"))
            .unwrap();
        assert_eq!(id.class_name(), "BookTransformer");
        assert_eq!(id.sub_namespace(), "Common");
        assert_eq!(id.model_name(), "BookModel");
        assert_eq!(id.model_var(), Some("bookModel"));
    }

    #[test]
    fn backslashes_and_empty_segments_are_normalized() {
        let a = resolver(ArtifactKind::Repository)
            .resolve(&GeneratorRequest::new("Common\\Item"))
            .unwrap();
        let b = resolver(ArtifactKind::Repository)
            .resolve(&GeneratorRequest::new("/Common//Item/"))
            .unwrap();
        assert_eq!(a, b);
        assert_eq!(a.sub_namespace(), "Common");
    }

    #[test]
    fn configured_suffixes_apply() {
        let mut settings = GeneratorSettings::new("/srv/app");
        settings.repository.suffix = "EloquentRepository".into();
        settings.interface_suffix = "Repository".into();
        let id = NameResolver::new(ArtifactKind::Repository, &settings)
            .resolve(&GeneratorRequest::new("Item"))
            .unwrap();
        assert_eq!(id.class_name(), "ItemEloquentRepository");
        assert_eq!(id.interface_name(), Some("ItemRepository"));
    }

    #[test]
    fn empty_and_blank_names_are_invalid() {
        for raw in ["", "   ", "/", "//"] {
            let err = resolver(ArtifactKind::Repository)
                .resolve(&GeneratorRequest::new(raw))
                .unwrap_err();
            assert!(
                matches!(err, DomainError::InvalidArgument { .. }),
                "expected InvalidArgument for {raw:?}"
            );
        }
    }

    #[test]
    fn invalid_segments_are_rejected() {
        for raw in ["Common/../Item", "1tem", "Common/It em", "Item.php"] {
            assert!(
                resolver(ArtifactKind::Repository)
                    .resolve(&GeneratorRequest::new(raw))
                    .is_err(),
                "expected rejection of {raw:?}"
            );
        }
    }

    #[test]
    fn blank_model_override_is_rejected() {
        let err = resolver(ArtifactKind::Repository)
            .resolve(&GeneratorRequest::new("Item").with_model("  "))
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidArgument { .. }));
    }

    #[test]
    fn class_name_starts_uppercase() {
        for raw in ["item", "common/élan", "_admin/item"] {
            let id = resolver(ArtifactKind::Transformer)
                .resolve(&GeneratorRequest::new(raw))
                .unwrap();
            let first = id.class_name().chars().next().unwrap();
            assert!(first.is_uppercase(), "{raw:?}");
        }
    }

    #[test]
    fn class_segment_without_uppercase_form_is_rejected() {
        for raw in ["_item", "Common/_x", "ßeta", "书"] {
            let err = resolver(ArtifactKind::Repository)
                .resolve(&GeneratorRequest::new(raw))
                .unwrap_err();
            assert!(
                matches!(err, DomainError::InvalidArgument { .. }),
                "expected InvalidArgument for {raw:?}"
            );
        }
    }
}
