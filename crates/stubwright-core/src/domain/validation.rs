use crate::domain::error::DomainError;

/// Centralized identifier validation.
///
/// Class names, namespace segments and suffixes all follow the PHP label
/// rule: a letter or underscore, then letters, digits or underscores.
/// Non-ASCII letters are accepted, as PHP accepts them.
pub struct DomainValidator;

impl DomainValidator {
    /// Whether `segment` is a valid class or namespace label.
    pub fn is_label(segment: &str) -> bool {
        let mut chars = segment.chars();
        match chars.next() {
            Some(first) if first == '_' || first.is_alphabetic() => {}
            _ => return false,
        }
        chars.all(|c| c == '_' || c.is_alphanumeric())
    }

    /// Whether `name` is a `\`-separated sequence of labels.
    pub fn is_qualified_name(name: &str) -> bool {
        !name.is_empty() && name.split('\\').all(Self::is_label)
    }

    /// Validate one segment of a user-supplied generator name.
    pub fn validate_segment(raw: &str, segment: &str) -> Result<(), DomainError> {
        if Self::is_label(segment) {
            Ok(())
        } else {
            Err(DomainError::invalid_argument(
                raw,
                format!("'{segment}' is not a valid class name segment"),
            ))
        }
    }

    /// Validate a configured class-name suffix.
    pub fn validate_suffix(field: &'static str, suffix: &str) -> Result<(), DomainError> {
        if !suffix.is_empty() && suffix.chars().all(|c| c == '_' || c.is_alphanumeric()) {
            Ok(())
        } else {
            Err(DomainError::InvalidSetting {
                field,
                value: suffix.to_string(),
                reason: "must be a non-empty run of letters, digits or underscores".into(),
            })
        }
    }

    /// Validate a configured namespace such as `App\Models`.
    pub fn validate_namespace(field: &'static str, namespace: &str) -> Result<(), DomainError> {
        if Self::is_qualified_name(namespace.trim_start_matches('\\')) {
            Ok(())
        } else {
            Err(DomainError::InvalidSetting {
                field,
                value: namespace.to_string(),
                reason: "must be a backslash-separated list of class name segments".into(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        assert!(DomainValidator::is_label("Item"));
        assert!(DomainValidator::is_label("_item2"));
        assert!(DomainValidator::is_label("Café"));
        assert!(!DomainValidator::is_label(""));
        assert!(!DomainValidator::is_label("2fast"));
        assert!(!DomainValidator::is_label("book-model"));
        assert!(!DomainValidator::is_label(".."));
    }

    #[test]
    fn qualified_names() {
        assert!(DomainValidator::is_qualified_name("App\\Models"));
        assert!(!DomainValidator::is_qualified_name("App\\\\Models"));
        assert!(!DomainValidator::is_qualified_name("App\\"));
    }

    #[test]
    fn namespace_may_start_with_separator() {
        assert!(DomainValidator::validate_namespace("model_namespace", "\\App\\Models").is_ok());
        assert!(DomainValidator::validate_namespace("model_namespace", "App/Models").is_err());
    }
}
