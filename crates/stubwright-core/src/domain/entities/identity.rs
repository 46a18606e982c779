use serde::Serialize;

/// A generator invocation as typed by the user: `Common/Item --model=Book`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorRequest {
    raw_name: String,
    model_override: Option<String>,
}

impl GeneratorRequest {
    pub fn new(raw_name: impl Into<String>) -> Self {
        Self {
            raw_name: raw_name.into(),
            model_override: None,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model_override = Some(model.into());
        self
    }

    /// Set or clear the model override.
    pub fn model(mut self, model: Option<String>) -> Self {
        self.model_override = model;
        self
    }

    pub fn raw_name(&self) -> &str {
        &self.raw_name
    }

    pub fn model_override(&self) -> Option<&str> {
        self.model_override.as_deref()
    }
}

/// Names derived from a [`GeneratorRequest`].
///
/// Invariant: `class_name` is non-empty and starts with an uppercase letter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedIdentity {
    pub(crate) class_name: String,
    pub(crate) interface_name: Option<String>,
    pub(crate) sub_segments: Vec<String>,
    pub(crate) model_name: String,
    pub(crate) model_var: Option<String>,
}

impl ResolvedIdentity {
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn interface_name(&self) -> Option<&str> {
        self.interface_name.as_deref()
    }

    /// Capitalized parent segments joined with `\`; empty for a bare name.
    pub fn sub_namespace(&self) -> String {
        self.sub_segments.join("\\")
    }

    pub fn sub_segments(&self) -> &[String] {
        &self.sub_segments
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    pub fn model_var(&self) -> Option<&str> {
        self.model_var.as_deref()
    }
}
