//! Interface → implementation binding table.
//!
//! Built once at startup from configuration, validated eagerly and never
//! mutated afterwards. Callers receive it by reference; there is no global
//! registry.

use serde::Serialize;

use crate::domain::{error::DomainError, validation::DomainValidator};

/// One `contract => implementation` rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Binding {
    contract: String,
    implementation: String,
}

impl Binding {
    pub fn contract(&self) -> &str {
        &self.contract
    }

    pub fn implementation(&self) -> &str {
        &self.implementation
    }
}

/// Immutable, validated set of bindings, kept in the order given to
/// [`BindingTable::from_pairs`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BindingTable {
    bindings: Vec<Binding>,
}

impl BindingTable {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a table from string pairs.
    ///
    /// A leading `\` on either side is dropped. Fails on the first entry
    /// whose contract or implementation is not a fully-qualified class name,
    /// or whose contract repeats an earlier one.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut bindings: Vec<Binding> = Vec::new();

        for (contract, implementation) in pairs {
            let contract = contract.into();
            let implementation = implementation.into();
            let invalid = |reason: String| DomainError::InvalidBinding {
                contract: contract.clone(),
                implementation: implementation.clone(),
                reason,
            };

            let normalized_contract = normalize(&contract);
            let normalized_impl = normalize(&implementation);

            if !DomainValidator::is_qualified_name(normalized_contract) {
                return Err(invalid("contract is not a valid class name".into()));
            }
            if !DomainValidator::is_qualified_name(normalized_impl) {
                return Err(invalid("implementation is not a valid class name".into()));
            }
            if bindings
                .iter()
                .any(|b| b.contract.eq_ignore_ascii_case(normalized_contract))
            {
                return Err(invalid("contract is bound more than once".into()));
            }

            bindings.push(Binding {
                contract: normalized_contract.to_string(),
                implementation: normalized_impl.to_string(),
            });
        }

        Ok(Self { bindings })
    }

    /// Implementation bound to `contract`, if any.
    ///
    /// PHP class names are case-insensitive, and so is this lookup.
    pub fn resolve(&self, contract: &str) -> Option<&str> {
        let wanted = normalize(contract);
        self.bindings
            .iter()
            .find(|b| b.contract.eq_ignore_ascii_case(wanted))
            .map(|b| b.implementation.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Binding> {
        self.bindings.iter()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl<'a> IntoIterator for &'a BindingTable {
    type Item = &'a Binding;
    type IntoIter = std::slice::Iter<'a, Binding>;

    fn into_iter(self) -> Self::IntoIter {
        self.bindings.iter()
    }
}

fn normalize(name: &str) -> &str {
    name.trim().trim_start_matches('\\')
}
