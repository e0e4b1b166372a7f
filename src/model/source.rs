use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};

use crate::model::symbol::Symbol;
use crate::traits::StructuralValue;

/// One unit of generator output.
///
/// Artifacts without a name are keyed by the fully qualified name of the
/// symbol they were generated for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Encode, Decode, Serialize, Deserialize)]
pub struct SourceArtifact {
    name: Option<String>,
    text: String,
}

impl SourceArtifact {
    /// Artifact keyed by its symbol's fully qualified name.
    pub fn for_symbol(text: impl Into<String>) -> Self {
        Self {
            name: None,
            text: text.into(),
        }
    }

    /// Artifact with a caller-chosen name.
    pub fn named(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            text: text.into(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// `{name}.g.{extension}`, falling back to the symbol's qualified name.
    pub fn hint_name(&self, symbol: &Symbol, extension: &str) -> String {
        match &self.name {
            Some(name) => hint_name(name, extension),
            None => hint_name(&symbol.fully_qualified_name(), extension),
        }
    }
}

impl StructuralValue for SourceArtifact {}

pub(crate) fn hint_name(derived_name: &str, extension: &str) -> String {
    format!("{derived_name}.g.{extension}")
}

/// An artifact after its hint name has been derived.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Encode, Decode, Serialize, Deserialize)]
pub struct EmittedSource {
    pub hint_name: String,
    pub text: String,
}

impl EmittedSource {
    pub fn new(hint_name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            hint_name: hint_name.into(),
            text: text.into(),
        }
    }
}

impl StructuralValue for EmittedSource {}
