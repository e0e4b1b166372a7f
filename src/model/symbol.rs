//! The canonical symbol model handed to generators.

use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};

use crate::model::attribute::MarkerAttributeData;
use crate::model::declaration::{
    Declaration, DeclarationHierarchy, DeclarationKind, qualified_segment,
};
use crate::traits::StructuralValue;
use crate::utils::EquatableList;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Encode, Decode, Serialize, Deserialize)]
pub struct MethodParameter {
    type_name: String,
    name: String,
}

impl MethodParameter {
    pub fn new(type_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            name: name.into(),
        }
    }

    /// Display text of the parameter type.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl StructuralValue for MethodParameter {}

/// Everything a generator knows about one matched symbol.
///
/// Built once per match by the transform stage and never mutated. Equality
/// and hashing cover every field in declaration order, including the element
/// order of every nested list. Source locations are never part of a symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Encode, Decode, Serialize, Deserialize)]
pub struct Symbol {
    marker_attribute: MarkerAttributeData,
    containing_declarations: DeclarationHierarchy,
    kind: DeclarationKind,
    name: String,
    generic_parameters: EquatableList<String>,
    method_parameters: EquatableList<MethodParameter>,
    return_type: String,
}

impl Symbol {
    pub fn new(
        marker_attribute: MarkerAttributeData,
        containing_declarations: DeclarationHierarchy,
        kind: DeclarationKind,
        name: impl Into<String>,
        generic_parameters: EquatableList<String>,
        method_parameters: EquatableList<MethodParameter>,
        return_type: impl Into<String>,
    ) -> Self {
        Self {
            marker_attribute,
            containing_declarations,
            kind,
            name: name.into(),
            generic_parameters,
            method_parameters,
            return_type: return_type.into(),
        }
    }

    pub fn marker_attribute(&self) -> &MarkerAttributeData {
        &self.marker_attribute
    }

    pub fn containing_declarations(&self) -> &DeclarationHierarchy {
        &self.containing_declarations
    }

    pub fn kind(&self) -> DeclarationKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn generic_parameters(&self) -> &EquatableList<String> {
        &self.generic_parameters
    }

    /// Parameters of a method symbol; empty for types.
    pub fn method_parameters(&self) -> &EquatableList<MethodParameter> {
        &self.method_parameters
    }

    /// Return type display text of a method symbol; `""` for types.
    pub fn return_type(&self) -> &str {
        &self.return_type
    }

    pub fn is_generic(&self) -> bool {
        !self.generic_parameters.is_empty()
    }

    pub fn containing_types(&self) -> impl Iterator<Item = &Declaration> {
        self.containing_declarations.containing_types()
    }

    /// Containing declarations and the symbol itself, dot-joined, with a
    /// ``Name`arity`` segment for every generic link.
    pub fn fully_qualified_name(&self) -> String {
        let own = qualified_segment(&self.name, self.generic_parameters.len());
        if self.containing_declarations.is_empty() {
            return own;
        }
        format!("{}.{}", self.containing_declarations.fully_qualified_name(), own)
    }

    pub fn namespace(&self) -> String {
        self.containing_declarations.namespace()
    }
}

impl StructuralValue for Symbol {}
