//! Marker attribute metadata.

use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter};

use crate::traits::StructuralValue;
use crate::utils::EquatableList;

/// Where an attribute argument came from.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Encode,
    Decode,
    Serialize,
    Deserialize,
    EnumIter,
    AsRefStr,
    Display,
)]
pub enum AttributeArgumentKind {
    /// A type argument bound to one of the attribute's type parameters.
    GenericType,
    /// A positional constructor argument.
    Constructor,
    /// A property or field initializer.
    Named,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Encode, Decode, Serialize, Deserialize)]
pub struct AttributeArgument {
    kind: AttributeArgumentKind,
    name: String,
    value: Option<String>,
}

impl AttributeArgument {
    pub fn new(kind: AttributeArgumentKind, name: impl Into<String>, value: Option<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            value,
        }
    }

    pub fn kind(&self) -> AttributeArgumentKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Textual form of the value; `None` when the supplied value was null.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl StructuralValue for AttributeArgument {}

/// The matched marker attribute and its arguments.
///
/// Arguments are ordered generic type arguments first, then constructor
/// arguments in parameter order, then named arguments in use-site order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Encode, Decode, Serialize, Deserialize)]
pub struct MarkerAttributeData {
    name: String,
    arguments: EquatableList<AttributeArgument>,
}

impl MarkerAttributeData {
    pub fn new(name: impl Into<String>, arguments: EquatableList<AttributeArgument>) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arguments(&self) -> &EquatableList<AttributeArgument> {
        &self.arguments
    }

    pub fn arguments_of_kind(
        &self,
        kind: AttributeArgumentKind,
    ) -> impl Iterator<Item = &AttributeArgument> {
        self.arguments.iter().filter(move |argument| argument.kind == kind)
    }

    pub fn generic_type_arguments(&self) -> impl Iterator<Item = &AttributeArgument> {
        self.arguments_of_kind(AttributeArgumentKind::GenericType)
    }

    pub fn constructor_arguments(&self) -> impl Iterator<Item = &AttributeArgument> {
        self.arguments_of_kind(AttributeArgumentKind::Constructor)
    }

    pub fn named_arguments(&self) -> impl Iterator<Item = &AttributeArgument> {
        self.arguments_of_kind(AttributeArgumentKind::Named)
    }

    /// First argument with the given name, whatever its kind.
    pub fn argument(&self, name: &str) -> Option<&AttributeArgument> {
        self.arguments.iter().find(|argument| argument.name == name)
    }
}

impl StructuralValue for MarkerAttributeData {}
