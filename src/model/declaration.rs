//! Declarations and containment hierarchies.

use std::fmt;
use std::ops::Deref;

use bincode::{Decode, Encode};
use derive_more::From;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter};

use crate::traits::StructuralValue;
use crate::utils::EquatableList;

/// Closed set of declaration kinds.
///
/// `Namespace` only ever appears in containment chains; `Method` only ever
/// describes a matched symbol itself.
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
pub enum DeclarationKind {
    Namespace,
    Interface,
    Class,
    Record,
    Struct,
    RecordStruct,
    Method,
}

impl DeclarationKind {
    /// Interface, class, record, struct or record struct.
    pub fn is_type(self) -> bool {
        matches!(
            self,
            DeclarationKind::Interface
                | DeclarationKind::Class
                | DeclarationKind::Record
                | DeclarationKind::Struct
                | DeclarationKind::RecordStruct
        )
    }

    /// Kinds a marker attribute can be attached to.
    pub fn is_attribute_target(self) -> bool {
        !matches!(self, DeclarationKind::Namespace)
    }
}

/// One link of a containment chain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Encode, Decode, Serialize, Deserialize)]
pub struct Declaration {
    kind: DeclarationKind,
    name: String,
    generic_parameters: EquatableList<String>,
}

impl Declaration {
    pub fn new(
        kind: DeclarationKind,
        name: impl Into<String>,
        generic_parameters: EquatableList<String>,
    ) -> Self {
        // namespaces are never generic
        let generic_parameters = if kind == DeclarationKind::Namespace {
            EquatableList::empty()
        } else {
            generic_parameters
        };
        Self {
            kind,
            name: name.into(),
            generic_parameters,
        }
    }

    pub fn namespace(name: impl Into<String>) -> Self {
        Self::new(DeclarationKind::Namespace, name, EquatableList::empty())
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

    pub fn arity(&self) -> usize {
        self.generic_parameters.len()
    }

    pub fn is_generic(&self) -> bool {
        !self.generic_parameters.is_empty()
    }

    /// `Name` or ``Name`arity`` as used in fully qualified names.
    pub fn qualified_segment(&self) -> String {
        qualified_segment(&self.name, self.arity())
    }
}

pub(crate) fn qualified_segment(name: &str, arity: usize) -> String {
    if arity == 0 {
        name.to_string()
    } else {
        format!("{name}`{arity}")
    }
}

impl fmt::Display for Declaration {
    /// `namespace N` for namespaces and `partial Name<T, U>` for types, the
    /// header a generator needs to reopen the declaration.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            DeclarationKind::Namespace => write!(f, "namespace {}", self.name),
            kind if kind.is_type() => {
                write!(f, "partial {}", self.name)?;
                if self.is_generic() {
                    write!(f, "<{}>", self.generic_parameters.join(", "))?;
                }
                Ok(())
            }
            _ => f.write_str(&self.name),
        }
    }
}

impl StructuralValue for Declaration {}

/// Containing declarations ordered outermost first.
///
/// The symbol the hierarchy belongs to is never part of it.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Hash, Encode, Decode, Serialize, Deserialize, From,
)]
#[serde(transparent)]
pub struct DeclarationHierarchy(EquatableList<Declaration>);

impl DeclarationHierarchy {
    pub fn empty() -> Self {
        Self(EquatableList::empty())
    }

    pub fn declarations(&self) -> &EquatableList<Declaration> {
        &self.0
    }

    /// Dot-joined qualified segments of every declaration.
    pub fn fully_qualified_name(&self) -> String {
        self.0
            .iter()
            .map(Declaration::qualified_segment)
            .collect::<Vec<_>>()
            .join(".")
    }

    /// Dot-joined names of the namespace declarations, or `""`.
    pub fn namespace(&self) -> String {
        self.namespaces()
            .map(Declaration::name)
            .collect::<Vec<_>>()
            .join(".")
    }

    pub fn namespaces(&self) -> impl Iterator<Item = &Declaration> {
        self.0
            .iter()
            .filter(|declaration| declaration.kind() == DeclarationKind::Namespace)
    }

    /// Containing types, outermost first.
    pub fn containing_types(&self) -> impl Iterator<Item = &Declaration> {
        self.0.iter().filter(|declaration| declaration.kind().is_type())
    }
}

impl From<Vec<Declaration>> for DeclarationHierarchy {
    fn from(declarations: Vec<Declaration>) -> Self {
        Self(declarations.into())
    }
}

impl FromIterator<Declaration> for DeclarationHierarchy {
    fn from_iter<I: IntoIterator<Item = Declaration>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Deref for DeclarationHierarchy {
    type Target = [Declaration];

    fn deref(&self) -> &[Declaration] {
        self.0.as_slice()
    }
}

impl StructuralValue for DeclarationHierarchy {}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn generic(kind: DeclarationKind, name: &str, params: &[&str]) -> Declaration {
        Declaration::new(
            kind,
            name,
            params.iter().map(|p| p.to_string()).collect(),
        )
    }

    #[test]
    fn test_namespace_never_generic() {
        let ns = generic(DeclarationKind::Namespace, "N1", &["T"]);
        assert!(!ns.is_generic());
        assert!(ns.generic_parameters().is_shared_empty());
    }

    #[test]
    fn test_display_headers() {
        assert_eq!(Declaration::namespace("N1").to_string(), "namespace N1");
        assert_eq!(
            generic(DeclarationKind::Class, "Outer", &["T", "U"]).to_string(),
            "partial Outer<T, U>"
        );
        assert_eq!(
            generic(DeclarationKind::RecordStruct, "Point", &[]).to_string(),
            "partial Point"
        );
    }

    #[test]
    fn test_hierarchy_names() {
        let hierarchy: DeclarationHierarchy = vec![
            Declaration::namespace("N1"),
            Declaration::namespace("N2"),
            generic(DeclarationKind::Class, "Outer", &["T"]),
            generic(DeclarationKind::Record, "InnerRecord", &[]),
        ]
        .into();

        assert_eq!(hierarchy.fully_qualified_name(), "N1.N2.Outer`1.InnerRecord");
        assert_eq!(hierarchy.namespace(), "N1.N2");
        assert_eq!(hierarchy.containing_types().count(), 2);
    }

    #[test]
    fn test_empty_hierarchy_names() {
        let hierarchy = DeclarationHierarchy::empty();
        assert_eq!(hierarchy.fully_qualified_name(), "");
        assert_eq!(hierarchy.namespace(), "");
    }

    #[test]
    fn test_kind_partitions() {
        let types: Vec<_> = DeclarationKind::iter().filter(|k| k.is_type()).collect();
        assert_eq!(types.len(), 5);
        assert!(!DeclarationKind::Namespace.is_attribute_target());
        assert!(DeclarationKind::Method.is_attribute_target());
        assert_eq!(DeclarationKind::RecordStruct.as_ref(), "RecordStruct");
    }
}
