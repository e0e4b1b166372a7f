//! Resolved program symbols as supplied by the semantic-analysis host.
//!
//! Symbols are linked to their container through `Arc`, so a chain
//! can be shared by every member declared inside the same container and
//! walked without borrowing from the host.

use std::fmt;
use std::sync::Arc;

use strum::{AsRefStr, Display};

/// Convenience for non-generic types and methods.
pub const NO_TYPE_PARAMETERS: [&str; 0] = [];

/// The host's type category for a named type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display)]
pub enum TypeKind {
    Class,
    Interface,
    Struct,
    Enum,
    Delegate,
    Array,
    TypeParameter,
    Error,
}

/// A formal parameter as the host resolved it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterInfo {
    /// Display text of the parameter type.
    pub type_name: String,
    pub name: String,
}

impl ParameterInfo {
    pub fn new(type_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SymbolShape {
    Namespace {
        is_global: bool,
    },
    NamedType {
        type_kind: TypeKind,
        is_record: bool,
    },
    Method {
        parameters: Vec<ParameterInfo>,
        return_type: String,
    },
    /// Anything else the host can resolve (fields, properties, events, ...).
    Other(String),
}

impl fmt::Display for SymbolShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymbolShape::Namespace { is_global: true } => f.write_str("global namespace"),
            SymbolShape::Namespace { is_global: false } => f.write_str("namespace"),
            SymbolShape::NamedType {
                type_kind,
                is_record: true,
            } => write!(f, "record {}", type_kind.as_ref().to_lowercase()),
            SymbolShape::NamedType { type_kind, .. } => {
                f.write_str(&type_kind.as_ref().to_lowercase())
            }
            SymbolShape::Method { .. } => f.write_str("method"),
            SymbolShape::Other(kind) => f.write_str(kind),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemanticSymbol {
    pub name: String,
    pub shape: SymbolShape,
    /// The symbol's own type parameter names, never those of its containers.
    pub type_parameters: Vec<String>,
    pub containing_symbol: Option<Arc<SemanticSymbol>>,
}

impl SemanticSymbol {
    /// The unnamed root namespace every chain ends in.
    pub fn global_namespace() -> Arc<Self> {
        Arc::new(Self {
            name: String::new(),
            shape: SymbolShape::Namespace { is_global: true },
            type_parameters: Vec::new(),
            containing_symbol: None,
        })
    }

    pub fn namespace(name: impl Into<String>, container: &Arc<Self>) -> Arc<Self> {
        Arc::new(Self {
            name: name.into(),
            shape: SymbolShape::Namespace { is_global: false },
            type_parameters: Vec::new(),
            containing_symbol: Some(Arc::clone(container)),
        })
    }

    /// Nested namespaces from a dotted path, returning the innermost one.
    pub fn namespace_path(path: &str, container: &Arc<Self>) -> Arc<Self> {
        path.split('.')
            .filter(|segment| !segment.is_empty())
            .fold(Arc::clone(container), |parent, segment| {
                Self::namespace(segment, &parent)
            })
    }

    pub fn named_type<S: Into<String>>(
        name: impl Into<String>,
        type_kind: TypeKind,
        is_record: bool,
        type_parameters: impl IntoIterator<Item = S>,
        container: Option<&Arc<Self>>,
    ) -> Arc<Self> {
        Arc::new(Self {
            name: name.into(),
            shape: SymbolShape::NamedType {
                type_kind,
                is_record,
            },
            type_parameters: type_parameters.into_iter().map(Into::into).collect(),
            containing_symbol: container.cloned(),
        })
    }

    pub fn method<S: Into<String>>(
        name: impl Into<String>,
        type_parameters: impl IntoIterator<Item = S>,
        parameters: Vec<ParameterInfo>,
        return_type: impl Into<String>,
        container: &Arc<Self>,
    ) -> Arc<Self> {
        Arc::new(Self {
            name: name.into(),
            shape: SymbolShape::Method {
                parameters,
                return_type: return_type.into(),
            },
            type_parameters: type_parameters.into_iter().map(Into::into).collect(),
            containing_symbol: Some(Arc::clone(container)),
        })
    }

    pub fn other(name: impl Into<String>, kind: impl Into<String>, container: &Arc<Self>) -> Arc<Self> {
        Arc::new(Self {
            name: name.into(),
            shape: SymbolShape::Other(kind.into()),
            type_parameters: Vec::new(),
            containing_symbol: Some(Arc::clone(container)),
        })
    }

    pub fn is_global_namespace(&self) -> bool {
        matches!(self.shape, SymbolShape::Namespace { is_global: true })
    }

    pub fn containing_symbol(&self) -> Option<&SemanticSymbol> {
        self.containing_symbol.as_deref()
    }
}
