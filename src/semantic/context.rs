//! Matched candidates handed over by the host.

use std::fmt;
use std::sync::Arc;

use strum::{AsRefStr, Display};

use crate::model::DeclarationKind;
use crate::semantic::attribute::AttributeInstance;
use crate::semantic::symbol::SemanticSymbol;

/// Syntactic shape of the declaration carrying the marker attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display)]
pub enum DeclarationSyntax {
    Interface,
    Class,
    Record,
    Struct,
    RecordStruct,
    Method,
    Enum,
    Delegate,
    Other,
}

impl DeclarationSyntax {
    /// The declaration kind this shape maps to, if any.
    pub fn declaration_kind(self) -> Option<DeclarationKind> {
        match self {
            DeclarationSyntax::Interface => Some(DeclarationKind::Interface),
            DeclarationSyntax::Class => Some(DeclarationKind::Class),
            DeclarationSyntax::Record => Some(DeclarationKind::Record),
            DeclarationSyntax::Struct => Some(DeclarationKind::Struct),
            DeclarationSyntax::RecordStruct => Some(DeclarationKind::RecordStruct),
            DeclarationSyntax::Method => Some(DeclarationKind::Method),
            DeclarationSyntax::Enum | DeclarationSyntax::Delegate | DeclarationSyntax::Other => {
                None
            }
        }
    }
}

/// Ordered by path, then line, then column.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourceLocation {
    pub path: String,
    /// 1-based.
    pub line: u32,
    /// 1-based.
    pub column: u32,
}

impl SourceLocation {
    pub fn new(path: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            path: path.into(),
            line,
            column,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.path, self.line, self.column)
    }
}

/// One declaration the host matched against the marker attribute.
#[derive(Debug, Clone)]
pub struct AttributeSyntaxContext {
    pub target_symbol: Arc<SemanticSymbol>,
    /// Matching attribute applications on the target; the first one is used.
    pub attributes: Vec<AttributeInstance>,
    pub syntax: DeclarationSyntax,
    pub location: Option<SourceLocation>,
}

impl AttributeSyntaxContext {
    pub fn new(
        target_symbol: Arc<SemanticSymbol>,
        attribute: AttributeInstance,
        syntax: DeclarationSyntax,
    ) -> Self {
        Self {
            target_symbol,
            attributes: vec![attribute],
            syntax,
            location: None,
        }
    }

    pub fn at(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }
}
