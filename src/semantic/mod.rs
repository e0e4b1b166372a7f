//! Input facts consumed from the semantic-analysis collaborator.
//!
//! Nothing in this crate parses source or resolves types. The host resolves
//! declarations into these owned values and hands each match over as an
//! [`AttributeSyntaxContext`].

pub mod attribute;
pub mod context;
pub mod symbol;

pub use attribute::{
    AttributeClass, AttributeConstructor, AttributeInstance, ConstantValue, TypedConstant,
};
pub use context::{AttributeSyntaxContext, DeclarationSyntax, SourceLocation};
pub use symbol::{NO_TYPE_PARAMETERS, ParameterInfo, SemanticSymbol, SymbolShape, TypeKind};
