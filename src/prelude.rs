//! Commonly used types and traits.
//!
//! ```rust
//! use attribute_source_generator::prelude::*;
//! ```
//!
//! Input facts, the output model, configuration and the orchestrator are all
//! included. The individual transform stages live in
//! [`extract`](crate::extract) and are not re-exported here.

// Configuration
pub use crate::config::{GeneratorConfig, GeneratorOptions, SymbolFilter};

// Errors
pub use crate::errors::{
    ConfigurationError, EmitCollisionError, GeneratorError, GeneratorResult,
    MalformedAttributeError, UnsupportedSymbolError,
};

// Output model
pub use crate::model::{
    AttributeArgument, AttributeArgumentKind, Declaration, DeclarationHierarchy, DeclarationKind,
    EmittedSource, MarkerAttributeData, MethodParameter, SourceArtifact, Symbol,
};

// Pipeline
pub use crate::pipeline::{AttributeGenerator, Diagnostic, DiagnosticCode, PassOutput};

// Input facts
pub use crate::semantic::{
    AttributeClass, AttributeConstructor, AttributeInstance, AttributeSyntaxContext,
    ConstantValue, DeclarationSyntax, NO_TYPE_PARAMETERS, ParameterInfo, SemanticSymbol,
    SourceLocation, SymbolShape, TypeKind, TypedConstant,
};

// Traits
pub use crate::traits::{
    CancellationSignal, NeverCancelled, SourceGenerator, SourceOutput, StructuralValue,
};

pub use crate::utils::{EquatableList, Fingerprint};
