//! The immutable, structurally comparable output model.
//!
//! ```text
//! Symbol
//! ├── MarkerAttributeData ── [AttributeArgument]
//! ├── DeclarationHierarchy ── [Declaration]   (outermost first)
//! ├── DeclarationKind
//! ├── generic parameters, method parameters, return type
//! ```
//!
//! Every type here implements [`StructuralValue`](crate::traits::StructuralValue).

pub mod attribute;
pub mod declaration;
pub mod source;
pub mod symbol;

pub use attribute::{AttributeArgument, AttributeArgumentKind, MarkerAttributeData};
pub use declaration::{Declaration, DeclarationHierarchy, DeclarationKind};
pub use source::{EmittedSource, SourceArtifact};
pub use symbol::{MethodParameter, Symbol};
