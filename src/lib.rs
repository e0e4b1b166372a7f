//! # Attribute Source Generator
//!
//! The core of a marker-attribute driven source generator. Given resolved
//! declarations carrying a marker attribute, it builds canonical,
//! structurally comparable [`Symbol`](model::Symbol) values and hands them to
//! a user callback that renders source artifacts.
//!
//! ## Features
//!
//! - **Deterministic transform**: equal input facts always yield equal symbols
//! - **Structural equality**: every model value compares and hashes by content,
//!   so an incremental host can skip regeneration for unchanged symbols
//! - **Stable fingerprints**: blake3 digests of the bincode encoding
//! - **Isolated failures**: per-symbol errors become diagnostics, never a crash
//! - **Cooperative cancellation**: checked on every loop step
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use attribute_source_generator::prelude::*;
//!
//! fn render(symbol: &Symbol) -> anyhow::Result<Vec<SourceArtifact>> {
//!     Ok(vec![SourceArtifact::for_symbol(format!(
//!         "namespace {} {{ partial class {} {{ }} }}",
//!         symbol.namespace(),
//!         symbol.name()
//!     ))])
//! }
//!
//! let generator = AttributeGenerator::new(
//!     GeneratorConfig::builder()
//!         .marker_attribute_name("Demo.GenerateAttribute")
//!         .source_generator(Arc::new(render))
//!         .build(),
//! )?;
//!
//! let global = SemanticSymbol::global_namespace();
//! let ns = SemanticSymbol::namespace("Demo", &global);
//! let target = SemanticSymbol::named_type("Widget", TypeKind::Class, false, NO_TYPE_PARAMETERS, Some(&ns));
//! let marker = AttributeInstance::new(
//!     AttributeClass::new("GenerateAttribute"),
//!     AttributeConstructor::default(),
//! );
//! let candidates = [AttributeSyntaxContext::new(target, marker, DeclarationSyntax::Class)];
//!
//! let output = generator.run_pass(&candidates, &GeneratorOptions::default(), &NeverCancelled)?;
//! assert_eq!(output.sources[0].hint_name, "Demo.Widget.g.cs");
//! # Ok::<(), GeneratorError>(())
//! ```

pub mod config;
pub mod errors;
pub mod extract;
pub mod model;
pub mod pipeline;
pub mod prelude;
pub mod semantic;
pub mod traits;
pub mod utils;

pub use errors::{GeneratorError, GeneratorResult};
pub use pipeline::{AttributeGenerator, PassOutput};
