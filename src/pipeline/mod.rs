//! The orchestrator driving a generator against its host.

pub mod diagnostics;
pub mod emit;
pub mod generator;

pub use diagnostics::{Diagnostic, DiagnosticCode};
pub use emit::{EmitOrigin, EmitRegistry};
pub use generator::{AttributeGenerator, PassOutput};
