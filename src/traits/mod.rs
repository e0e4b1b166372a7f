pub mod cancellation;
pub mod output;
pub mod source_generator;
pub mod structural;

// Re-export commonly used types
pub use cancellation::{CancellationSignal, NeverCancelled};
pub use output::SourceOutput;
pub use source_generator::SourceGenerator;
pub use structural::StructuralValue;
