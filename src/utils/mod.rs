//! Utility types shared by the model and the pipeline.

pub mod equatable;
pub mod fingerprint;

pub use equatable::EquatableList;
pub use fingerprint::Fingerprint;
