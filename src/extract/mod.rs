//! The transform stage: resolved facts in, [`Symbol`](crate::model::Symbol) out.
//!
//! Every function here is pure and polls its cancellation signal once per
//! loop step.

pub mod attribute;
pub mod classify;
pub mod hierarchy;
pub mod transform;

pub use attribute::extract;
pub use classify::classify;
pub use hierarchy::walk;
pub use transform::transform;
