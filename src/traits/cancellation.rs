//! Cooperative cancellation.
//!
//! Long-running steps (the containment walk, argument extraction, the pass
//! loop) poll a [`CancellationSignal`] once per iteration and bail out with
//! [`GeneratorError::Cancelled`] before producing any partial value.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::errors::{GeneratorError, GeneratorResult};

pub trait CancellationSignal {
    fn is_cancelled(&self) -> bool;

    /// Fails with `Cancelled` once the signal has fired.
    fn check(&self) -> GeneratorResult<()> {
        if self.is_cancelled() {
            Err(GeneratorError::Cancelled)
        } else {
            Ok(())
        }
    }
}

/// A signal that never fires.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCancelled;

impl CancellationSignal for NeverCancelled {
    fn is_cancelled(&self) -> bool {
        false
    }
}

impl CancellationSignal for AtomicBool {
    fn is_cancelled(&self) -> bool {
        self.load(Ordering::Acquire)
    }
}

impl<T: CancellationSignal + ?Sized> CancellationSignal for Arc<T> {
    fn is_cancelled(&self) -> bool {
        (**self).is_cancelled()
    }
}

impl<T: CancellationSignal + ?Sized> CancellationSignal for &T {
    fn is_cancelled(&self) -> bool {
        (**self).is_cancelled()
    }
}

#[cfg(feature = "tokio")]
impl CancellationSignal for tokio_util::sync::CancellationToken {
    fn is_cancelled(&self) -> bool {
        tokio_util::sync::CancellationToken::is_cancelled(self)
    }
}
