//! Cancellation of a running solve.
//!
//! The owner of a solve keeps one clone of a [`Context`] and hands another to
//! the search. Solvers poll [`Context::is_done`] between step events and
//! unwind as soon as it returns `true`.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared stop flag. All clones observe the same flag, and once set it stays
/// set.
#[derive(Clone, Debug, Default)]
pub struct Context {
    stop: Arc<AtomicBool>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// A context that is cancelled from the start.
    pub fn cancelled() -> Self {
        let ctx = Self::new();
        ctx.cancel();
        ctx
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.stop.load(Ordering::Acquire)
    }

    /// Ask every holder of this context to stop. Idempotent.
    #[inline]
    pub fn cancel(&self) {
        self.stop.store(true, Ordering::Release);
    }
}
