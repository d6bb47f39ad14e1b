//! Cooperative cancellation.
//!
//! A [`CancelToken`] is cloned into the signal handler and passed to the
//! engine; move tasks check it before starting work. A tripped token turns
//! not-yet-started moves into `Cancelled` outcomes instead of dropping them.
//!
//! Relaxed atomics are sufficient for a one-way "stop" flag, and `cancel()`
//! is safe to call from signal handlers.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation (idempotent).
    #[inline]
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Check whether cancellation has been requested.
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}
