//! # Synchronous diagnostic fan-out to multiple subscribers.
//!
//! Provides [`SubscriberSet`] - delivers each diagnostic to every subscriber
//! inline, in the order subscribers were configured.
//!
//! ## Architecture
//! ```text
//! emit(diagnostic)
//!     │
//!     ├──► subscriber1.on_diagnostic()
//!     │         └──────► panic → tracing::error!, continue
//!     ├──► subscriber2.on_diagnostic()
//!     └──► subscriberN.on_diagnostic()
//! ```
//!
//! ## Rules
//! - **Synchronous**: `emit()` returns after every subscriber has been called
//! - **Isolation**: a panicking subscriber doesn't affect others or the caller
//! - **FIFO**: each subscriber sees diagnostics in emission order
//!
//! **Warning**: `AssertUnwindSafe` is used, which can leave shared state inconsistent
//! if a subscriber uses `Arc<Mutex<T>>` and panics while holding the lock.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use crate::diagnostics::Diagnostic;
use crate::error::panic_info;
use crate::subscribers::Subscribe;

/// Fan-out coordinator for multiple diagnostic subscribers.
#[derive(Clone, Default)]
pub struct SubscriberSet {
    subs: Vec<Arc<dyn Subscribe>>,
}

impl SubscriberSet {
    /// Creates a new set from the given subscribers.
    #[must_use]
    pub fn new(subs: Vec<Arc<dyn Subscribe>>) -> Self {
        Self { subs }
    }

    /// Delivers one diagnostic to all subscribers.
    pub fn emit(&self, diagnostic: &Diagnostic) {
        for sub in &self.subs {
            let res = panic::catch_unwind(AssertUnwindSafe(|| sub.on_diagnostic(diagnostic)));
            if let Err(payload) = res {
                tracing::error!(
                    subscriber = sub.name(),
                    kind = %diagnostic.kind,
                    info = %panic_info(&*payload),
                    "diagnostic subscriber panicked"
                );
            }
        }
    }

    /// True if there are no subscribers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subs.is_empty()
    }

    /// Number of subscribers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.subs.len()
    }
}
