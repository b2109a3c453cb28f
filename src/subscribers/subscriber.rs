//! # Diagnostic subscriber trait.
//!
//! Provides [`Subscribe`] an extension point for plugging custom diagnostic
//! handlers into the bridge.
//!
//! ## Rules
//! - Delivery is synchronous, inline with the call that produced the diagnostic.
//! - Diagnostics are delivered in production order (FIFO) to every subscriber.
//! - Panics are caught and logged; other subscribers still receive the diagnostic.
//!
//! ## Example
//! ```rust
//! use inspector_hook::{Diagnostic, Subscribe};
//!
//! struct Counter(std::sync::atomic::AtomicUsize);
//!
//! impl Subscribe for Counter {
//!     fn on_diagnostic(&self, _d: &Diagnostic) {
//!         self.0.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
//!     }
//!
//!     fn name(&self) -> &'static str { "counter" }
//! }
//! ```

use crate::diagnostics::Diagnostic;

/// Diagnostic subscriber.
///
/// ### Implementation requirements
/// - Return quickly; diagnostics may be produced inside the host's commit phase.
/// - Handle errors internally; do not panic.
pub trait Subscribe: Send + Sync + 'static {
    /// Processes a single diagnostic.
    ///
    /// Panics are caught by [`SubscriberSet`](crate::SubscriberSet) and logged.
    fn on_diagnostic(&self, diagnostic: &Diagnostic);

    /// Returns the subscriber name used in logs.
    ///
    /// The default uses `type_name::<Self>()`, which can be verbose - override it when possible.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
