//! # Commit-phase notifications behind a fault boundary.
//!
//! Both notifiers run inline inside the host's commit phase, where unwinding
//! would leave renderer state half applied. Every inspector call therefore goes
//! through [`guard`], which turns an `Err` return or a panic into a
//! [`HookError`] that never leaves this module.
//!
//! ## Rules
//! - No renderer id stored → return immediately, no diagnostic.
//! - One call in, exactly one inspector call out, in the same order.
//! - Faults become `InspectorFault` diagnostics in development builds and are
//!   discarded in production builds.
//! - No retry, no buffering.

use std::panic::{self, AssertUnwindSafe};

use crate::diagnostics::Diagnostic;
use crate::error::{HookError, InspectorError, panic_info};
use crate::inspector::Renderer;

use super::Bridge;

/// Runs one inspector callback, capturing both error returns and panics.
fn guard<F>(hook: &'static str, call: F) -> Result<(), HookError>
where
    F: FnOnce() -> Result<(), InspectorError>,
{
    match panic::catch_unwind(AssertUnwindSafe(call)) {
        Ok(Ok(())) => Ok(()),
        Ok(Err(error)) => Err(HookError::InspectorFailed { hook, error }),
        Err(payload) => Err(HookError::InspectorPanicked {
            hook,
            info: panic_info(&*payload),
        }),
    }
}

impl<R: Renderer> Bridge<R> {
    /// Forwards a committed subtree to the inspector.
    pub fn notify_commit(&self, root: &R::Root) {
        let Some((inspector, id)) = self.active() else {
            return;
        };
        let res = guard("on_commit_root", || inspector.on_commit_root(id, root));
        self.report(res);
    }

    /// Forwards an unmounted node to the inspector.
    pub fn notify_unmount(&self, node: &R::Instance) {
        let Some((inspector, id)) = self.active() else {
            return;
        };
        let res = guard("on_commit_unmount", || inspector.on_commit_unmount(id, node));
        self.report(res);
    }

    fn report(&self, res: Result<(), HookError>) {
        if let Err(err) = res {
            if self.cfg.reports_faults() {
                self.emit(Diagnostic::inspector_fault(&err));
            }
        }
    }
}
