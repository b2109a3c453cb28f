//! # LogWriter - diagnostic printer
//!
//! A minimal subscriber that forwards each [`Diagnostic`] to `tracing` at
//! `WARN` level. It is installed by default when no subscriber is configured.
//!
//! ## Example output
//! ```text
//! WARN inspector_hook: Cannot inject into the inspector twice. kind=double_registration seq=0
//! WARN inspector_hook: It looks like ... kind=possible_minified_build seq=1
//! WARN inspector_hook: The inspector encountered an error: ... kind=inspector_fault hook="on_commit_root" seq=2
//! ```

use crate::diagnostics::Diagnostic;
use crate::subscribers::Subscribe;

/// Diagnostic writer subscriber.
#[derive(Default)]
pub struct LogWriter;

impl LogWriter {
    /// Construct a new [`LogWriter`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Subscribe for LogWriter {
    fn on_diagnostic(&self, d: &Diagnostic) {
        let reason = d.reason.as_deref().unwrap_or("");
        match d.hook {
            Some(hook) => {
                tracing::warn!(target: "inspector_hook", kind = %d.kind, hook, seq = d.seq, "{reason}");
            }
            None => {
                tracing::warn!(target: "inspector_hook", kind = %d.kind, seq = d.seq, "{reason}");
            }
        }
    }

    fn name(&self) -> &'static str {
        "LogWriter"
    }
}
