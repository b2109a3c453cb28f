//! # Recorder - in-memory diagnostic log
//!
//! Keeps every diagnostic it receives so hosts can surface them in their own
//! UI, and tests can count them.

use std::sync::Mutex;

use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::subscribers::Subscribe;

/// Subscriber that stores received diagnostics in order.
#[derive(Default)]
pub struct Recorder {
    seen: Mutex<Vec<Diagnostic>>,
}

impl Recorder {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of everything recorded so far.
    pub fn snapshot(&self) -> Vec<Diagnostic> {
        self.seen.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Number of recorded diagnostics of the given kind.
    pub fn count(&self, kind: DiagnosticKind) -> usize {
        self.seen
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .filter(|d| d.kind == kind)
            .count()
    }

    /// Total number of recorded diagnostics.
    pub fn len(&self) -> usize {
        self.seen.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// True if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops everything recorded so far.
    pub fn clear(&self) {
        self.seen.lock().unwrap_or_else(|e| e.into_inner()).clear();
    }
}

impl Subscribe for Recorder {
    fn on_diagnostic(&self, d: &Diagnostic) {
        self.seen
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(d.clone());
    }

    fn name(&self) -> &'static str {
        "recorder"
    }
}
