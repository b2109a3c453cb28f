//! # Diagnostic warnings emitted by the bridge.
//!
//! The [`DiagnosticKind`] enum classifies warnings across two categories:
//! - **Setup warnings**: misuse and environment mismatch found while registering
//! - **Fault warnings**: inspector callbacks that failed during the commit phase
//!
//! The [`Diagnostic`] struct carries additional metadata such as timestamps,
//! the hook involved and a human-readable reason.
//!
//! ## Ordering guarantees
//! Each diagnostic has a globally unique sequence number (`seq`) that increases
//! monotonically across all bridges in the process.
//!
//! ## Example
//! ```rust
//! use inspector_hook::{Diagnostic, DiagnosticKind};
//!
//! let d = Diagnostic::new(DiagnosticKind::InspectorFault)
//!     .with_hook("on_commit_root")
//!     .with_reason("boom");
//!
//! assert_eq!(d.kind, DiagnosticKind::InspectorFault);
//! assert_eq!(d.hook, Some("on_commit_root"));
//! assert_eq!(d.reason.as_deref(), Some("boom"));
//! ```

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::time::SystemTime;

use crate::error::HookError;

/// Global sequence counter for diagnostic ordering.
static DIAGNOSTIC_SEQ: AtomicU64 = AtomicU64::new(0);

/// Message used when a second registration is attempted.
pub(crate) const DOUBLE_REGISTRATION: &str = "Cannot inject into the inspector twice.";

/// Message used when the minification probe cannot recover its identifier.
pub(crate) const POSSIBLE_MINIFIED_BUILD: &str = "It looks like you're using a build with stripped \
     symbol names in a development configuration. When deploying, use the production build \
     which skips development warnings and is faster.";

/// Classification of diagnostic warnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    // === Setup warnings ===
    /// `register_renderer` was called after a renderer id was already stored.
    ///
    /// Sets:
    /// - `reason`: fixed message
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    DoubleRegistration,

    /// The minification probe could not recover its identifier.
    ///
    /// Sets:
    /// - `reason`: fixed message
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    PossibleMinifiedBuild,

    // === Fault warnings ===
    /// An inspector notification failed or panicked.
    ///
    /// Sets:
    /// - `hook`: inspector hook name
    /// - `reason`: error or panic message
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    InspectorFault,
}

impl DiagnosticKind {
    /// Returns a short stable label (snake_case) for use in logs.
    pub fn as_label(&self) -> &'static str {
        match self {
            DiagnosticKind::DoubleRegistration => "double_registration",
            DiagnosticKind::PossibleMinifiedBuild => "possible_minified_build",
            DiagnosticKind::InspectorFault => "inspector_fault",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}

/// Diagnostic warning with optional metadata.
///
/// - `seq`: monotonic global sequence for ordering
/// - `at`: wall-clock timestamp (for logs)
/// - other optional fields are set depending on the [`DiagnosticKind`]
#[derive(Clone, Debug)]
pub struct Diagnostic {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Wall-clock timestamp.
    pub at: SystemTime,
    /// Diagnostic classification.
    pub kind: DiagnosticKind,
    /// Inspector hook involved, if applicable.
    pub hook: Option<&'static str>,
    /// Human-readable reason.
    pub reason: Option<Arc<str>>,
}

impl Diagnostic {
    /// Creates a new diagnostic of the given kind with current timestamp and next sequence number.
    pub fn new(kind: DiagnosticKind) -> Self {
        Self {
            seq: DIAGNOSTIC_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            at: SystemTime::now(),
            kind,
            hook: None,
            reason: None,
        }
    }

    /// Attaches a human-readable reason.
    #[inline]
    pub fn with_reason(mut self, reason: impl Into<Arc<str>>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Attaches the inspector hook name.
    #[inline]
    pub fn with_hook(mut self, hook: &'static str) -> Self {
        self.hook = Some(hook);
        self
    }

    /// Creates a double registration warning.
    #[inline]
    pub fn double_registration() -> Self {
        Diagnostic::new(DiagnosticKind::DoubleRegistration).with_reason(DOUBLE_REGISTRATION)
    }

    /// Creates a possible minified build warning.
    #[inline]
    pub fn possible_minified_build() -> Self {
        Diagnostic::new(DiagnosticKind::PossibleMinifiedBuild).with_reason(POSSIBLE_MINIFIED_BUILD)
    }

    /// Creates an inspector fault warning from the captured error.
    #[inline]
    pub fn inspector_fault(err: &HookError) -> Self {
        let d = Diagnostic::new(DiagnosticKind::InspectorFault)
            .with_reason(format!("The inspector encountered an error: {}", err.as_message()));
        match err.hook() {
            Some(hook) => d.with_hook(hook),
            None => d,
        }
    }

    #[inline]
    pub fn is_inspector_fault(&self) -> bool {
        matches!(self.kind, DiagnosticKind::InspectorFault)
    }
}
