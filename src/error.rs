//! Error types used by the bridge and by inspector callbacks.
//!
//! This module defines two main error enums:
//!
//! - [`InspectorError`] - errors returned by an [`Inspector`](crate::Inspector) implementation.
//! - [`HookError`] - errors observed by the bridge at the inspector boundary.
//!
//! [`HookError`] provides helper methods (`as_label`, `as_message`) for logging
//! and diagnostics.

use std::any::Any;
use thiserror::Error;

/// # Errors returned by an inspector callback.
///
/// Inspectors report failures by returning this error; panics are handled
/// separately by the bridge and never need to be converted by the inspector.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InspectorError {
    /// The inspector could not handle the call.
    #[error("inspector failed: {message}")]
    Failed {
        /// The underlying error message.
        message: String,
    },
}

impl InspectorError {
    /// Shorthand for [`InspectorError::Failed`].
    pub fn failed(message: impl Into<String>) -> Self {
        InspectorError::Failed {
            message: message.into(),
        }
    }
}

/// # Errors observed at the inspector boundary.
///
/// Fault variants (`InspectorFailed`, `InspectorPanicked`) are produced by the
/// notifiers and never leave the bridge; they are only turned into diagnostics.
/// `RegistrationFailed` is the one error handed back to the host, because
/// registration runs at setup time rather than inside the commit phase.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum HookError {
    /// An inspector callback returned an error.
    #[error("inspector hook '{hook}' failed: {error}")]
    InspectorFailed {
        /// Name of the hook that was invoked.
        hook: &'static str,
        /// The error returned by the inspector.
        error: InspectorError,
    },

    /// An inspector callback panicked.
    #[error("inspector hook '{hook}' panicked: {info}")]
    InspectorPanicked {
        /// Name of the hook that was invoked.
        hook: &'static str,
        /// Panic payload rendered as text.
        info: String,
    },

    /// The inspector rejected the renderer registration.
    #[error("renderer registration failed: {error}")]
    RegistrationFailed {
        /// The error returned by the inspector.
        error: InspectorError,
    },
}

impl HookError {
    /// Returns a short stable label (snake_case) for use in logs.
    ///
    /// # Example
    /// ```
    /// use inspector_hook::{HookError, InspectorError};
    ///
    /// let err = HookError::RegistrationFailed { error: InspectorError::failed("nope") };
    /// assert_eq!(err.as_label(), "registration_failed");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            HookError::InspectorFailed { .. } => "inspector_failed",
            HookError::InspectorPanicked { .. } => "inspector_panicked",
            HookError::RegistrationFailed { .. } => "registration_failed",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            HookError::InspectorFailed { hook, error } => format!("{hook}: {error}"),
            HookError::InspectorPanicked { hook, info } => format!("{hook}: panic: {info}"),
            HookError::RegistrationFailed { error } => format!("register: {error}"),
        }
    }

    /// Name of the hook involved, if any.
    pub fn hook(&self) -> Option<&'static str> {
        match self {
            HookError::InspectorFailed { hook, .. } | HookError::InspectorPanicked { hook, .. } => {
                Some(*hook)
            }
            HookError::RegistrationFailed { .. } => None,
        }
    }
}

/// Renders a panic payload as text.
pub(crate) fn panic_info(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&'static str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}
