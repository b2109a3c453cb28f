//! Diagnostic warnings: data model.
//!
//! A diagnostic is a non-fatal, observational report produced by the bridge.
//! It never alters control flow; it is handed to the configured
//! [`Subscribe`](crate::Subscribe) implementations and then forgotten.
//!
//! ## Contents
//! - [`DiagnosticKind`], [`Diagnostic`] classification and payload metadata
//!
//! ## Quick reference
//! - **Producers**: the registrar (double registration, minified build) and the
//!   notifiers (inspector faults, development builds only).
//! - **Consumers**: [`SubscriberSet`](crate::SubscriberSet), which delivers each
//!   diagnostic to every subscriber in order.

mod diagnostic;

pub use diagnostic::{Diagnostic, DiagnosticKind};
