//! # Diagnostic subscribers for the bridge.
//!
//! This module provides the [`Subscribe`] trait and built-in implementations
//! for handling [`Diagnostic`](crate::Diagnostic)s produced by the bridge.
//!
//! ## Architecture
//! ```text
//! Diagnostic flow:
//!   Registrar / Notifier ── emit(Diagnostic) ──► SubscriberSet
//!                                                     │
//!                                                     ├──► Subscribe::on_diagnostic(&Diagnostic)
//!                                                     │         │
//!                                                     │    ┌────┴─────┬──────────┐
//!                                                     │    ▼          ▼          ▼
//!                                                     │  LogWriter  Recorder   Custom
//!                                                     │
//!                                                     └──► panic caught → tracing::error!
//! ```
//!
//! ## Implementing custom subscribers
//! ```no_run
//! use inspector_hook::{Diagnostic, DiagnosticKind, Subscribe};
//!
//! struct Alerts;
//!
//! impl Subscribe for Alerts {
//!     fn on_diagnostic(&self, d: &Diagnostic) {
//!         if d.kind == DiagnosticKind::InspectorFault {
//!             // page someone
//!         }
//!     }
//! }
//! ```

mod log;
mod recorder;
mod subscriber;
mod subscriber_set;

pub use log::LogWriter;
pub use recorder::Recorder;
pub use subscriber::Subscribe;
pub use subscriber_set::SubscriberSet;
