//! # inspector-hook
//!
//! **inspector-hook** connects a renderer's commit phase to an optional,
//! in-process inspector (a devtools-style debugging tool).
//!
//! It detects whether a capable inspector is attached, registers renderer
//! metadata with it exactly once, and forwards two lifecycle notifications
//! (subtree committed, node unmounted). An inspector can fail or panic at any
//! point; the renderer never sees it.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!        host environment                           host renderer
//!   ┌────────────────────────────┐          ┌─────────────────────────────┐
//!   │ Option<Arc<dyn Inspector>> │          │ setup        commit phase   │
//!   └─────────────┬──────────────┘          └───┬──────────────┬──────────┘
//!                 ▼                             │              │
//! ┌──────────────────────────────────────────────────────────────────────────┐
//! │  Bridge                                     ▼              ▼             │
//! │  - detect (once, in build)        register_renderer   notify_commit      │
//! │  - RendererId slot (set once)           │             notify_unmount     │
//! │  - SubscriberSet (diagnostics)          │                  │             │
//! └─────────────────────────────────────────┼──────────────────┼─────────────┘
//!                                           ▼                  ▼
//!                                Inspector::register    guard(on_commit_*)
//!                                           │                  │
//!                                           ▼                  ▼ Err / panic
//!                                      RendererId         Diagnostic (dev only)
//!                                                              │
//!                                                              ▼
//!                                               LogWriter / Recorder / custom
//! ```
//!
//! ### Lifecycle
//! ```text
//! build() ─┬─► Detected ──► register_renderer() ──► Registered ──► notifications forwarded
//!          └─► Disabled ──► every operation is a no-op
//! ```
//!
//! ## Features
//! | Area              | Description                                                   | Key types / traits                          |
//! |-------------------|---------------------------------------------------------------|---------------------------------------------|
//! | **Bridge**        | Detection, one-time registration, fault-isolated notification | [`Bridge`], [`BridgeState`]                 |
//! | **Inspector API** | Contract implemented by the external tool                     | [`Inspector`], [`Renderer`], [`RendererId`] |
//! | **Registration**  | Metadata and the minification self-check                      | [`RendererDescriptor`], [`MinificationProbe`] |
//! | **Diagnostics**   | Non-fatal warnings and their subscribers                      | [`Diagnostic`], [`Subscribe`], [`LogWriter`] |
//! | **Errors**        | Typed errors at the inspector boundary                        | [`HookError`], [`InspectorError`]           |
//! | **Configuration** | Build mode and warning switches                               | [`Config`], [`BuildMode`]                   |
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use inspector_hook::{
//!     Bridge, BridgeState, BundleType, Config, Inspector, InspectorError, Renderer,
//!     RendererDescriptor, RendererId,
//! };
//!
//! struct Scene;
//! impl Renderer for Scene {
//!     type Instance = u64;
//!     type HostNode = String;
//!     type Root = Vec<u64>;
//! }
//!
//! struct Devtools;
//! impl Inspector<Scene> for Devtools {
//!     fn register(&self, _d: RendererDescriptor<Scene>) -> Result<RendererId, InspectorError> {
//!         Ok(RendererId::new(1))
//!     }
//!     fn on_commit_root(&self, _id: RendererId, _root: &Vec<u64>) -> Result<(), InspectorError> {
//!         Err(InspectorError::failed("not today"))
//!     }
//!     fn on_commit_unmount(&self, _id: RendererId, _node: &u64) -> Result<(), InspectorError> {
//!         Ok(())
//!     }
//! }
//!
//! let inspector: Arc<dyn Inspector<Scene>> = Arc::new(Devtools);
//! let bridge = Bridge::<Scene>::builder(Config::default())
//!     .with_inspector(Some(inspector))
//!     .build();
//!
//! bridge
//!     .register_renderer(
//!         |node: &String| node.parse().ok(),
//!         |id: &u64| Some(id.to_string()),
//!         BundleType::Development,
//!         "1.0.0",
//!     )
//!     .expect("inspector accepted the renderer");
//! assert_eq!(bridge.state(), BridgeState::Registered);
//!
//! // The inspector fails; the commit phase carries on.
//! bridge.notify_commit(&vec![1, 2, 3]);
//! bridge.notify_unmount(&2);
//! ```

mod core;
mod diagnostics;
mod error;
mod inspector;
mod subscribers;

pub mod global;

// ---- Public re-exports ----

pub use self::core::{Bridge, BridgeBuilder, BridgeState, BuildMode, Config};
pub use diagnostics::{Diagnostic, DiagnosticKind};
pub use error::{HookError, InspectorError};
pub use inspector::{
    BundleType, FindFiberByHostInstance, FindHostInstanceByFiber, Inspector, MINIFICATION_PROBE_ID,
    MinificationProbe, Renderer, RendererDescriptor, RendererId,
};
pub use subscribers::{LogWriter, Recorder, Subscribe, SubscriberSet};
