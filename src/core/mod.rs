//! Bridge core: detection, registration and notification.
//!
//! The only public API from this module is [`Bridge`] (with its builder,
//! [`Config`] and [`BridgeState`]).
//!
//! Internal modules:
//! - [`detect`]: one-time capability check of the injected inspector;
//! - [`registrar`]: one-time renderer registration and minification probe;
//! - [`notifier`]: commit/unmount forwarding behind a fault boundary.
//!
//! ## Wiring
//! ```text
//! BridgeBuilder::build()
//!     └─► detect(candidate) ──► Some(inspector) = Detected | None = Disabled
//!
//! host setup ──► register_renderer() ──► Inspector::register ──► RendererId (set once)
//!
//! commit phase
//!     ├─► notify_commit(&root)    ──► guard(on_commit_root)    ──► Err → Diagnostic (dev only)
//!     └─► notify_unmount(&node)   ──► guard(on_commit_unmount) ──► Err → Diagnostic (dev only)
//! ```

mod bridge;
mod builder;
mod config;
mod detect;
mod notifier;
mod registrar;

#[cfg(test)]
pub(crate) mod mock;

pub use bridge::{Bridge, BridgeState};
pub use builder::BridgeBuilder;
pub use config::{BuildMode, Config};
