//! # Bridge state.
//!
//! [`Bridge`] owns the only mutable state of the crate: the renderer id slot.
//!
//! ## Lifecycle
//! ```text
//! build() ──► Detected ──► register_renderer() ──► Registered
//!    └──────► Disabled
//! ```
//! - The detection outcome is fixed at construction.
//! - The renderer id is written at most once and never cleared.
//! - Notifications are forwarded only in `Registered`.

use std::sync::{Arc, Mutex, OnceLock};

use crate::Inspector;
use crate::diagnostics::Diagnostic;
use crate::inspector::{MinificationProbe, Renderer, RendererId};
use crate::subscribers::SubscriberSet;

use super::{BridgeBuilder, Config};

/// Observable lifecycle state of a [`Bridge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeState {
    /// No inspector, or the inspector lacks the capability flag.
    Disabled,
    /// A capable inspector is present; no renderer registered yet.
    Detected,
    /// A renderer id is stored; notifications are forwarded.
    Registered,
}

/// Bridge between a renderer's commit phase and an optional inspector.
///
/// Every operation is safe to call whether or not an inspector is present,
/// and none of them lets an inspector fault reach the caller.
///
/// `Bridge` is `Send + Sync`: registration is serialised and the renderer id
/// is published through a [`OnceLock`], so a notifier never observes a
/// partially written id.
pub struct Bridge<R: Renderer> {
    pub(super) cfg: Config,
    pub(super) inspector: Option<Arc<dyn Inspector<R>>>,
    pub(super) renderer_id: OnceLock<RendererId>,
    pub(super) registering: Mutex<()>,
    pub(super) probe: MinificationProbe,
    pub(super) subs: SubscriberSet,
}

impl<R: Renderer> Bridge<R> {
    /// Returns a builder for a bridge with the given configuration.
    pub fn builder(cfg: Config) -> BridgeBuilder<R> {
        BridgeBuilder::new(cfg)
    }

    /// A bridge with no inspector; every operation is a no-op.
    pub fn disabled() -> Self {
        BridgeBuilder::new(Config::default()).build()
    }

    /// A bridge detected against the inspector installed in the process-wide slot.
    ///
    /// See [`install_inspector`](crate::global::install_inspector).
    pub fn from_environment(cfg: Config) -> Self {
        BridgeBuilder::new(cfg).with_environment_inspector().build()
    }

    pub(super) fn from_parts(
        cfg: Config,
        inspector: Option<Arc<dyn Inspector<R>>>,
        probe: MinificationProbe,
        subs: SubscriberSet,
    ) -> Self {
        Self {
            cfg,
            inspector,
            renderer_id: OnceLock::new(),
            registering: Mutex::new(()),
            probe,
            subs,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> BridgeState {
        match (&self.inspector, self.renderer_id.get()) {
            (None, _) => BridgeState::Disabled,
            (Some(_), None) => BridgeState::Detected,
            (Some(_), Some(_)) => BridgeState::Registered,
        }
    }

    /// The id returned by the inspector, once registered.
    #[inline]
    pub fn renderer_id(&self) -> Option<RendererId> {
        self.renderer_id.get().copied()
    }

    /// True when a capable inspector was found at construction.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.inspector.is_some()
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// Inspector and id, only when both are available.
    pub(super) fn active(&self) -> Option<(&dyn Inspector<R>, RendererId)> {
        let id = self.renderer_id.get().copied()?;
        let inspector = self.inspector.as_deref()?;
        Some((inspector, id))
    }

    pub(super) fn emit(&self, diagnostic: Diagnostic) {
        self.subs.emit(&diagnostic);
    }
}
