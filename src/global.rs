//! # Process-wide inspector slot.
//!
//! Hosts whose inspector is loaded independently of the renderer (for example
//! by a debug shell that starts before the application) can park the handle
//! here. [`Bridge::from_environment`](crate::Bridge::from_environment) then
//! performs capability detection against whatever is installed.
//!
//! The slot is typed per [`Renderer`]: a handle installed for one renderer is
//! invisible to bridges of another.
//!
//! ```rust
//! # use std::sync::Arc;
//! # use inspector_hook::{global, Bridge, BridgeState, Config, Inspector, InspectorError,
//! #     Renderer, RendererDescriptor, RendererId};
//! # struct Dom;
//! # impl Renderer for Dom { type Instance = u32; type HostNode = u32; type Root = (); }
//! # struct Tool;
//! # impl Inspector<Dom> for Tool {
//! #     fn register(&self, _: RendererDescriptor<Dom>) -> Result<RendererId, InspectorError> { Ok(RendererId::new(1)) }
//! #     fn on_commit_root(&self, _: RendererId, _: &()) -> Result<(), InspectorError> { Ok(()) }
//! #     fn on_commit_unmount(&self, _: RendererId, _: &u32) -> Result<(), InspectorError> { Ok(()) }
//! # }
//! global::install_inspector::<Dom>(Arc::new(Tool));
//!
//! let bridge = Bridge::<Dom>::from_environment(Config::default());
//! assert_eq!(bridge.state(), BridgeState::Detected);
//! # global::reset_for_testing();
//! ```

use std::any::Any;
use std::sync::{Arc, PoisonError, RwLock};

use crate::inspector::{Inspector, Renderer};

static SLOT: RwLock<Option<Box<dyn Any + Send + Sync>>> = RwLock::new(None);

/// Installs `inspector` in the process-wide slot, replacing any previous handle.
///
/// Bridges already built keep the handle they detected.
pub fn install_inspector<R: Renderer>(inspector: Arc<dyn Inspector<R>>) {
    let mut slot = SLOT.write().unwrap_or_else(PoisonError::into_inner);
    *slot = Some(Box::new(inspector));
}

/// Returns the installed handle if it was installed for renderer `R`.
pub fn installed_inspector<R: Renderer>() -> Option<Arc<dyn Inspector<R>>> {
    let slot = SLOT.read().unwrap_or_else(PoisonError::into_inner);
    slot.as_ref()?
        .downcast_ref::<Arc<dyn Inspector<R>>>()
        .cloned()
}

/// True if any handle is installed.
pub fn is_installed() -> bool {
    SLOT.read().unwrap_or_else(PoisonError::into_inner).is_some()
}

/// Empties the slot so tests can start from a clean process state.
pub fn reset_for_testing() {
    SLOT.write().unwrap_or_else(PoisonError::into_inner).take();
}
