//! # Inspector handle and renderer payload types.
//!
//! [`Inspector`] is implemented by the external tool. Every callback may fail,
//! either by returning [`InspectorError`] or by panicking; the bridge treats
//! both as inspector faults.
//!
//! ## Example
//! ```rust
//! use inspector_hook::{Inspector, InspectorError, Renderer, RendererDescriptor, RendererId};
//!
//! struct Dom;
//! impl Renderer for Dom {
//!     type Instance = u32;
//!     type HostNode = String;
//!     type Root = Vec<u32>;
//! }
//!
//! struct Printer;
//!
//! impl Inspector<Dom> for Printer {
//!     fn register(&self, d: RendererDescriptor<Dom>) -> Result<RendererId, InspectorError> {
//!         println!("renderer {} attached", d.version());
//!         Ok(RendererId::new(1))
//!     }
//!
//!     fn on_commit_root(&self, id: RendererId, root: &Vec<u32>) -> Result<(), InspectorError> {
//!         println!("{id}: committed {} nodes", root.len());
//!         Ok(())
//!     }
//!
//!     fn on_commit_unmount(&self, id: RendererId, node: &u32) -> Result<(), InspectorError> {
//!         println!("{id}: unmounted {node}");
//!         Ok(())
//!     }
//! }
//! ```

use std::fmt;

use crate::error::InspectorError;

use super::RendererDescriptor;

/// Payload types of the host renderer.
///
/// The bridge never inspects these values; it only forwards references.
pub trait Renderer: 'static {
    /// Renderer-internal node. Also the payload of unmount notifications.
    type Instance;
    /// Host platform node (e.g. a DOM element or a native view).
    type HostNode;
    /// A committed subtree.
    type Root;
}

/// Opaque identifier returned by [`Inspector::register`].
///
/// The bridge only stores it and passes it back unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RendererId(u64);

impl RendererId {
    /// Wraps a raw identifier chosen by the inspector.
    #[inline]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw identifier.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RendererId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "renderer#{}", self.0)
    }
}

/// The external inspector, consumed through its callback contract.
///
/// Lifetime is owned by the host environment; the bridge holds an `Arc`.
pub trait Inspector<R: Renderer>: Send + Sync + 'static {
    /// Capability flag. A handle returning `false` is treated as absent.
    fn supports_fiber(&self) -> bool {
        true
    }

    /// Registers renderer metadata. Called at most once per bridge.
    fn register(&self, descriptor: RendererDescriptor<R>) -> Result<RendererId, InspectorError>;

    /// A subtree was committed. Return value is ignored beyond fault reporting.
    fn on_commit_root(&self, id: RendererId, root: &R::Root) -> Result<(), InspectorError>;

    /// A node was unmounted. Return value is ignored beyond fault reporting.
    fn on_commit_unmount(&self, id: RendererId, node: &R::Instance) -> Result<(), InspectorError>;
}
