//! Inspector boundary: the contract consumed by the bridge.
//!
//! The inspector is an external, optional tool living in the same process.
//! Nothing in this module implements it; the types here describe what the
//! bridge hands over and what it expects back.
//!
//! ## Contents
//! - [`Renderer`] associated payload types of the host renderer
//! - [`Inspector`], [`RendererId`] the inspector handle and its opaque id
//! - [`RendererDescriptor`], [`BundleType`] metadata passed to `register`
//! - [`MinificationProbe`] runtime check for stripped symbol names
//!
//! ## Call sequence
//! ```text
//! host setup ──► Inspector::register(RendererDescriptor) ──► RendererId
//! commit     ──► Inspector::on_commit_root(id, &Root)
//! unmount    ──► Inspector::on_commit_unmount(id, &Instance)
//! ```

mod descriptor;
mod handle;
mod probe;

pub use descriptor::{BundleType, FindFiberByHostInstance, FindHostInstanceByFiber, RendererDescriptor};
pub use handle::{Inspector, Renderer, RendererId};
pub use probe::{MINIFICATION_PROBE_ID, MinificationProbe};
