//! # Renderer metadata handed to the inspector.

use std::fmt;
use std::sync::Arc;

use super::{MinificationProbe, Renderer};

/// Lookup from a renderer instance to its host node.
pub type FindHostInstanceByFiber<R> =
    Arc<dyn Fn(&<R as Renderer>::Instance) -> Option<<R as Renderer>::HostNode> + Send + Sync>;

/// Lookup from a host node back to the renderer instance.
pub type FindFiberByHostInstance<R> =
    Arc<dyn Fn(&<R as Renderer>::HostNode) -> Option<<R as Renderer>::Instance> + Send + Sync>;

/// Build flavour of the renderer, reported as a numeric tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BundleType {
    /// Optimized build (tag `0`).
    #[default]
    Production,
    /// Development build with warnings (tag `1`).
    Development,
}

impl BundleType {
    /// Numeric tag understood by inspectors.
    #[inline]
    pub const fn as_tag(self) -> u8 {
        match self {
            BundleType::Production => 0,
            BundleType::Development => 1,
        }
    }

    /// Parses a numeric tag; unknown values yield `None`.
    #[inline]
    pub const fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0 => Some(BundleType::Production),
            1 => Some(BundleType::Development),
            _ => None,
        }
    }
}

/// Record passed to [`Inspector::register`](super::Inspector::register).
///
/// Immutable once constructed. Cloning is cheap: the lookups and the version
/// are shared.
pub struct RendererDescriptor<R: Renderer> {
    find_host_instance_by_fiber: FindHostInstanceByFiber<R>,
    find_fiber_by_host_instance: FindFiberByHostInstance<R>,
    bundle_type: BundleType,
    version: Arc<str>,
    test_minification: MinificationProbe,
}

impl<R: Renderer> RendererDescriptor<R> {
    pub(crate) fn new(
        find_fiber_by_host_instance: FindFiberByHostInstance<R>,
        find_host_instance_by_fiber: FindHostInstanceByFiber<R>,
        bundle_type: BundleType,
        version: Arc<str>,
        test_minification: MinificationProbe,
    ) -> Self {
        Self {
            find_host_instance_by_fiber,
            find_fiber_by_host_instance,
            bundle_type,
            version,
            test_minification,
        }
    }

    /// Resolves the host node rendered for `instance`.
    pub fn find_host_instance_by_fiber(&self, instance: &R::Instance) -> Option<R::HostNode> {
        (self.find_host_instance_by_fiber)(instance)
    }

    /// Resolves the renderer instance owning `node`.
    pub fn find_fiber_by_host_instance(&self, node: &R::HostNode) -> Option<R::Instance> {
        (self.find_fiber_by_host_instance)(node)
    }

    #[inline]
    pub fn bundle_type(&self) -> BundleType {
        self.bundle_type
    }

    #[inline]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// The diagnostic probe, for inspectors that run their own minification check.
    #[inline]
    pub fn test_minification(&self) -> &MinificationProbe {
        &self.test_minification
    }
}

impl<R: Renderer> Clone for RendererDescriptor<R> {
    fn clone(&self) -> Self {
        Self {
            find_host_instance_by_fiber: Arc::clone(&self.find_host_instance_by_fiber),
            find_fiber_by_host_instance: Arc::clone(&self.find_fiber_by_host_instance),
            bundle_type: self.bundle_type,
            version: Arc::clone(&self.version),
            test_minification: self.test_minification.clone(),
        }
    }
}

impl<R: Renderer> fmt::Debug for RendererDescriptor<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RendererDescriptor")
            .field("bundle_type", &self.bundle_type)
            .field("version", &self.version)
            .field("test_minification", &self.test_minification)
            .finish_non_exhaustive()
    }
}
