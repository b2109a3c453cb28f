//! # Bridge configuration.
//!
//! Provides [`Config`] centralized settings for a [`Bridge`](crate::Bridge).
//!
//! Config is used in two ways:
//! 1. **Bridge creation**: `Bridge::builder(config)`
//! 2. **Probe execution**: the build mode is forwarded to the minification probe
//!
//! ## Build modes
//! - `Development` → inspector faults are reported as diagnostics
//! - `Production` → inspector faults are discarded silently

/// Build configuration the host renderer runs under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildMode {
    /// Unoptimized build with developer warnings.
    Development,
    /// Optimized build; fault diagnostics are suppressed.
    Production,
}

impl BuildMode {
    #[inline]
    pub fn is_development(self) -> bool {
        matches!(self, BuildMode::Development)
    }
}

impl Default for BuildMode {
    /// `Development` when compiled with `debug_assertions`, `Production` otherwise.
    fn default() -> Self {
        if cfg!(debug_assertions) {
            BuildMode::Development
        } else {
            BuildMode::Production
        }
    }
}

/// Configuration for the bridge.
///
/// ## Field semantics
/// - `build_mode`: gates inspector fault diagnostics
/// - `warn_on_minified`: enables the minification probe warning
///
/// ## Notes
/// Misuse (double registration) is reported regardless of these settings.
#[derive(Clone, Debug)]
pub struct Config {
    /// Build configuration of the host renderer.
    pub build_mode: BuildMode,

    /// Emit a diagnostic when the minification probe cannot recover its identifier.
    ///
    /// Hosts that knowingly ship stripped symbols can turn this off.
    pub warn_on_minified: bool,
}

impl Config {
    /// Development configuration with every diagnostic enabled.
    pub fn development() -> Self {
        Self {
            build_mode: BuildMode::Development,
            ..Self::default()
        }
    }

    /// Production configuration.
    pub fn production() -> Self {
        Self {
            build_mode: BuildMode::Production,
            ..Self::default()
        }
    }

    /// Returns whether inspector faults are turned into diagnostics.
    ///
    /// - `true` → development build
    /// - `false` → production build (faults are discarded)
    #[inline]
    pub fn reports_faults(&self) -> bool {
        self.build_mode.is_development()
    }
}

impl Default for Config {
    /// Default configuration:
    ///
    /// - `build_mode = BuildMode::default()` (follows `debug_assertions`)
    /// - `warn_on_minified = true`
    fn default() -> Self {
        Self {
            build_mode: BuildMode::default(),
            warn_on_minified: true,
        }
    }
}
