//! # Runtime check for stripped symbol names.
//!
//! A development build that went through a symbol-stripping or name-mangling
//! step still works, but loses the readable names inspectors rely on. The
//! probe is a real function whose name is recovered at runtime and compared
//! against [`MINIFICATION_PROBE_ID`].
//!
//! Recovery is pluggable. The default walks the call stack from inside the
//! probe and resolves the frame's symbol with the `backtrace` crate, so the
//! answer reflects the symbols actually present in the built artifact. Hosts
//! with other build pipelines supply their own recovery.
//!
//! ```rust
//! use inspector_hook::MinificationProbe;
//!
//! assert!(MinificationProbe::default().is_intact());
//!
//! let stripped = MinificationProbe::with_recovery(|| "a".into());
//! assert!(!stripped.is_intact());
//! ```

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::core::BuildMode;

/// Identifier the probe must be recoverable under.
pub const MINIFICATION_PROBE_ID: &str = "test_minification";

type Recovery = Arc<dyn Fn() -> Cow<'static, str> + Send + Sync>;

/// Frames inspected before giving up on finding the probe.
const MAX_FRAMES: usize = 16;

/// Placeholder returned when no frame resolves to a readable symbol.
const UNRESOLVED: &str = "<unresolved>";

fn probe_value(mode: BuildMode) -> Option<u32> {
    if mode.is_development() { Some(42) } else { None }
}

/// Resolves its own frame and returns the demangled symbol, if any.
///
/// Yields `Err(())` when the platform cannot walk the stack at all.
#[inline(never)]
fn test_minification() -> Result<Option<String>, ()> {
    let mut walked = 0usize;
    let mut found = None;

    backtrace::trace(|frame| {
        walked += 1;
        backtrace::resolve_frame(frame, |symbol| {
            if found.is_some() {
                return;
            }
            if let Some(name) = symbol.name() {
                let name = format!("{name:#}");
                // Generic frames such as `trace::<..test_minification::{closure}>` don't count.
                if name.ends_with(MINIFICATION_PROBE_ID) {
                    found = Some(name);
                }
            }
        });
        found.is_none() && walked < MAX_FRAMES
    });

    if walked == 0 { Err(()) } else { Ok(found) }
}

fn recover_probe_name() -> Cow<'static, str> {
    match test_minification() {
        Ok(Some(name)) => Cow::Owned(name),
        Ok(None) => Cow::Borrowed(UNRESOLVED),
        // Nothing observable; do not report a mismatch we cannot see.
        Err(()) => Cow::Borrowed(MINIFICATION_PROBE_ID),
    }
}

/// Diagnostic probe passed to the inspector and checked before registering.
#[derive(Clone)]
pub struct MinificationProbe {
    recover: Recovery,
    mode: BuildMode,
}

impl MinificationProbe {
    /// Probe that recovers its name from the symbols of the running binary.
    pub fn new() -> Self {
        Self {
            recover: Arc::new(recover_probe_name),
            mode: BuildMode::default(),
        }
    }

    /// Probe with a custom name recovery function.
    pub fn with_recovery<F>(recover: F) -> Self
    where
        F: Fn() -> Cow<'static, str> + Send + Sync + 'static,
    {
        Self {
            recover: Arc::new(recover),
            mode: BuildMode::default(),
        }
    }

    pub(crate) fn for_build(mut self, mode: BuildMode) -> Self {
        self.mode = mode;
        self
    }

    /// The literal identifier this probe is checked against.
    #[inline]
    pub fn identifier(&self) -> &'static str {
        MINIFICATION_PROBE_ID
    }

    /// The name the build preserved for the probe.
    pub fn recovered_name(&self) -> Cow<'static, str> {
        (self.recover)()
    }

    /// True when the identifier is recoverable from the probe.
    pub fn is_intact(&self) -> bool {
        self.recovered_name().contains(MINIFICATION_PROBE_ID)
    }

    /// Calls the probe. Returns `Some(42)` in development builds.
    pub fn run(&self) -> Option<u32> {
        probe_value(self.mode)
    }
}

impl Default for MinificationProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MinificationProbe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MinificationProbe")
            .field("recovered", &self.recovered_name())
            .field("mode", &self.mode)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_probe_recovers_identifier() {
        let probe = MinificationProbe::new();
        assert!(probe.is_intact(), "recovered {:?}", probe.recovered_name());
        assert_eq!(probe.identifier(), "test_minification");
    }

    #[test]
    fn test_default_recovery_resolves_its_own_frame() {
        let recovered = recover_probe_name();
        assert!(
            recovered.ends_with("probe::test_minification"),
            "recovered {recovered:?}"
        );
    }

    #[test]
    fn test_stack_walk_finds_the_marker_symbol() {
        let found = test_minification().expect("stack walk supported");
        let name = found.expect("probe symbol resolved");
        assert!(name.starts_with("inspector_hook::"), "resolved {name:?}");
        assert_ne!(name, UNRESOLVED);
    }

    #[test]
    fn test_custom_recovery_detects_stripped_name() {
        let probe = MinificationProbe::with_recovery(|| Cow::Borrowed("f"));
        assert!(!probe.is_intact());
    }

    #[test]
    fn test_run_follows_build_mode() {
        let dev = MinificationProbe::new().for_build(BuildMode::Development);
        let prod = MinificationProbe::new().for_build(BuildMode::Production);
        assert_eq!(dev.run(), Some(42));
        assert_eq!(prod.run(), None);
    }
}
