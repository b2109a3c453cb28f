//! # One-time renderer registration.
//!
//! ## Rules
//! - Without a detected inspector, registration is a silent no-op.
//! - The first call wins; later calls emit `DoubleRegistration` and keep the stored id.
//! - In development builds the minification probe is checked before `register`
//!   is called; a failed check emits `PossibleMinifiedBuild` and registration
//!   proceeds anyway. Production builds skip the check.
//! - Diagnostics are delivered after the registration lock is released.
//! - A failure of `Inspector::register` is returned to the caller. Registration
//!   runs at setup time, outside the commit phase.
//!
//! ## Flow
//! ```text
//! register_renderer(..)
//!   ├─► no inspector ─────────────► Ok(())
//!   ├─► lock registration
//!   ├─► id already set ───────────► DoubleRegistration, Ok(())
//!   ├─► dev && !probe.is_intact() ► PossibleMinifiedBuild
//!   ├─► Inspector::register(descriptor)
//!   │       ├─ Ok(id)  ──► store id, Ok(())
//!   │       └─ Err(e)  ──► Err(RegistrationFailed)
//!   └─► unlock, deliver collected diagnostics
//! ```

use std::sync::{Arc, PoisonError};

use crate::diagnostics::Diagnostic;
use crate::error::HookError;
use crate::inspector::{
    BundleType, FindFiberByHostInstance, FindHostInstanceByFiber, Inspector, Renderer,
    RendererDescriptor,
};

use super::Bridge;

impl<R: Renderer> Bridge<R> {
    /// Registers renderer metadata with the inspector.
    ///
    /// Safe to call with or without an inspector. Only a failing
    /// `Inspector::register` produces an error.
    pub fn register_renderer<F, H>(
        &self,
        find_fiber_by_host_instance: F,
        find_host_instance_by_fiber: H,
        bundle_type: BundleType,
        version: impl Into<Arc<str>>,
    ) -> Result<(), HookError>
    where
        F: Fn(&R::HostNode) -> Option<R::Instance> + Send + Sync + 'static,
        H: Fn(&R::Instance) -> Option<R::HostNode> + Send + Sync + 'static,
    {
        let Some(inspector) = self.inspector.as_deref() else {
            return Ok(());
        };

        let mut pending = Vec::new();
        let outcome = self.register_locked(
            inspector,
            RendererDescriptorParts {
                find_fiber_by_host_instance: Arc::new(find_fiber_by_host_instance),
                find_host_instance_by_fiber: Arc::new(find_host_instance_by_fiber),
                bundle_type,
                version: version.into(),
            },
            &mut pending,
        );

        // Subscribers run after the lock is released so they may call back in.
        for diagnostic in pending {
            self.emit(diagnostic);
        }
        outcome
    }

    fn register_locked(
        &self,
        inspector: &dyn Inspector<R>,
        parts: RendererDescriptorParts<R>,
        pending: &mut Vec<Diagnostic>,
    ) -> Result<(), HookError> {
        let _guard = self
            .registering
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if self.renderer_id.get().is_some() {
            pending.push(Diagnostic::double_registration());
            return Ok(());
        }

        let probe = self.probe.clone().for_build(self.cfg.build_mode);
        if self.cfg.build_mode.is_development() && self.cfg.warn_on_minified && !probe.is_intact()
        {
            pending.push(Diagnostic::possible_minified_build());
        }

        let descriptor = RendererDescriptor::new(
            parts.find_fiber_by_host_instance,
            parts.find_host_instance_by_fiber,
            parts.bundle_type,
            parts.version,
            probe,
        );

        let id = inspector
            .register(descriptor)
            .map_err(|error| HookError::RegistrationFailed { error })?;

        // Unreachable `Err`: the slot is only written under `registering`.
        let _ = self.renderer_id.set(id);
        tracing::debug!(renderer_id = id.get(), "renderer registered with inspector");
        Ok(())
    }
}

/// Caller-supplied descriptor fields, before the probe is attached.
struct RendererDescriptorParts<R: Renderer> {
    find_fiber_by_host_instance: FindFiberByHostInstance<R>,
    find_host_instance_by_fiber: FindHostInstanceByFiber<R>,
    bundle_type: BundleType,
    version: Arc<str>,
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, OnceLock, Weak};

    use crate::core::mock::{MockInspector, Tree, bridge_with, register};
    use crate::{
        Bridge, BridgeState, Config, Diagnostic, DiagnosticKind, Inspector, MinificationProbe,
        Recorder, RendererId, Subscribe,
    };

    #[test]
    fn test_first_registration_stores_id() {
        let inspector = MockInspector::capable(7);
        let rec = Arc::new(Recorder::new());
        let bridge = bridge_with(&inspector, Config::development(), &rec);

        assert_eq!(bridge.state(), BridgeState::Detected);
        register(&bridge).expect("register");

        assert_eq!(inspector.registration_count(), 1);
        assert_eq!(bridge.renderer_id(), Some(RendererId::new(7)));
        assert_eq!(bridge.state(), BridgeState::Registered);
        assert!(rec.is_empty());
    }

    #[test]
    fn test_second_registration_is_rejected_with_one_warning() {
        let inspector = MockInspector::capable(7);
        let rec = Arc::new(Recorder::new());
        let bridge = bridge_with(&inspector, Config::development(), &rec);

        register(&bridge).expect("first");
        inspector.set_next_id(99);
        register(&bridge).expect("second");

        assert_eq!(inspector.registration_count(), 1);
        assert_eq!(bridge.renderer_id(), Some(RendererId::new(7)));
        assert_eq!(rec.count(DiagnosticKind::DoubleRegistration), 1);
        assert_eq!(rec.len(), 1);
    }

    #[test]
    fn test_double_registration_is_reported_in_production() {
        let inspector = MockInspector::capable(1);
        let rec = Arc::new(Recorder::new());
        let bridge = bridge_with(&inspector, Config::production(), &rec);

        register(&bridge).expect("first");
        register(&bridge).expect("second");

        assert_eq!(rec.count(DiagnosticKind::DoubleRegistration), 1);
    }

    #[test]
    fn test_descriptor_carries_metadata() {
        let inspector = MockInspector::capable(3);
        let rec = Arc::new(Recorder::new());
        let bridge = bridge_with(&inspector, Config::development(), &rec);

        register(&bridge).expect("register");

        let d = inspector.last_descriptor().expect("descriptor");
        assert_eq!(d.version(), "16.0.0-test");
        assert_eq!(d.bundle_type(), crate::BundleType::Development);
        assert_eq!(d.find_host_instance_by_fiber(&5), Some("node-5".to_string()));
        assert_eq!(d.find_fiber_by_host_instance(&"node-12".to_string()), Some(12));
        assert_eq!(d.test_minification().run(), Some(42));
    }

    #[test]
    fn test_intact_probe_emits_nothing() {
        let inspector = MockInspector::capable(3);
        let rec = Arc::new(Recorder::new());
        let bridge = bridge_with(&inspector, Config::development(), &rec);

        register(&bridge).expect("register");
        assert_eq!(rec.count(DiagnosticKind::PossibleMinifiedBuild), 0);
    }

    #[test]
    fn test_stripped_probe_warns_once_and_still_registers() {
        let inspector = MockInspector::capable(3);
        let rec = Arc::new(Recorder::new());
        let bridge = crate::Bridge::<Tree>::builder(Config::development())
            .with_inspector(Some(inspector.clone() as Arc<dyn Inspector<Tree>>))
            .with_subscribers(vec![rec.clone() as Arc<dyn Subscribe>])
            .with_probe(MinificationProbe::with_recovery(|| Cow::Borrowed("a")))
            .build();

        register(&bridge).expect("register");

        assert_eq!(rec.count(DiagnosticKind::PossibleMinifiedBuild), 1);
        assert_eq!(inspector.registration_count(), 1);
        assert_eq!(bridge.state(), BridgeState::Registered);
    }

    #[test]
    fn test_minified_warning_can_be_disabled() {
        let inspector = MockInspector::capable(3);
        let rec = Arc::new(Recorder::new());
        let cfg = Config {
            warn_on_minified: false,
            ..Config::development()
        };
        let bridge = crate::Bridge::<Tree>::builder(cfg)
            .with_inspector(Some(inspector.clone() as Arc<dyn Inspector<Tree>>))
            .with_subscribers(vec![rec.clone() as Arc<dyn Subscribe>])
            .with_probe(MinificationProbe::with_recovery(|| Cow::Borrowed("a")))
            .build();

        register(&bridge).expect("register");
        assert!(rec.is_empty());
    }

    #[test]
    fn test_register_failure_is_returned_and_leaves_slot_empty() {
        let inspector = MockInspector::capable(3);
        inspector.fail_register();
        let rec = Arc::new(Recorder::new());
        let bridge = bridge_with(&inspector, Config::development(), &rec);

        let err = register(&bridge).expect_err("register should fail");

        assert_eq!(err.as_label(), "registration_failed");
        assert_eq!(bridge.renderer_id(), None);
        assert_eq!(bridge.state(), BridgeState::Detected);
    }

    #[test]
    fn test_concurrent_registration_calls_register_once() {
        let inspector = MockInspector::capable(11);
        let rec = Arc::new(Recorder::new());
        let bridge = bridge_with(&inspector, Config::development(), &rec);

        std::thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|| register(&bridge).expect("register"));
            }
        });

        assert_eq!(inspector.registration_count(), 1);
        assert_eq!(rec.count(DiagnosticKind::DoubleRegistration), 7);
        assert_eq!(bridge.renderer_id(), Some(RendererId::new(11)));
    }

    #[test]
    fn test_stripped_symbols_are_not_reported_in_production() {
        let inspector = MockInspector::capable(3);
        let rec = Arc::new(Recorder::new());
        let bridge = crate::Bridge::<Tree>::builder(Config::production())
            .with_inspector(Some(inspector.clone() as Arc<dyn Inspector<Tree>>))
            .with_subscribers(vec![rec.clone() as Arc<dyn Subscribe>])
            .with_probe(MinificationProbe::with_recovery(|| Cow::Borrowed("a")))
            .build();

        register(&bridge).expect("register");

        assert_eq!(rec.count(DiagnosticKind::PossibleMinifiedBuild), 0);
        assert_eq!(inspector.registration_count(), 1);
        assert_eq!(bridge.state(), BridgeState::Registered);
    }

    /// Subscriber that calls back into the bridge on its first diagnostic.
    struct Reentrant {
        bridge: OnceLock<Weak<Bridge<Tree>>>,
        calls: AtomicUsize,
    }

    impl Subscribe for Reentrant {
        fn on_diagnostic(&self, _d: &Diagnostic) {
            if self.calls.fetch_add(1, Ordering::SeqCst) > 0 {
                return;
            }
            if let Some(bridge) = self.bridge.get().and_then(Weak::upgrade) {
                register(&bridge).expect("nested register");
            }
        }

        fn name(&self) -> &'static str {
            "reentrant"
        }
    }

    fn reentrant_bridge(
        inspector: &Arc<MockInspector>,
        probe: MinificationProbe,
    ) -> (Arc<Bridge<Tree>>, Arc<Recorder>) {
        let rec = Arc::new(Recorder::new());
        let nested = Arc::new(Reentrant {
            bridge: OnceLock::new(),
            calls: AtomicUsize::new(0),
        });
        let bridge = Arc::new(
            Bridge::<Tree>::builder(Config::development())
                .with_inspector(Some(inspector.clone() as Arc<dyn Inspector<Tree>>))
                .with_subscribers(vec![
                    nested.clone() as Arc<dyn Subscribe>,
                    rec.clone() as Arc<dyn Subscribe>,
                ])
                .with_probe(probe)
                .build(),
        );
        let _ = nested.bridge.set(Arc::downgrade(&bridge));
        (bridge, rec)
    }

    #[test]
    fn test_subscriber_may_register_again_from_double_registration_warning() {
        let inspector = MockInspector::capable(4);
        let (bridge, rec) = reentrant_bridge(&inspector, MinificationProbe::default());

        register(&bridge).expect("first");
        register(&bridge).expect("second");

        assert_eq!(inspector.registration_count(), 1);
        assert_eq!(rec.count(DiagnosticKind::DoubleRegistration), 2);
    }

    #[test]
    fn test_subscriber_may_register_again_from_minified_warning() {
        let inspector = MockInspector::capable(4);
        let stripped = MinificationProbe::with_recovery(|| Cow::Borrowed("a"));
        let (bridge, rec) = reentrant_bridge(&inspector, stripped);

        register(&bridge).expect("register");

        assert_eq!(inspector.registration_count(), 1);
        assert_eq!(rec.count(DiagnosticKind::PossibleMinifiedBuild), 1);
        assert_eq!(rec.count(DiagnosticKind::DoubleRegistration), 1);
        assert_eq!(bridge.renderer_id(), Some(RendererId::new(4)));
    }
}
