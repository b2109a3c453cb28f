//! Scriptable inspector shared by the core tests.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use crate::error::{HookError, InspectorError};
use crate::inspector::{BundleType, Inspector, Renderer, RendererDescriptor, RendererId};
use crate::subscribers::{Recorder, Subscribe};
use crate::{Bridge, Config};

/// Renderer with integer instances and string host nodes.
pub(crate) struct Tree;

impl Renderer for Tree {
    type Instance = u32;
    type HostNode = String;
    type Root = Vec<u32>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Fault {
    Error,
    Panic,
}

pub(crate) struct MockInspector {
    capable: bool,
    next_id: AtomicU64,
    fail_register: AtomicBool,
    fault: Mutex<Option<Fault>>,
    registrations: Mutex<Vec<RendererDescriptor<Tree>>>,
    commits: Mutex<Vec<(RendererId, Vec<u32>)>>,
    unmounts: Mutex<Vec<(RendererId, u32)>>,
}

impl MockInspector {
    fn with_capability(capable: bool, id: u64) -> Arc<Self> {
        Arc::new(Self {
            capable,
            next_id: AtomicU64::new(id),
            fail_register: AtomicBool::new(false),
            fault: Mutex::new(None),
            registrations: Mutex::new(Vec::new()),
            commits: Mutex::new(Vec::new()),
            unmounts: Mutex::new(Vec::new()),
        })
    }

    pub(crate) fn capable(id: u64) -> Arc<Self> {
        Self::with_capability(true, id)
    }

    pub(crate) fn incapable() -> Arc<Self> {
        Self::with_capability(false, 0)
    }

    pub(crate) fn set_next_id(&self, id: u64) {
        self.next_id.store(id, Ordering::SeqCst);
    }

    pub(crate) fn fail_register(&self) {
        self.fail_register.store(true, Ordering::SeqCst);
    }

    pub(crate) fn set_fault(&self, fault: Option<Fault>) {
        *self.fault.lock().unwrap() = fault;
    }

    pub(crate) fn registration_count(&self) -> usize {
        self.registrations.lock().unwrap().len()
    }

    pub(crate) fn last_descriptor(&self) -> Option<RendererDescriptor<Tree>> {
        self.registrations.lock().unwrap().last().cloned()
    }

    pub(crate) fn commits(&self) -> Vec<(RendererId, Vec<u32>)> {
        self.commits.lock().unwrap().clone()
    }

    pub(crate) fn unmounts(&self) -> Vec<(RendererId, u32)> {
        self.unmounts.lock().unwrap().clone()
    }

    fn scripted_fault(&self, hook: &str) -> Result<(), InspectorError> {
        let fault = *self.fault.lock().unwrap();
        match fault {
            None => Ok(()),
            Some(Fault::Error) => Err(InspectorError::failed(format!("{hook} rejected"))),
            Some(Fault::Panic) => panic!("{hook} exploded"),
        }
    }
}

impl Inspector<Tree> for MockInspector {
    fn supports_fiber(&self) -> bool {
        self.capable
    }

    fn register(&self, descriptor: RendererDescriptor<Tree>) -> Result<RendererId, InspectorError> {
        if self.fail_register.load(Ordering::SeqCst) {
            return Err(InspectorError::failed("register rejected"));
        }
        self.registrations.lock().unwrap().push(descriptor);
        Ok(RendererId::new(self.next_id.load(Ordering::SeqCst)))
    }

    fn on_commit_root(&self, id: RendererId, root: &Vec<u32>) -> Result<(), InspectorError> {
        self.commits.lock().unwrap().push((id, root.clone()));
        self.scripted_fault("on_commit_root")
    }

    fn on_commit_unmount(&self, id: RendererId, node: &u32) -> Result<(), InspectorError> {
        self.unmounts.lock().unwrap().push((id, *node));
        self.scripted_fault("on_commit_unmount")
    }
}

pub(crate) fn bridge_with(
    inspector: &Arc<MockInspector>,
    cfg: Config,
    rec: &Arc<Recorder>,
) -> Bridge<Tree> {
    let handle: Arc<dyn Inspector<Tree>> = inspector.clone();
    let sub: Arc<dyn Subscribe> = rec.clone();
    Bridge::builder(cfg)
        .with_inspector(Some(handle))
        .with_subscribers(vec![sub])
        .build()
}

pub(crate) fn register(bridge: &Bridge<Tree>) -> Result<(), HookError> {
    bridge.register_renderer(
        |node: &String| node.strip_prefix("node-").and_then(|n| n.parse().ok()),
        |id: &u32| Some(format!("node-{id}")),
        BundleType::Development,
        "16.0.0-test",
    )
}
