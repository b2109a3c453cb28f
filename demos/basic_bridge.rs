//! # Example: basic_bridge
//!
//! Wires a toy renderer to a flaky inspector and drives a few commits.
//!
//! Shows how to:
//! - Implement the [`Inspector`] trait for an external tool.
//! - Build a [`Bridge`] with the default [`LogWriter`] and a [`Recorder`].
//! - Observe that inspector faults never reach the renderer.
//!
//! ## Run
//! ```bash
//! RUST_LOG=debug cargo run --example basic_bridge
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use inspector_hook::{
    Bridge, BundleType, Config, Inspector, InspectorError, LogWriter, Recorder, Renderer,
    RendererDescriptor, RendererId, Subscribe,
};
use tracing_subscriber::EnvFilter;

/// Renderer whose instances are numeric ids and host nodes are labels.
struct Labels;

impl Renderer for Labels {
    type Instance = u32;
    type HostNode = String;
    type Root = Vec<u32>;
}

/// Inspector that rejects every third commit and panics on unmount of node 0.
#[derive(Default)]
struct FlakyInspector {
    commits: AtomicUsize,
}

impl Inspector<Labels> for FlakyInspector {
    fn register(&self, d: RendererDescriptor<Labels>) -> Result<RendererId, InspectorError> {
        println!(
            "[inspector] renderer v{} bundle={} probe_intact={}",
            d.version(),
            d.bundle_type().as_tag(),
            d.test_minification().is_intact()
        );
        Ok(RendererId::new(1))
    }

    fn on_commit_root(&self, id: RendererId, root: &Vec<u32>) -> Result<(), InspectorError> {
        let n = self.commits.fetch_add(1, Ordering::Relaxed) + 1;
        if n % 3 == 0 {
            return Err(InspectorError::failed(format!("commit #{n} lost")));
        }
        println!("[inspector] {id} committed {root:?}");
        Ok(())
    }

    fn on_commit_unmount(&self, id: RendererId, node: &u32) -> Result<(), InspectorError> {
        if *node == 0 {
            panic!("node 0 is sacred");
        }
        println!("[inspector] {id} unmounted {node}");
        Ok(())
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let recorder = Arc::new(Recorder::new());
    let subs: Vec<Arc<dyn Subscribe>> = vec![
        Arc::new(LogWriter::new()) as Arc<dyn Subscribe>,
        recorder.clone() as Arc<dyn Subscribe>,
    ];
    let inspector: Arc<dyn Inspector<Labels>> = Arc::new(FlakyInspector::default());

    let bridge = Bridge::<Labels>::builder(Config::development())
        .with_inspector(Some(inspector))
        .with_subscribers(subs)
        .build();

    let registered = bridge.register_renderer(
        |label: &String| label.strip_prefix('#').and_then(|n| n.parse().ok()),
        |id: &u32| Some(format!("#{id}")),
        BundleType::Development,
        env!("CARGO_PKG_VERSION"),
    );
    if let Err(e) = registered {
        eprintln!("registration failed: {e}");
        return;
    }
    // Misuse: reported, ignored.
    let _ = bridge.register_renderer(|_: &String| None, |_: &u32| None, BundleType::Development, "x");

    for root in [vec![1, 2], vec![3], vec![4, 5, 6], vec![7]] {
        bridge.notify_commit(&root);
    }
    for node in [2, 0, 5] {
        bridge.notify_unmount(&node);
    }

    println!("state={:?} diagnostics={}", bridge.state(), recorder.len());
}
