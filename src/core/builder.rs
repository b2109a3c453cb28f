use std::sync::Arc;

use crate::{
    Inspector,
    core::{Bridge, Config},
    global,
    inspector::{MinificationProbe, Renderer},
    subscribers::{LogWriter, Subscribe, SubscriberSet},
};

use super::detect::detect;

/// Builder for constructing a [`Bridge`] with optional collaborators.
pub struct BridgeBuilder<R: Renderer> {
    cfg: Config,
    inspector: Option<Arc<dyn Inspector<R>>>,
    subscribers: Option<Vec<Arc<dyn Subscribe>>>,
    probe: MinificationProbe,
}

impl<R: Renderer> BridgeBuilder<R> {
    /// Creates a new builder with the given configuration.
    pub fn new(cfg: Config) -> Self {
        Self {
            cfg,
            inspector: None,
            subscribers: None,
            probe: MinificationProbe::default(),
        }
    }

    /// Supplies the (optional) inspector handle owned by the host environment.
    pub fn with_inspector(mut self, inspector: Option<Arc<dyn Inspector<R>>>) -> Self {
        self.inspector = inspector;
        self
    }

    /// Uses the inspector installed in the process-wide slot, if any.
    pub fn with_environment_inspector(mut self) -> Self {
        self.inspector = global::installed_inspector::<R>();
        self
    }

    /// Sets diagnostic subscribers.
    ///
    /// Without this call a single [`LogWriter`] is installed. An empty vector
    /// drops diagnostics entirely.
    pub fn with_subscribers(mut self, subscribers: Vec<Arc<dyn Subscribe>>) -> Self {
        self.subscribers = Some(subscribers);
        self
    }

    /// Replaces the minification probe (e.g. with a custom name recovery).
    pub fn with_probe(mut self, probe: MinificationProbe) -> Self {
        self.probe = probe;
        self
    }

    /// Builds the bridge, running capability detection exactly once.
    pub fn build(self) -> Bridge<R> {
        let subs = self
            .subscribers
            .unwrap_or_else(|| vec![Arc::new(LogWriter::new()) as Arc<dyn Subscribe>]);

        Bridge::from_parts(
            self.cfg,
            detect(self.inspector),
            self.probe,
            SubscriberSet::new(subs),
        )
    }
}
