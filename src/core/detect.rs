//! # Capability detection.
//!
//! Decides once, at construction, whether the injected inspector is usable.
//! A missing handle, a handle without the capability flag and a handle whose
//! flag check panics all yield `None`.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use crate::Inspector;
use crate::error::panic_info;
use crate::inspector::Renderer;

pub(super) fn detect<R: Renderer>(
    candidate: Option<Arc<dyn Inspector<R>>>,
) -> Option<Arc<dyn Inspector<R>>> {
    let inspector = candidate?;

    match panic::catch_unwind(AssertUnwindSafe(|| inspector.supports_fiber())) {
        Ok(true) => {
            tracing::debug!("inspector detected");
            Some(inspector)
        }
        Ok(false) => {
            tracing::debug!("inspector present without capability flag; bridge disabled");
            None
        }
        Err(payload) => {
            tracing::debug!(info = %panic_info(&*payload), "inspector capability check panicked; bridge disabled");
            None
        }
    }
}
