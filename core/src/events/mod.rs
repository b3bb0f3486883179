//! Pipeline progress events.
//!
//! The engine narrates a run through a [`PipelineRenderer`]; how (and
//! whether) the events reach the user is the caller's concern. Renderers
//! must never touch standard output, which is reserved for the document.

use chrono::Local;
use uuid::Uuid;

/// One observable step of a pipeline run.
#[derive(Debug, Clone)]
pub enum RenderEvent {
    RunStart {
        run_id: String,
        input_pairs: usize,
    },
    MapDone {
        run_id: String,
        keys: usize,
    },
    ReduceBatchDone {
        run_id: String,
        batch_id: usize,
        pairs: usize,
    },
    RunEnd {
        run_id: String,
        output_pairs: usize,
        duration_ms: u64,
    },
}

pub trait PipelineRenderer: Send + Sync {
    fn render(&self, event: &RenderEvent);
}

/// Swallows every event.
pub struct NullRenderer;

impl PipelineRenderer for NullRenderer {
    fn render(&self, _event: &RenderEvent) {}
}

/// Generates run ids shaped `run-{YYYYMMDDHHmmss}-{random8}`.
pub fn generate_run_id() -> String {
    let ts = Local::now().format("%Y%m%d%H%M%S");
    let uuid = Uuid::new_v4().simple().to_string();
    let suffix = &uuid[..8];
    format!("run-{}-{}", ts, suffix)
}
