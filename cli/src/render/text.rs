use kvsplit_core::events::{PipelineRenderer, RenderEvent};

/// Human-oriented progress lines on stderr.
pub struct TextRenderer;

impl PipelineRenderer for TextRenderer {
    fn render(&self, event: &RenderEvent) {
        match event {
            RenderEvent::RunStart {
                run_id,
                input_pairs,
            } => {
                eprintln!("[{run_id}] mapping {input_pairs} input pairs");
            }
            RenderEvent::MapDone { run_id, keys } => {
                eprintln!("[{run_id}] map done, {keys} distinct keys");
            }
            RenderEvent::ReduceBatchDone {
                run_id,
                batch_id,
                pairs,
            } => {
                eprintln!("[{run_id}] reduce batch {batch_id} done, {pairs} pairs");
            }
            RenderEvent::RunEnd {
                run_id,
                output_pairs,
                duration_ms,
            } => {
                eprintln!("[{run_id}] run complete, {output_pairs} pairs in {duration_ms}ms");
            }
        }
    }
}
