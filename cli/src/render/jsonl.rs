use chrono::Local;
use serde::Serialize;

use kvsplit_core::events::{PipelineRenderer, RenderEvent};

/// Machine-readable progress events, one JSON object per stderr line.
pub struct JsonlRenderer;

#[derive(Debug, Clone, Serialize)]
struct JsonlEvent {
    v: i32,
    #[serde(rename = "type")]
    event_type: String,
    ts: String,
    run_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    input_pairs: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    keys: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    batch_id: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pairs: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    duration_ms: Option<u64>,
}

impl JsonlEvent {
    fn base(event_type: &str, run_id: &str) -> Self {
        Self {
            v: 1,
            event_type: event_type.to_string(),
            ts: Local::now().to_rfc3339(),
            run_id: run_id.to_string(),
            input_pairs: None,
            keys: None,
            batch_id: None,
            pairs: None,
            duration_ms: None,
        }
    }
}

fn event_to_jsonl(event: &RenderEvent) -> JsonlEvent {
    match event {
        RenderEvent::RunStart {
            run_id,
            input_pairs,
        } => {
            let mut ev = JsonlEvent::base("run.start", run_id);
            ev.input_pairs = Some(*input_pairs);
            ev
        }
        RenderEvent::MapDone { run_id, keys } => {
            let mut ev = JsonlEvent::base("map.done", run_id);
            ev.keys = Some(*keys);
            ev
        }
        RenderEvent::ReduceBatchDone {
            run_id,
            batch_id,
            pairs,
        } => {
            let mut ev = JsonlEvent::base("reduce.batch_done", run_id);
            ev.batch_id = Some(*batch_id);
            ev.pairs = Some(*pairs);
            ev
        }
        RenderEvent::RunEnd {
            run_id,
            output_pairs,
            duration_ms,
        } => {
            let mut ev = JsonlEvent::base("run.end", run_id);
            ev.pairs = Some(*output_pairs);
            ev.duration_ms = Some(*duration_ms);
            ev
        }
    }
}

impl PipelineRenderer for JsonlRenderer {
    fn render(&self, event: &RenderEvent) {
        match serde_json::to_string(&event_to_jsonl(event)) {
            Ok(line) => eprintln!("{line}"),
            Err(e) => tracing::warn!("failed to serialize progress event: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_start_shape() {
        let ev = event_to_jsonl(&RenderEvent::RunStart {
            run_id: "run-x".to_string(),
            input_pairs: 7,
        });
        let json: serde_json::Value = serde_json::from_str(&serde_json::to_string(&ev).unwrap()).unwrap();
        assert_eq!(json["v"], 1);
        assert_eq!(json["type"], "run.start");
        assert_eq!(json["run_id"], "run-x");
        assert_eq!(json["input_pairs"], 7);
        assert!(json.get("batch_id").is_none());
    }

    #[test]
    fn test_run_end_shape() {
        let ev = event_to_jsonl(&RenderEvent::RunEnd {
            run_id: "run-y".to_string(),
            output_pairs: 3,
            duration_ms: 12,
        });
        let json: serde_json::Value = serde_json::from_str(&serde_json::to_string(&ev).unwrap()).unwrap();
        assert_eq!(json["type"], "run.end");
        assert_eq!(json["pairs"], 3);
        assert_eq!(json["duration_ms"], 12);
    }
}
