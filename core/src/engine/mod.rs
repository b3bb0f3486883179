//! The local map/reduce engine.
//!
//! A run maps a batch of input pairs, groups the emitted values by key, and
//! fans the key groups out over concurrent reducer batches. Everything is
//! in-process; stages exchange plain `Pair` batches.

pub mod wordcount;

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;

use crate::error::EngineError;
use crate::events::{generate_run_id, PipelineRenderer, RenderEvent};
use crate::pair::{KeyGroups, Pair};

#[async_trait]
pub trait Mapper: Send + Sync {
    /// Maps one input pair to zero or more output pairs.
    async fn map(&self, pair: Pair) -> anyhow::Result<Vec<Pair>>;
}

#[async_trait]
pub trait Reducer: Send + Sync {
    /// Folds all values observed under `key` into output pairs.
    async fn reduce(&self, key: &str, values: Vec<String>) -> anyhow::Result<Vec<Pair>>;
}

/// Maps a whole input batch and groups the outputs' values by key.
pub async fn run_map_batch(
    mapper: &dyn Mapper,
    pairs: Vec<Pair>,
) -> Result<KeyGroups, EngineError> {
    tracing::debug!(pairs = pairs.len(), "mapping input pairs");

    let mut groups = KeyGroups::new();
    for pair in pairs {
        let outputs = mapper.map(pair).await.map_err(EngineError::Mapper)?;
        groups.extend(outputs);
    }

    tracing::debug!(keys = groups.len(), "mapper output grouped by key");
    Ok(groups)
}

/// Reduces one batch of key groups, concatenating the outputs in key order.
pub async fn run_reduce_batch(
    reducer: &dyn Reducer,
    batch: Vec<(String, Vec<String>)>,
) -> Result<Vec<Pair>, EngineError> {
    let mut out = Vec::new();
    for (key, values) in batch {
        let pairs = reducer
            .reduce(&key, values)
            .await
            .map_err(EngineError::Reducer)?;
        out.extend(pairs);
    }
    Ok(out)
}

/// Partitions `keys` into at most `n` contiguous batches. Batches that
/// would come out empty are dropped, so scarce keys mean fewer batches.
pub fn split_keys(keys: Vec<String>, n: usize) -> Vec<Vec<String>> {
    if keys.is_empty() || n == 0 {
        return Vec::new();
    }
    let chunk = keys.len().div_ceil(n);
    keys.chunks(chunk).map(|c| c.to_vec()).collect()
}

/// A full run: map, group, reduce across `n_reducers` concurrent batches.
///
/// Output pairs come back in batch order (and key order within a batch), so
/// a run is deterministic for a given input.
pub async fn run_pipeline(
    mapper: Arc<dyn Mapper>,
    reducer: Arc<dyn Reducer>,
    inputs: Vec<Pair>,
    n_reducers: usize,
    renderer: &dyn PipelineRenderer,
) -> Result<Vec<Pair>, EngineError> {
    let run_id = generate_run_id();
    let started = Instant::now();
    renderer.render(&RenderEvent::RunStart {
        run_id: run_id.clone(),
        input_pairs: inputs.len(),
    });

    let grouped = run_map_batch(mapper.as_ref(), inputs).await?;
    renderer.render(&RenderEvent::MapDone {
        run_id: run_id.clone(),
        keys: grouped.len(),
    });

    let keys = grouped.keys();
    let mut by_key: HashMap<String, Vec<String>> = grouped.into_groups().into_iter().collect();
    let keysets = split_keys(keys, n_reducers.max(1));
    let n_batches = keysets.len();

    let mut tasks = tokio::task::JoinSet::new();
    for (batch_id, keyset) in keysets.into_iter().enumerate() {
        let batch: Vec<(String, Vec<String>)> = keyset
            .into_iter()
            .map(|key| {
                let values = by_key.remove(&key).unwrap_or_default();
                (key, values)
            })
            .collect();
        let reducer = reducer.clone();
        tasks.spawn(async move {
            let pairs = run_reduce_batch(reducer.as_ref(), batch).await?;
            Ok::<_, EngineError>((batch_id, pairs))
        });
    }

    let mut outputs: Vec<Option<Vec<Pair>>> = (0..n_batches).map(|_| None).collect();
    while let Some(joined) = tasks.join_next().await {
        let (batch_id, pairs) = joined??;
        renderer.render(&RenderEvent::ReduceBatchDone {
            run_id: run_id.clone(),
            batch_id,
            pairs: pairs.len(),
        });
        outputs[batch_id] = Some(pairs);
    }

    let result: Vec<Pair> = outputs.into_iter().flatten().flatten().collect();
    renderer.render(&RenderEvent::RunEnd {
        run_id,
        output_pairs: result.len(),
        duration_ms: started.elapsed().as_millis() as u64,
    });
    Ok(result)
}
