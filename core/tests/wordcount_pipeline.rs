mod common;

use std::sync::Arc;

use common::counts_of;
use kvsplit_core::convert::wrap_tokens;
use kvsplit_core::engine::wordcount::WordCount;
use kvsplit_core::engine::run_pipeline;
use kvsplit_core::events::NullRenderer;
use pretty_assertions::assert_eq;

async fn count_words(input: &str, reducers: usize) -> Vec<(String, usize)> {
    let stage = Arc::new(WordCount);
    let pairs = wrap_tokens(input);
    let out = run_pipeline(stage.clone(), stage, pairs, reducers, &NullRenderer)
        .await
        .expect("pipeline should succeed");
    counts_of(&out)
}

#[tokio::test]
async fn counts_simple_text() {
    let counts = count_words("the cat and the dog\n", 2).await;
    assert_eq!(
        counts,
        vec![
            ("the".to_string(), 2),
            ("cat".to_string(), 1),
            ("and".to_string(), 1),
            ("dog".to_string(), 1),
        ]
    );
}

#[tokio::test]
async fn normalizes_case_and_punctuation() {
    let counts = count_words("Stop! Stop. STOP?\n", 1).await;
    assert_eq!(counts, vec![("stop".to_string(), 3)]);
}

#[tokio::test]
async fn reducer_count_does_not_change_results() {
    let input = "a b c d e f g\nb c d e f g\nc d e f g\n";
    let baseline = count_words(input, 1).await;
    for reducers in [2, 3, 5, 100] {
        assert_eq!(count_words(input, reducers).await, baseline, "reducers = {}", reducers);
    }
}

#[tokio::test]
async fn empty_input_produces_no_counts() {
    assert!(count_words("", 5).await.is_empty());
    assert!(count_words("\n \t\n", 5).await.is_empty());
}

#[tokio::test]
async fn punctuation_only_tokens_vanish() {
    let counts = count_words("--- ... ###\nok\n", 3).await;
    assert_eq!(counts, vec![("ok".to_string(), 1)]);
}
