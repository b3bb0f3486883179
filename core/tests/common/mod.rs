use kvsplit_core::pair::Pair;

/// Extracts the "K" projection of a pair batch.
pub fn keys_of(pairs: &[Pair]) -> Vec<String> {
    pairs.iter().map(|p| p.key.clone()).collect()
}

/// Parses a rendered document back into pairs.
pub fn parse_document(doc: &str) -> Vec<Pair> {
    serde_json::from_str(doc).expect("document should be a valid JSON array of pairs")
}

/// Collects counts from word-count output pairs as (word, count).
pub fn counts_of(pairs: &[Pair]) -> Vec<(String, usize)> {
    pairs
        .iter()
        .map(|p| {
            let n = p.value.parse().expect("count value should be an integer");
            (p.key.clone(), n)
        })
        .collect()
}
