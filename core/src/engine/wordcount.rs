//! Word-count stages: the canonical pipeline pairing.

use async_trait::async_trait;

use super::{Mapper, Reducer};
use crate::pair::Pair;
use crate::tokenize::sanitize;

/// Mapper half: normalize the key text and emit one empty-valued pair per
/// word. Reducer half: count how many values each word accumulated.
pub struct WordCount;

#[async_trait]
impl Mapper for WordCount {
    async fn map(&self, pair: Pair) -> anyhow::Result<Vec<Pair>> {
        let sanitized = sanitize(&pair.key);
        Ok(sanitized
            .split_whitespace()
            .filter(|word| !word.is_empty())
            .map(Pair::from_token)
            .collect())
    }
}

#[async_trait]
impl Reducer for WordCount {
    async fn reduce(&self, key: &str, values: Vec<String>) -> anyhow::Result<Vec<Pair>> {
        Ok(vec![Pair::new(key, values.len().to_string())])
    }
}
