use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single key/value record.
///
/// Serializes to `{"K": ..., "V": ...}`, the shape every stage of the
/// pipeline exchanges: the converter emits them with empty values, mappers
/// emit them per extracted key, reducers emit them with the final value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pair {
    #[serde(rename = "K")]
    pub key: String,

    #[serde(rename = "V")]
    pub value: String,
}

impl Pair {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Wraps a token into a record. The value slot stays empty; a downstream
    /// consumer assigns it.
    pub fn from_token(token: impl Into<String>) -> Self {
        Self {
            key: token.into(),
            value: String::new(),
        }
    }
}

/// Mapper output grouped by key.
///
/// Keys keep first-seen order so a full pipeline run is deterministic.
#[derive(Debug, Clone, Default)]
pub struct KeyGroups {
    index: HashMap<String, usize>,
    groups: Vec<(String, Vec<String>)>,
}

impl KeyGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Files the pair's value under its key.
    pub fn push(&mut self, pair: Pair) {
        match self.index.get(&pair.key) {
            Some(&slot) => self.groups[slot].1.push(pair.value),
            None => {
                self.index.insert(pair.key.clone(), self.groups.len());
                self.groups.push((pair.key, vec![pair.value]));
            }
        }
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Distinct keys in first-seen order.
    pub fn keys(&self) -> Vec<String> {
        self.groups.iter().map(|(key, _)| key.clone()).collect()
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.index
            .get(key)
            .map(|&slot| self.groups[slot].1.as_slice())
    }

    pub fn into_groups(self) -> Vec<(String, Vec<String>)> {
        self.groups
    }
}

impl Extend<Pair> for KeyGroups {
    fn extend<T: IntoIterator<Item = Pair>>(&mut self, iter: T) {
        for pair in iter {
            self.push(pair);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_serializes_with_short_field_names() {
        let pair = Pair::from_token("hello");
        let json = serde_json::to_string(&pair).unwrap();
        assert_eq!(json, r#"{"K":"hello","V":""}"#);
    }

    #[test]
    fn test_pair_round_trips() {
        let json = r#"{"K":"word","V":"3"}"#;
        let pair: Pair = serde_json::from_str(json).unwrap();
        assert_eq!(pair, Pair::new("word", "3"));
        assert_eq!(serde_json::to_string(&pair).unwrap(), json);
    }

    #[test]
    fn test_key_groups_preserve_first_seen_order() {
        let mut groups = KeyGroups::new();
        groups.extend([
            Pair::new("b", "1"),
            Pair::new("a", "2"),
            Pair::new("b", "3"),
            Pair::new("c", "4"),
        ]);

        assert_eq!(groups.keys(), vec!["b", "a", "c"]);
        assert_eq!(
            groups.get("b"),
            Some(&["1".to_string(), "3".to_string()][..])
        );
        assert_eq!(groups.get("missing"), None);
    }

    #[test]
    fn test_key_groups_into_groups() {
        let mut groups = KeyGroups::new();
        groups.push(Pair::from_token("x"));
        groups.push(Pair::from_token("x"));

        let inner = groups.into_groups();
        assert_eq!(inner.len(), 1);
        assert_eq!(inner[0].0, "x");
        assert_eq!(inner[0].1.len(), 2);
    }
}
