//! Tab-separated wire format for pair and value batches.
//!
//! One `key\tvalue` line per pair, one line per value. This is the format
//! pair batches travel in between pipeline stages; the JSON document from
//! [`crate::convert`] is only the outermost surface.

use crate::pair::Pair;

pub fn marshal_pairs(pairs: &[Pair]) -> String {
    let mut out = String::new();
    for pair in pairs {
        out.push_str(&pair.key);
        out.push('\t');
        out.push_str(&pair.value);
        out.push('\n');
    }
    out
}

/// Parses `key\tvalue` lines. Empty lines are skipped. A line without a tab
/// is taken as a bare value with an empty key; cells past the second tab are
/// ignored.
pub fn unmarshal_pairs(data: &str) -> Vec<Pair> {
    data.lines()
        .filter(|line| !line.is_empty())
        .map(|line| {
            let mut cells = line.split('\t');
            match (cells.next(), cells.next()) {
                (Some(value), None) => Pair::new("", value),
                (Some(key), Some(value)) => Pair::new(key, value),
                (None, _) => Pair::new("", ""),
            }
        })
        .collect()
}

pub fn marshal_values(values: &[String]) -> String {
    let mut out = String::new();
    for value in values {
        out.push_str(value);
        out.push('\n');
    }
    out
}

pub fn unmarshal_values(data: &str) -> Vec<String> {
    data.lines()
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
