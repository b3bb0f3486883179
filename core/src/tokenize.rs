//! Whitespace tokenization.
//!
//! A token is a maximal run of non-whitespace characters. Runs of
//! delimiters collapse, so leading/trailing whitespace and blank lines never
//! produce empty tokens.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NON_ALNUM: Regex = Regex::new(r"[^a-zA-Z0-9\s]+").unwrap();
}

/// Splits input into tokens, line by line, left to right.
pub fn tokenize(input: &str) -> impl Iterator<Item = &str> {
    input.lines().flat_map(|line| line.split_whitespace())
}

pub fn token_count(input: &str) -> usize {
    tokenize(input).count()
}

/// Normalizes text for word counting: every run of characters outside
/// `[a-zA-Z0-9\s]` becomes a single space, then everything is lowercased.
pub fn sanitize(text: &str) -> String {
    NON_ALNUM.replace_all(text, " ").to_lowercase()
}
