//! The tokenize-and-wrap transform: text in, one JSON array of records out.
//!
//! The transform is all-at-once: nothing is written until the entire input
//! has been consumed and tokenized, so a failure never leaves a
//! half-rendered document behind.

use crate::error::ConvertError;
use crate::pair::Pair;
use crate::tokenize::tokenize;

/// Wraps every token of `input` into a `Pair` with an empty value.
///
/// Order is strict input order: all tokens of line 1 before all tokens of
/// line 2, left to right within a line. Duplicates are preserved.
pub fn wrap_tokens(input: &str) -> Vec<Pair> {
    tokenize(input).map(Pair::from_token).collect()
}

/// Renders a pair batch as a single compact JSON array.
pub fn render_document(pairs: &[Pair]) -> Result<String, ConvertError> {
    serde_json::to_string(pairs).map_err(ConvertError::Serialize)
}

/// The full transform: tokenize, wrap, render. Empty or whitespace-only
/// input yields `[]`.
pub fn convert_document(input: &str) -> Result<String, ConvertError> {
    let pairs = wrap_tokens(input);
    tracing::debug!(tokens = pairs.len(), "wrapped input tokens");
    render_document(&pairs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_input_renders_empty_array() {
        assert_eq!(convert_document("").unwrap(), "[]");
    }

    #[test]
    fn test_whitespace_only_input_renders_empty_array() {
        assert_eq!(convert_document("  \n\t \n").unwrap(), "[]");
    }

    #[test]
    fn test_two_tokens_on_one_line() {
        assert_eq!(
            convert_document("hello world\n").unwrap(),
            r#"[{"K":"hello","V":""},{"K":"world","V":""}]"#
        );
    }

    #[test]
    fn test_collapsed_delimiters_across_lines() {
        assert_eq!(
            convert_document("  a   b\nc\n").unwrap(),
            r#"[{"K":"a","V":""},{"K":"b","V":""},{"K":"c","V":""}]"#
        );
    }

    #[test]
    fn test_blank_line_contributes_nothing() {
        assert_eq!(
            convert_document("one\n\ntwo\n").unwrap(),
            r#"[{"K":"one","V":""},{"K":"two","V":""}]"#
        );
    }

    #[test]
    fn test_wrap_tokens_values_always_empty() {
        for pair in wrap_tokens("some words\nwith  spacing\n") {
            assert_eq!(pair.value, "");
        }
    }

    #[test]
    fn test_structural_idempotence() {
        let input = "same input\ntwice over\n";
        assert_eq!(
            convert_document(input).unwrap(),
            convert_document(input).unwrap()
        );
    }
}
