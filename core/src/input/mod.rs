//! Strict input loading: read everything first, then decode.
//!
//! Decoding is strict UTF-8. The read and the decode both complete before
//! any caller may begin writing output; a bad input produces an error and
//! no document at all.

use std::path::Path;

use tokio::io::AsyncReadExt;

use crate::error::ConvertError;

/// Reads standard input to end-of-stream and decodes it.
pub async fn read_stdin_to_string() -> Result<String, ConvertError> {
    let mut buf = Vec::new();
    tokio::io::stdin()
        .read_to_end(&mut buf)
        .await
        .map_err(ConvertError::Read)?;
    decode(buf)
}

/// Reads a whole file and decodes it.
pub async fn read_file_to_string(path: &Path) -> Result<String, ConvertError> {
    let buf = tokio::fs::read(path).await.map_err(ConvertError::Read)?;
    decode(buf)
}

fn decode(buf: Vec<u8>) -> Result<String, ConvertError> {
    let text = String::from_utf8(buf)?;
    tracing::debug!(bytes = text.len(), "input decoded");
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_file_to_string() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.txt");
        std::fs::write(&path, "hello world\n").unwrap();

        let text = read_file_to_string(&path).await.unwrap();
        assert_eq!(text, "hello world\n");
    }

    #[tokio::test]
    async fn test_read_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_file_to_string(&dir.path().join("nope")).await.unwrap_err();
        assert!(matches!(err, ConvertError::Read(_)));
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("binary.dat");
        std::fs::write(&path, [0x66, 0x6f, 0xff, 0xfe]).unwrap();

        let err = read_file_to_string(&path).await.unwrap_err();
        assert!(matches!(err, ConvertError::Decode(_)));
    }
}
