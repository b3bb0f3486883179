use std::path::PathBuf;

use tokio::io::AsyncWriteExt;

use kvsplit_core::error::ConvertError;
use kvsplit_core::input;

/// Where a command reads from and writes to. `None` means the standard
/// stream; a path is the file counterpart.
pub struct IoTarget {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

impl IoTarget {
    pub fn new(input: Option<PathBuf>, output: Option<PathBuf>) -> Self {
        Self { input, output }
    }

    /// Reads the whole input and decodes it. Blocks until end-of-stream.
    pub async fn read_input(&self) -> Result<String, ConvertError> {
        match &self.input {
            Some(path) => input::read_file_to_string(path).await,
            None => input::read_stdin_to_string().await,
        }
    }

    /// Writes the complete document in one shot.
    pub async fn write_output(&self, bytes: &[u8]) -> Result<(), ConvertError> {
        match &self.output {
            Some(path) => tokio::fs::write(path, bytes)
                .await
                .map_err(ConvertError::Write),
            None => {
                let mut out = tokio::io::stdout();
                out.write_all(bytes).await.map_err(ConvertError::Write)?;
                out.flush().await.map_err(ConvertError::Write)
            }
        }
    }
}
