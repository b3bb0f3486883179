use kvsplit_core::convert;
use kvsplit_core::error::CliError;

use crate::utils::IoTarget;

/// The tokenize-and-wrap operation: read everything, emit one JSON array.
///
/// Output begins only after the whole input has been consumed and
/// tokenized; a read or decode failure therefore produces no output at all.
pub async fn run(io: &IoTarget) -> Result<i32, CliError> {
    let input = io.read_input().await?;
    let document = convert::convert_document(&input)?;
    io.write_output(document.as_bytes()).await?;
    tracing::info!(bytes = document.len(), "document written");
    Ok(0)
}
