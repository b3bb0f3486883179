use thiserror::Error;

/// Failures of the tokenize-and-wrap transform. All fatal; nothing retries.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("input read failed: {0}")]
    Read(#[source] std::io::Error),

    #[error("input is not valid UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),

    #[error("output write failed: {0}")]
    Write(#[source] std::io::Error),

    #[error("document serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Failures inside the map/reduce engine.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("mapper failed: {0}")]
    Mapper(#[source] anyhow::Error),

    #[error("reducer failed: {0}")]
    Reducer(#[source] anyhow::Error),

    #[error("reduce task join failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Top-level error for the binary; `main` maps each variant to an exit code.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("config error: {0}")]
    Config(String),

    #[error("convert failed: {0}")]
    Convert(#[from] ConvertError),

    #[error("pipeline failed: {0}")]
    Engine(#[from] EngineError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}
