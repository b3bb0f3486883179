//! Stable re-exports for consumers (`cli` and external crates).
//!
//! Prefer importing from `kvsplit_core::api` instead of reaching into
//! internal modules.

pub use crate::config::{load_default, AppConfig, LoggingConfig, WordcountConfig};
pub use crate::convert::{convert_document, render_document, wrap_tokens};
pub use crate::engine::{
    run_map_batch, run_pipeline, run_reduce_batch, split_keys, wordcount::WordCount, Mapper,
    Reducer,
};
pub use crate::error::{CliError, ConvertError, EngineError};
pub use crate::events::{generate_run_id, NullRenderer, PipelineRenderer, RenderEvent};
pub use crate::input::{read_file_to_string, read_stdin_to_string};
pub use crate::pair::{KeyGroups, Pair};
pub use crate::tokenize::{sanitize, token_count, tokenize};
pub use crate::wire::{marshal_pairs, marshal_values, unmarshal_pairs, unmarshal_values};
