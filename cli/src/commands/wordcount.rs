use std::sync::Arc;

use kvsplit_core::config::AppConfig;
use kvsplit_core::convert;
use kvsplit_core::engine::wordcount::WordCount;
use kvsplit_core::engine::run_pipeline;
use kvsplit_core::error::CliError;
use kvsplit_core::events::{NullRenderer, PipelineRenderer};
use kvsplit_core::wire;

use crate::commands::cli::{OutputFormat, ProgressFormat, WordcountArgs};
use crate::render::{JsonlRenderer, TextRenderer};
use crate::utils::IoTarget;

fn format_from_config(cfg: &AppConfig) -> OutputFormat {
    match cfg.wordcount.format.as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Tsv,
    }
}

pub async fn run(io: &IoTarget, args: WordcountArgs, cfg: &AppConfig) -> Result<i32, CliError> {
    let input = io.read_input().await?;
    let pairs = convert::wrap_tokens(&input);

    let reducers = args.reducers.unwrap_or(cfg.wordcount.reducers);
    let format = args.format.unwrap_or_else(|| format_from_config(cfg));
    let renderer: Box<dyn PipelineRenderer> = match args.progress {
        ProgressFormat::Off => Box::new(NullRenderer),
        ProgressFormat::Text => Box::new(TextRenderer),
        ProgressFormat::Jsonl => Box::new(JsonlRenderer),
    };

    let stage = Arc::new(WordCount);
    let counts = run_pipeline(stage.clone(), stage, pairs, reducers, renderer.as_ref()).await?;

    let document = match format {
        OutputFormat::Json => convert::render_document(&counts)?,
        OutputFormat::Tsv => wire::marshal_pairs(&counts),
    };
    io.write_output(document.as_bytes()).await?;
    tracing::info!(words = counts.len(), "counts written");
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_falls_back_to_tsv() {
        let mut cfg = AppConfig::default();
        assert_eq!(format_from_config(&cfg), OutputFormat::Tsv);

        cfg.wordcount.format = "json".to_string();
        assert_eq!(format_from_config(&cfg), OutputFormat::Json);

        cfg.wordcount.format = "garbage".to_string();
        assert_eq!(format_from_config(&cfg), OutputFormat::Tsv);
    }
}
