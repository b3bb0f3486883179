use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Tsv,
    Json,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressFormat {
    Off,
    Text,
    Jsonl,
}

#[derive(Parser, Debug)]
#[command(
    name = "kvsplit",
    version,
    about = "Split text into whitespace tokens and emit K/V pair records"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Read from this file instead of standard input.
    #[arg(long, global = true)]
    pub input: Option<PathBuf>,

    /// Write to this file instead of standard output.
    #[arg(long, global = true)]
    pub output: Option<PathBuf>,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct WordcountArgs {
    /// Number of concurrent reducer batches. Defaults from config.
    #[arg(long)]
    pub reducers: Option<usize>,

    /// Output format for the counts. Defaults from config.
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Progress events on stderr while the pipeline runs.
    #[arg(long, value_enum, default_value_t = ProgressFormat::Off)]
    pub progress: ProgressFormat,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Wrap every input token into a {"K","V"} record and write one JSON array.
    /// This is also what a bare `kvsplit` does.
    Convert,
    /// Count words with the local map/reduce pipeline.
    Wordcount(WordcountArgs),
}
