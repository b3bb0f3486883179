//! Command dispatch: resolve the I/O targets, hand off to the command.

use kvsplit_core::config::AppConfig;
use kvsplit_core::error::CliError;

use crate::commands::cli::{Args, Commands};
use crate::commands::{convert, wordcount};
use crate::utils::IoTarget;

pub async fn dispatch(args: Args, cfg: AppConfig) -> Result<i32, CliError> {
    let io = IoTarget::new(args.input, args.output);

    match args.command {
        // A bare invocation is the convert operation.
        None | Some(Commands::Convert) => convert::run(&io).await,
        Some(Commands::Wordcount(wc_args)) => wordcount::run(&io, wc_args, &cfg).await,
    }
}
