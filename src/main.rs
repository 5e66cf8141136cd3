#![allow(clippy::module_name_repetitions, clippy::upper_case_acronyms)]
mod cli;

use angeltrax::CancellationToken;
use clap::Parser;
use cli::{Cli, CliError};
use std::process::ExitCode;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_directive = if cli.debug { "warn,angeltrax=debug" } else { "warn,angeltrax=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    match start(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

#[tokio::main]
async fn start(cli: Cli) -> Result<(), CliError> {
    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, aborting in-flight requests");
            on_interrupt.cancel();
        }
    });
    cli::commands::run(cli, cancel).await
}
