//! webblast - command-line client for the NCBI BLAST URL API.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Submit searches, poll job status, and retrieve results via the
//!   shared client library.
//! - Print results to stdout or a file; progress goes to stderr only.
//!
//! Does NOT handle:
//! - Response scraping or the HTTP protocol (see `crates/client`).

mod args;
mod cancellation;
mod commands;
mod dispatch;
mod error;
mod formatters;
mod output;
mod progress;

use args::Cli;
use cancellation::{CancellationToken, is_cancelled_error, print_cancelled_message};
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    // Ctrl+C flips the token; the monitor loop checks it between polls
    let cancel = CancellationToken::new();
    let cancel_clone = cancel.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            eprintln!("Failed to listen for Ctrl+C: {}", e);
            return;
        }
        cancel_clone.cancel();
    });

    let exit_code = match run_command(cli, &cancel).await {
        Ok(()) => ExitCode::Success,
        Err(e) if is_cancelled_error(&e) => {
            print_cancelled_message();
            ExitCode::Interrupted
        }
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
