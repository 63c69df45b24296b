//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to the appropriate command handlers.
//! - Validate the output format before any client is built, so a bad
//!   `--outfmt` never reaches the network.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).

use anyhow::Result;
use blast_client::{BlastClient, ReportFormat, Rid};

use crate::args::{Cli, Commands, RetrieveArgs};
use crate::cancellation::CancellationToken;
use crate::commands;

/// Dispatch CLI commands to their respective handlers.
pub(crate) async fn run_command(cli: Cli, cancel_token: &CancellationToken) -> Result<()> {
    // Submission subcommands share one handler; the variant picks the program
    if let Some(program) = cli.command.program() {
        let args = match cli.command {
            Commands::Blastn(args)
            | Commands::Blastp(args)
            | Commands::Blastx(args)
            | Commands::Tblastn(args)
            | Commands::Tblastx(args)
            | Commands::Megablast(args) => args,
            _ => unreachable!("program() is Some only for submission variants"),
        };
        let format = validate_format(&args.retrieve)?;
        return commands::submit::run(&cli.base_url, cli.quiet, program, args, format, cancel_token)
            .await;
    }

    match cli.command {
        Commands::Status {
            rid,
            monitor,
            retrieve,
        } => {
            let format = validate_format(&retrieve)?;
            let rid = Rid::new(rid);
            if monitor {
                let client = client_for(&cli.base_url, false)?;
                commands::monitor::run(&client, &rid, format, &retrieve, cli.quiet, cancel_token)
                    .await
            } else {
                let client = client_for(&cli.base_url, false)?;
                commands::status::run(&client, &rid).await
            }
        }
        Commands::Get { rid, retrieve } => {
            let format = validate_format(&retrieve)?;
            let client = client_for(&cli.base_url, false)?;
            commands::get::run(&client, &Rid::new(rid), format, &retrieve).await
        }
        Commands::List { tsv } => {
            // listing only makes sense with the saved session attached
            let client = client_for(&cli.base_url, true)?;
            commands::list::run(&client, tsv).await
        }
        _ => unreachable!("submission variants handled above"),
    }
}

/// Parse `--outfmt` before anything touches the network.
fn validate_format(retrieve: &RetrieveArgs) -> Result<ReportFormat> {
    Ok(ReportFormat::from_code(retrieve.outfmt)?)
}

fn client_for(base_url: &str, use_cache: bool) -> Result<BlastClient> {
    Ok(BlastClient::builder()
        .base_url(base_url)
        .use_cache(use_cache)
        .build()?)
}
