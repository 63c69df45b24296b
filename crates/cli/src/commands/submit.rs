//! Submission subcommands (blastn, blastp, blastx, tblastn, tblastx, megablast).

use anyhow::{Context, Result};
use blast_client::{BlastClient, Program, ReportFormat, SubmitParams};

use crate::args::SubmitArgs;
use crate::cancellation::CancellationToken;
use crate::commands::monitor;

/// Submit a search, print its RID, and (unless `--bg`) wait for the
/// results.
///
/// The RID goes to stdout immediately so a backgrounded submission can
/// be picked up later with `status` or `get`.
pub(crate) async fn run(
    base_url: &str,
    quiet: bool,
    program: Program,
    args: SubmitArgs,
    format: ReportFormat,
    cancel_token: &CancellationToken,
) -> Result<()> {
    let query = std::fs::read_to_string(&args.query)
        .with_context(|| format!("reading query file {}", args.query.display()))?;

    let client = BlastClient::builder()
        .base_url(base_url)
        .use_cache(!args.no_cache)
        .build()?;

    let mut params = SubmitParams::new(program, query);
    params.database = args.database;
    params.evalue = args.evalue;
    params.max_targets = args.retrieve.limit;

    let rid = client.submit(&params).await?;
    println!("{rid}");

    if args.bg {
        return Ok(());
    }
    monitor::run(&client, &rid, format, &args.retrieve, quiet, cancel_token).await
}
