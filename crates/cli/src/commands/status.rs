//! One-shot status query.

use anyhow::Result;
use blast_client::{BlastClient, Rid};

/// Print the human summary of the job's current status and exit.
///
/// A terminal status is still an answered question here: the summary
/// names UNKNOWN or FAILED, and the exit code stays 0. Use `--monitor`
/// to turn terminal statuses into failing exit codes.
pub(crate) async fn run(client: &BlastClient, rid: &Rid) -> Result<()> {
    let status = client.get_status(rid).await?;
    println!("{}", status.summary(rid));
    Ok(())
}
