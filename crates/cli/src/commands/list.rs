//! Recent-jobs listing.

use anyhow::Result;
use blast_client::BlastClient;

use crate::formatters::format_job_rows;

/// List the jobs tied to the saved session cookies.
///
/// The first printed row is the column names; an empty session prints
/// only that row.
pub(crate) async fn run(client: &BlastClient, tsv: bool) -> Result<()> {
    let rows = client.list_recent_jobs().await?;
    print!("{}", format_job_rows(&rows, tsv));
    Ok(())
}
