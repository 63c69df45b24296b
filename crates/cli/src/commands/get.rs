//! Result retrieval for a finished job.

use anyhow::Result;
use blast_client::{BlastClient, JobStatus, ReportFormat, Rid};

use crate::args::RetrieveArgs;
use crate::output::write_output;

/// Retrieve the result document and write it out.
///
/// The status is checked first: fetching a report for a job that is not
/// READY returns a status page instead of results, so non-READY states
/// become their terminal errors here (WAITING included; use `status
/// --monitor` to wait).
pub(crate) async fn run(
    client: &BlastClient,
    rid: &Rid,
    format: ReportFormat,
    retrieve: &RetrieveArgs,
) -> Result<()> {
    match client.get_status(rid).await? {
        JobStatus::Ready => {}
        status => return Err(status.into_terminal_error(rid).into()),
    }

    let report = client.retrieve(rid, format, retrieve.limit).await?;
    write_output(&report, retrieve.out.as_deref())?;
    Ok(())
}
