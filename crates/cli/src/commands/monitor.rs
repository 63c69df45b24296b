//! Poll a job until it finishes, then retrieve its results.

use anyhow::{Error, Result};
use blast_client::{BlastClient, JobStatus, ReportFormat, Rid};

use crate::args::RetrieveArgs;
use crate::cancellation::{Cancelled, CancellationToken};
use crate::commands::get;
use crate::progress::Spinner;

/// Poll until the job leaves WAITING, then act on the terminal status.
///
/// READY retrieves the results once; UNKNOWN and FAILED become the
/// matching terminal errors. Ctrl+C between polls surfaces as
/// [`Cancelled`].
pub(crate) async fn run(
    client: &BlastClient,
    rid: &Rid,
    format: ReportFormat,
    retrieve: &RetrieveArgs,
    quiet: bool,
    cancel_token: &CancellationToken,
) -> Result<()> {
    let spinner = Spinner::new(!quiet, format!("Polling job {rid}"));

    loop {
        if cancel_token.is_cancelled() {
            return Err(Error::new(Cancelled));
        }

        match client.get_status(rid).await? {
            JobStatus::Waiting { elapsed, .. } => {
                tracing::debug!(%rid, "job still waiting");
                spinner.set_message(format!(
                    "Status: WAITING  Time since submission: {}",
                    elapsed.as_deref().unwrap_or("unknown"),
                ));
            }
            JobStatus::Ready => {
                spinner.finish();
                return get::run(client, rid, format, retrieve).await;
            }
            status => return Err(status.into_terminal_error(rid).into()),
        }

        tokio::select! {
            _ = cancel_token.cancelled() => return Err(Error::new(Cancelled)),
            _ = tokio::time::sleep(client.poll_interval()) => {}
        }
    }
}
