//! Result retrieval (`CMD=Get`, `FORMAT_TYPE=Text|Tabular`).

use reqwest::Client;
use tracing::debug;

use crate::error::Result;
use crate::models::{ReportFormat, Rid};

/// Fetch the rendered result document for a finished job.
///
/// Returns the raw body; boilerplate stripping and truncation happen in
/// [`crate::report`].
pub async fn fetch_report(
    http: &Client,
    base_url: &str,
    rid: &Rid,
    format: ReportFormat,
) -> Result<String> {
    debug!(%rid, format = format.format_type(), "fetching report");

    let url = super::cgi_url(base_url);
    let form = [
        ("CMD", "Get"),
        ("RID", rid.as_str()),
        ("FORMAT_TYPE", format.format_type()),
    ];
    let body = http.post(&url).form(&form).send().await?.text().await?;
    Ok(body)
}
