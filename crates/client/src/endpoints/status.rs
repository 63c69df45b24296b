//! Job status query (`CMD=Get`, `FORMAT_TYPE=HTML`).

use reqwest::Client;
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::extract;
use crate::models::{JobStatus, Rid};

/// Fetch and classify the status of a job.
pub async fn fetch_status(http: &Client, base_url: &str, rid: &Rid) -> Result<JobStatus> {
    debug!(%rid, "querying job status");

    let url = super::cgi_url(base_url);
    let form = [
        ("CMD", "Get"),
        ("FORMAT_TYPE", "HTML"),
        ("RID", rid.as_str()),
    ];
    let body = http.post(&url).form(&form).send().await?.text().await?;
    classify_status(&body)
}

/// Classify a status page body.
///
/// The `Status=` marker selects the state; WAITING and FAILED carry extra
/// best-effort fields. A body without the marker is an invalid response.
pub fn classify_status(body: &str) -> Result<JobStatus> {
    let token = extract::status_token(body).ok_or_else(|| {
        ClientError::InvalidResponse("status response carried no Status= marker".to_string())
    })?;

    Ok(match token {
        "WAITING" => JobStatus::Waiting {
            submitted: extract::submitted_at(body),
            elapsed: extract::elapsed(body),
        },
        "READY" => JobStatus::Ready,
        "UNKNOWN" => JobStatus::Unknown,
        "FAILED" => JobStatus::Failed {
            cause: extract::last_alert(body),
        },
        other => JobStatus::Other(other.to_string()),
    })
}
