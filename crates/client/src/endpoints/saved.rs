//! Recent-jobs listing (`CMD=GetSaved`).

use reqwest::Client;
use tracing::debug;

use crate::error::Result;

/// Fetch the recent-results page for the current session.
///
/// Job ownership lives in the session cookies, so the caller must use a
/// client built with the persisted jar attached.
pub async fn fetch_recent(http: &Client, base_url: &str) -> Result<String> {
    debug!("fetching recent jobs");

    let url = super::cgi_url(base_url);
    let form = [("CMD", "GetSaved"), ("RECENT_RESULTS", "on")];
    let body = http.post(&url).form(&form).send().await?.text().await?;
    Ok(body)
}
