//! `Blast.cgi` endpoint implementations.
//!
//! Every operation is one form-encoded POST to the same CGI, selected by
//! the `CMD` parameter: `Put` submits, `Get` fetches status or results,
//! `GetSaved` lists the session's recent jobs. Responses are free-form
//! pages handed to [`crate::extract`] and [`crate::joblist`].

mod put;
mod report;
mod saved;
mod status;

pub use put::{SubmitParams, submit_job};
pub use report::fetch_report;
pub use saved::fetch_recent;
pub use status::{classify_status, fetch_status};

/// The single CGI endpoint under the service base URL.
pub(crate) fn cgi_url(base_url: &str) -> String {
    format!("{}/Blast.cgi", base_url.trim_end_matches('/'))
}
