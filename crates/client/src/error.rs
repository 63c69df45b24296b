//! Error types for the BLAST client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during BLAST client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Local filesystem error (cookie cache path).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The submission response carried an error message instead of a RID.
    #[error("submission rejected: {message}")]
    SubmitRejected { message: String },

    /// The response did not match any expected pattern.
    #[error("invalid response from server: {0}")]
    InvalidResponse(String),

    /// Unsupported output format selector.
    #[error("{0} is not a valid outfmt; only 1 (Text) and 6 (Tabular) are supported")]
    InvalidFormat(u32),

    /// The job reported FAILED; `message` is the cause scraped from the page.
    #[error("job {rid} failed: {message}")]
    JobFailed { rid: String, message: String },

    /// The job has either expired or the RID is wrong.
    #[error("job {rid} is unknown: it has either expired, or the RID is wrong")]
    UnknownJob { rid: String },

    /// The service reported a status token this client does not recognize.
    #[error("unexpected status (code {code}): {status}")]
    UnexpectedStatus { code: u8, status: String },

    /// Cookie jar (de)serialization error.
    #[error("cookie store error: {0}")]
    CookieStore(String),
}
