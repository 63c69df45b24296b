//! Client library for the NCBI BLAST URL API.
//!
//! The BLAST web service speaks form-encoded HTTP POST and answers with
//! HTML/plaintext pages meant for humans, not machines. There is no
//! structured schema: request identifiers, job statuses and error causes
//! are all recovered from the response text with fixed patterns. This
//! crate wraps that scraping behind a typed client so the coupling to the
//! remote wording lives in one place ([`extract`], [`joblist`]).

pub mod client;
pub mod endpoints;
pub mod error;
pub mod extract;
pub mod joblist;
pub mod models;
pub mod report;
pub mod session;

pub use client::{BlastClient, BlastClientBuilder};
pub use endpoints::SubmitParams;
pub use error::{ClientError, Result};
pub use joblist::{JobRow, parse_job_table};
pub use models::{JobStatus, Program, ReportFormat, Rid};
pub use session::CookieCache;
