//! Data model for BLAST jobs.
//!
//! # What this module handles:
//! - The closed set of search programs and their default databases
//! - Request identifiers (RIDs)
//! - Job status classification codes and human-readable summaries
//! - The output format selector (outfmt)
//!
//! # What this module does NOT handle:
//! - Response-text pattern matching (see [`crate::extract`])
//! - HTTP calls (see [`crate::endpoints`])

use std::fmt;

use crate::error::ClientError;

/// A BLAST search program.
///
/// `Megablast` is not a real remote program name: on the wire it is
/// rewritten to `blastn` plus `MEGABLAST=on`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Program {
    Blastn,
    Blastp,
    Blastx,
    Tblastn,
    Tblastx,
    Megablast,
}

impl Program {
    /// All supported programs.
    pub const ALL: [Program; 6] = [
        Program::Blastn,
        Program::Blastp,
        Program::Blastx,
        Program::Tblastn,
        Program::Tblastx,
        Program::Megablast,
    ];

    /// The database searched when the caller does not override it.
    ///
    /// Total over the enum: nucleotide programs search `nt`, protein
    /// programs search `nr`.
    pub fn default_database(self) -> &'static str {
        match self {
            Program::Blastn | Program::Tblastx | Program::Tblastn | Program::Megablast => "nt",
            Program::Blastp | Program::Blastx => "nr",
        }
    }

    /// The `PROGRAM` value actually transmitted.
    pub fn wire_program(self) -> &'static str {
        match self {
            Program::Blastn | Program::Megablast => "blastn",
            Program::Blastp => "blastp",
            Program::Blastx => "blastx",
            Program::Tblastn => "tblastn",
            Program::Tblastx => "tblastx",
        }
    }

    /// True when submission must also send `MEGABLAST=on`.
    pub fn is_megablast(self) -> bool {
        matches!(self, Program::Megablast)
    }

    /// The user-facing program name.
    pub fn as_str(self) -> &'static str {
        match self {
            Program::Blastn => "blastn",
            Program::Blastp => "blastp",
            Program::Blastx => "blastx",
            Program::Tblastn => "tblastn",
            Program::Tblastx => "tblastx",
            Program::Megablast => "megablast",
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request identifier: the opaque 11-character token naming a submitted job.
///
/// The remote service owns it; this client only extracts and replays it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rid(String);

impl Rid {
    pub fn new(token: impl Into<String>) -> Self {
        Rid(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Rid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Output rendering selector: 1 = plain/pairwise text, 6 = tabular.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Tabular,
}

impl ReportFormat {
    /// Parse the numeric selector.
    ///
    /// Any value other than 1 or 6 is an invalid argument, raised before
    /// any network call is made.
    pub fn from_code(code: u32) -> Result<Self, ClientError> {
        match code {
            1 => Ok(ReportFormat::Text),
            6 => Ok(ReportFormat::Tabular),
            other => Err(ClientError::InvalidFormat(other)),
        }
    }

    pub fn code(self) -> u32 {
        match self {
            ReportFormat::Text => 1,
            ReportFormat::Tabular => 6,
        }
    }

    /// The `FORMAT_TYPE` value transmitted to the service.
    pub fn format_type(self) -> &'static str {
        match self {
            ReportFormat::Text => "Text",
            ReportFormat::Tabular => "Tabular",
        }
    }
}

/// Classified job status, derived from a `Status=<token>` marker in the
/// status response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobStatus {
    /// Still running. Both fields are best-effort scrapes and may be absent.
    Waiting {
        submitted: Option<String>,
        elapsed: Option<String>,
    },
    /// Finished; results can be retrieved.
    Ready,
    /// Expired, or the RID is wrong.
    Unknown,
    /// The search failed; `cause` is the last error fragment on the page,
    /// absent when none could be extracted.
    Failed { cause: Option<String> },
    /// A status token this client does not recognize.
    Other(String),
}

impl JobStatus {
    /// Numeric status code: WAITING 5, READY 0, UNKNOWN 3, FAILED 4,
    /// anything else 1.
    pub fn code(&self) -> u8 {
        match self {
            JobStatus::Waiting { .. } => 5,
            JobStatus::Ready => 0,
            JobStatus::Unknown => 3,
            JobStatus::Failed { .. } => 4,
            JobStatus::Other(_) => 1,
        }
    }

    /// The status token as reported by the service.
    pub fn token(&self) -> &str {
        match self {
            JobStatus::Waiting { .. } => "WAITING",
            JobStatus::Ready => "READY",
            JobStatus::Unknown => "UNKNOWN",
            JobStatus::Failed { .. } => "FAILED",
            JobStatus::Other(token) => token,
        }
    }

    /// Explanatory message for non-running states.
    pub fn message(&self) -> String {
        match self {
            JobStatus::Waiting { .. } => "Job is still running".to_string(),
            JobStatus::Ready => "Job is finished".to_string(),
            JobStatus::Unknown => "Job has either expired, or the RID is wrong".to_string(),
            JobStatus::Failed { cause: Some(cause) } => format!("Search has failed: {cause}"),
            JobStatus::Failed { cause: None } => {
                "Search has failed for an unknown reason".to_string()
            }
            JobStatus::Other(_) => "Unknown error!".to_string(),
        }
    }

    /// Human summary: WAITING renders a multi-line block with the
    /// submission date and elapsed time, READY a one-liner, everything
    /// else a one-liner embedding the scraped message.
    pub fn summary(&self, rid: &Rid) -> String {
        match self {
            JobStatus::Ready => format!("Job: {rid} | Status: READY"),
            JobStatus::Waiting { submitted, elapsed } => format!(
                "Job: {rid}\nStatus: WAITING\nSubmission Date: {}\nTime since submission: {}",
                submitted.as_deref().unwrap_or("unknown"),
                elapsed.as_deref().unwrap_or("unknown"),
            ),
            other => format!("{rid} | Status: {} | {}", other.token(), other.message()),
        }
    }

    /// Convert a terminal, non-READY status into the error the monitor
    /// loop reports before the process exits.
    ///
    /// WAITING and READY are not terminal failures and map to an
    /// unexpected-status error if ever passed here.
    pub fn into_terminal_error(self, rid: &Rid) -> ClientError {
        match self {
            JobStatus::Unknown => ClientError::UnknownJob {
                rid: rid.to_string(),
            },
            JobStatus::Failed { cause } => ClientError::JobFailed {
                rid: rid.to_string(),
                message: cause
                    .unwrap_or_else(|| "Search has failed for an unknown reason".to_string()),
            },
            other => ClientError::UnexpectedStatus {
                code: other.code(),
                status: other.token().to_string(),
            },
        }
    }
}
