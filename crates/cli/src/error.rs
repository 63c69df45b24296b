//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map ClientError variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//! - Signal handling (see cancellation.rs for SIGINT handling).
//!
//! Invariants:
//! - Exit codes 3 and 4 match the UNKNOWN and FAILED status classification codes.
//! - Exit code 130 is reserved for SIGINT (Unix standard: 128 + SIGINT).

use blast_client::ClientError;

/// Structured exit codes for webblast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure (network, I/O).
    GeneralError = 1,

    /// The service rejected the submission; the query or parameters are bad.
    ///
    /// Scripts should fix the input and not retry the same request.
    SubmitRejected = 2,

    /// The RID is unknown: the job expired or the identifier is wrong.
    UnknownJob = 3,

    /// The search ran and failed on the server side.
    JobFailed = 4,

    /// Invalid outfmt selector; raised before any network call.
    InvalidFormat = 5,

    /// Interrupted - SIGINT/Ctrl+C (Unix standard: 128 + 2).
    Interrupted = 130,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::SubmitRejected { .. } => ExitCode::SubmitRejected,
            ClientError::UnknownJob { .. } => ExitCode::UnknownJob,
            ClientError::JobFailed { .. } => ExitCode::JobFailed,
            ClientError::InvalidFormat(_) => ExitCode::InvalidFormat,
            ClientError::Http(_)
            | ClientError::Io(_)
            | ClientError::InvalidResponse(_)
            | ClientError::UnexpectedStatus { .. }
            | ClientError::CookieStore(_) => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no ClientError is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(client_err) = cause.downcast_ref::<ClientError>() {
                return ExitCode::from(client_err);
            }
        }
        ExitCode::GeneralError
    }
}
