//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish failure modes.
//! - Map ClientError variants to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit code 3 means Grafana could not be reached; nothing was provisioned.
//! - Rejected submissions only produce a non-zero code under `--fail-on-error`.

use grafana_client::ClientError;

/// Structured exit codes for grafana-setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Provisioning completed.
    Success = 0,

    /// Configuration error, or rejected submissions with `--fail-on-error`.
    GeneralError = 1,

    /// Grafana never became ready, or the connection failed.
    ///
    /// Scripts may retry once the service is up.
    ConnectionError = 3,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        if err.is_connection_error() {
            ExitCode::ConnectionError
        } else {
            ExitCode::GeneralError
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError if no ClientError is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| cause.downcast_ref::<ClientError>())
            .map(ExitCode::from)
            .unwrap_or(ExitCode::GeneralError)
    }
}
