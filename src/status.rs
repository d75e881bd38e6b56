//! Exit status codes for the CLI
//!
//! curlize follows standard Unix exit code conventions:
//! - 0: Success
//! - 1: Any error (unreadable input, invalid descriptor JSON, bad HAR file)

use std::process::{ExitCode, Termination};

/// Exit status codes following standard Unix conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitStatus {
    /// Every requested command was produced
    Success = 0,
    /// Input could not be read or parsed
    Error = 1,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status as u8)
    }
}

impl Termination for ExitStatus {
    fn report(self) -> ExitCode {
        ExitCode::from(self as u8)
    }
}

impl ExitStatus {
    /// Create an exit status from a raw exit code
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => ExitStatus::Success,
            _ => ExitStatus::Error,
        }
    }
}
