use std::process::ExitCode;

/// Exit status for the CLI, following common conventions for lint-style tools.
///
/// - `Success` (0): scan completed and the report was written
/// - `Failure` (1): usage or root-path validation failed, nothing was written
/// - `Error` (2): the run aborted on an unexpected error (I/O failure during
///   the walk, unwritable report path)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
