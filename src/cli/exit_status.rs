use std::process::ExitCode;

/// Process exit status of a CLI run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Every call site was extracted.
    Success,
    /// The run finished but skipped call sites, or `init` found an existing config.
    Failure,
    /// The run aborted (invalid config, unwritable output, ...).
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
