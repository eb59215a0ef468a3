//! Results of a finished invocation

use std::borrow::Cow;
use std::process::ExitStatus;

use crate::error::{ProcessError, Result};

/// Exit status of a child that has been waited on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExitReport {
    command: String,
    status: ExitStatus,
}

impl ExitReport {
    pub(crate) fn new(command: String, status: ExitStatus) -> Self {
        Self { command, status }
    }

    /// Rendered command line the report belongs to
    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn status(&self) -> ExitStatus {
        self.status
    }

    /// Exit code, or None when the child was terminated by a signal
    pub fn code(&self) -> Option<i32> {
        self.status.code()
    }

    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Convert an unsuccessful exit into [`ProcessError::NonZeroExit`]
    pub fn ensure_success(self) -> Result<Self> {
        if self.success() {
            Ok(self)
        } else {
            Err(ProcessError::NonZeroExit {
                command: self.command,
                code: self.status.code(),
            })
        }
    }
}

/// Exit status plus everything the child wrote to stdout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipeOutput {
    report: ExitReport,
    stdout: Vec<u8>,
}

impl PipeOutput {
    pub(crate) fn new(report: ExitReport, stdout: Vec<u8>) -> Self {
        Self { report, stdout }
    }

    pub fn report(&self) -> &ExitReport {
        &self.report
    }

    pub fn code(&self) -> Option<i32> {
        self.report.code()
    }

    pub fn success(&self) -> bool {
        self.report.success()
    }

    pub fn stdout(&self) -> &[u8] {
        &self.stdout
    }

    pub fn into_stdout(self) -> Vec<u8> {
        self.stdout
    }

    /// Captured output decoded as UTF-8, replacing invalid sequences
    pub fn stdout_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.stdout)
    }

    /// Convert an unsuccessful exit into [`ProcessError::NonZeroExit`]
    pub fn ensure_success(self) -> Result<Self> {
        let Self { report, stdout } = self;
        Ok(Self {
            report: report.ensure_success()?,
            stdout,
        })
    }
}
