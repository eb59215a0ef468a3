//! Error types for pipe invocations

use std::io;
use thiserror::Error;

/// Failures of a single pipe invocation.
///
/// Every variant that follows a successful spawn is only returned after the
/// child has been waited on, so an error never leaves a zombie behind.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Command had no executable
    #[error("Empty command: no executable given")]
    EmptyCommand,

    /// Pipe setup or exec of the child failed
    #[error("Failed to spawn `{command}`: {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: io::Error,
    },

    /// Writing to the child's stdin failed
    #[error("Failed to write input to `{command}`: {source}")]
    WriteFailed {
        command: String,
        #[source]
        source: io::Error,
    },

    /// Reading the child's stdout failed
    #[error("Failed to read output of `{command}`: {source}")]
    ReadFailed {
        command: String,
        #[source]
        source: io::Error,
    },

    /// Waiting for the child to terminate failed
    #[error("Failed to wait for `{command}`: {source}")]
    WaitFailed {
        command: String,
        #[source]
        source: io::Error,
    },

    /// Invocation exceeded its configured deadline; the child was killed
    #[error("`{command}` timed out after {seconds:.3}s")]
    Timeout { command: String, seconds: f64 },

    /// Child exited unsuccessfully and the caller asked for a checked status
    #[error("`{command}` exited with {}", describe_code(*.code))]
    NonZeroExit { command: String, code: Option<i32> },

    /// Invalid configuration
    #[error("Invalid pipe configuration: {0}")]
    InvalidConfig(String),

    /// The blocking facade could not start its runtime
    #[error("Failed to start process runtime: {0}")]
    RuntimeUnavailable(#[source] io::Error),
}

fn describe_code(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "no status (terminated by signal)".to_string(),
    }
}

/// Result type for pipe invocations
pub type Result<T> = std::result::Result<T, ProcessError>;
