use swayswitch_process::ProcessError;
use swayswitch_tree::TreeError;
use thiserror::Error;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Window tree query failed: {0}")]
    TreeQuery(#[source] ProcessError),

    #[error("Picker failed: {0}")]
    Picker(#[source] ProcessError),

    #[error("Focus failed: {0}")]
    Focus(#[source] ProcessError),

    #[error("{0}")]
    Tree(#[from] TreeError),

    #[error("{0}")]
    Process(#[from] ProcessError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Get a user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            CliError::Config(msg) => {
                format!("Configuration error: {}\n\nRun 'swayswitch --print-config' to see the effective configuration.", msg)
            }
            CliError::TreeQuery(ProcessError::SpawnFailed { command, .. }) => {
                format!("Could not run '{}'. Is sway installed and on PATH?", command)
            }
            CliError::TreeQuery(ProcessError::NonZeroExit { command, .. }) => {
                format!("'{}' failed. Is a sway session running?", command)
            }
            CliError::Picker(ProcessError::SpawnFailed { command, .. }) => {
                format!("Could not run picker '{}'. Check the [picker] section of your config.", command)
            }
            other => other.to_string(),
        }
    }
}

/// Result type for CLI operations
pub type CliResult<T> = std::result::Result<T, CliError>;

impl From<config::ConfigError> for CliError {
    fn from(err: config::ConfigError) -> Self {
        CliError::Config(err.to_string())
    }
}
