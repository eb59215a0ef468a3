//! Command and pipe configuration

use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{ProcessError, Result};

/// Read chunk size used when none is configured
pub const DEFAULT_READ_BUFFER_SIZE: usize = 1024;

/// Largest accepted read chunk size (16 MiB)
pub const MAX_READ_BUFFER_SIZE: usize = 16 * 1024 * 1024;

/// An argument vector: the executable followed by its arguments.
///
/// The executable is looked up on `PATH` when it contains no slash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    program: String,
    args: Vec<String>,
}

impl CommandSpec {
    /// Create a command with no arguments
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: vec![],
        }
    }

    /// Build a command from a full argument vector (`argv[0]` is the program)
    pub fn from_argv<I, S>(argv: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut argv = argv.into_iter().map(Into::into);
        let program = argv.next().ok_or(ProcessError::EmptyCommand)?;
        if program.is_empty() {
            return Err(ProcessError::EmptyCommand);
        }
        Ok(Self {
            program,
            args: argv.collect(),
        })
    }

    /// Append one argument
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append arguments
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn get_args(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Settings shared by every invocation of a [`PipeRunner`](crate::PipeRunner)
#[derive(Debug, Clone)]
pub struct PipeConfig {
    /// Size of each bounded read from the child's stdout
    pub read_buffer_size: usize,
    /// Deadline for a whole invocation (None = wait forever)
    pub timeout: Option<Duration>,
    /// Turn a non-zero exit into [`ProcessError::NonZeroExit`]
    pub check_status: bool,
    /// Working directory (None = current dir)
    pub working_dir: Option<PathBuf>,
    /// Environment variables (added to parent env)
    pub env: HashMap<String, String>,
}

impl PipeConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self {
            read_buffer_size: DEFAULT_READ_BUFFER_SIZE,
            timeout: None,
            check_status: false,
            working_dir: None,
            env: HashMap::new(),
        }
    }

    /// Set the read chunk size
    pub fn read_buffer_size(mut self, size: usize) -> Self {
        self.read_buffer_size = size;
        self
    }

    /// Set timeout in seconds
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Some(Duration::from_secs(secs));
        self
    }

    /// Set timeout duration
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Enable/disable exit status checking
    pub fn check_status(mut self, check: bool) -> Self {
        self.check_status = check;
        self
    }

    /// Set working directory
    pub fn working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Add environment variable
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.read_buffer_size == 0 {
            return Err(ProcessError::InvalidConfig(
                "read buffer size must be greater than 0".to_string(),
            ));
        }
        if self.read_buffer_size > MAX_READ_BUFFER_SIZE {
            return Err(ProcessError::InvalidConfig(format!(
                "read buffer size must be at most {} bytes, got {}",
                MAX_READ_BUFFER_SIZE, self.read_buffer_size
            )));
        }
        if self.timeout == Some(Duration::ZERO) {
            return Err(ProcessError::InvalidConfig(
                "timeout must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for PipeConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_argv_splits_program() {
        let cmd = CommandSpec::from_argv(["swaymsg", "-t", "get_tree"]).unwrap();
        assert_eq!(cmd.program(), "swaymsg");
        assert_eq!(cmd.get_args(), ["-t", "get_tree"]);
        assert_eq!(cmd.to_string(), "swaymsg -t get_tree");
    }

    #[test]
    fn test_from_argv_rejects_empty() {
        let empty: Vec<String> = vec![];
        assert!(matches!(
            CommandSpec::from_argv(empty),
            Err(ProcessError::EmptyCommand)
        ));
        assert!(matches!(
            CommandSpec::from_argv([""]),
            Err(ProcessError::EmptyCommand)
        ));
    }

    #[test]
    fn test_builder_appends() {
        let cmd = CommandSpec::new("wofi").arg("-d").args(["-p", "Windows: "]);
        assert_eq!(cmd.get_args(), ["-d", "-p", "Windows: "]);
    }

    #[test]
    fn test_default_config() {
        let config = PipeConfig::default();
        assert_eq!(config.read_buffer_size, DEFAULT_READ_BUFFER_SIZE);
        assert!(config.timeout.is_none());
        assert!(!config.check_status);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_buffer() {
        let config = PipeConfig::new().read_buffer_size(0);
        assert!(matches!(
            config.validate(),
            Err(ProcessError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_validate_rejects_oversized_buffer() {
        let config = PipeConfig::new().read_buffer_size(usize::MAX);
        assert!(matches!(
            config.validate(),
            Err(ProcessError::InvalidConfig(_))
        ));

        let config = PipeConfig::new().read_buffer_size(MAX_READ_BUFFER_SIZE + 1);
        assert!(config.validate().is_err());

        let config = PipeConfig::new().read_buffer_size(MAX_READ_BUFFER_SIZE);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = PipeConfig::new().timeout(Duration::ZERO);
        assert!(config.validate().is_err());
    }
}
