//! Blocking facade over [`PipeRunner`]

use tokio::runtime::{Builder, Runtime};

use crate::{
    config::{CommandSpec, PipeConfig},
    error::{ProcessError, Result},
    outcome::{ExitReport, PipeOutput},
    runner::PipeRunner,
};

/// Blocking version of [`PipeRunner`].
///
/// Owns a single-threaded runtime and drives one invocation at a time on
/// it. Must not be used from inside an async context; use [`PipeRunner`]
/// there instead.
#[derive(Debug)]
pub struct ProcessPipe {
    runner: PipeRunner,
    runtime: Runtime,
}

impl ProcessPipe {
    /// Create with the default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(PipeConfig::default())
    }

    /// Create with a validated configuration
    pub fn with_config(config: PipeConfig) -> Result<Self> {
        let runner = PipeRunner::with_config(config)?;
        let runtime = Builder::new_current_thread()
            .enable_io()
            .enable_time()
            .build()
            .map_err(ProcessError::RuntimeUnavailable)?;
        Ok(Self { runner, runtime })
    }

    pub fn config(&self) -> &PipeConfig {
        self.runner.config()
    }

    /// See [`PipeRunner::run`]
    pub fn run(&self, cmd: &CommandSpec) -> Result<ExitReport> {
        self.runtime.block_on(self.runner.run(cmd))
    }

    /// See [`PipeRunner::run_capturing_output`]
    pub fn run_capturing_output(&self, cmd: &CommandSpec) -> Result<PipeOutput> {
        self.runtime.block_on(self.runner.run_capturing_output(cmd))
    }

    /// See [`PipeRunner::run_feeding_input`]
    pub fn run_feeding_input(&self, cmd: &CommandSpec, input: &[u8]) -> Result<ExitReport> {
        self.runtime
            .block_on(self.runner.run_feeding_input(cmd, input))
    }

    /// See [`PipeRunner::run_feeding_and_capturing`]
    pub fn run_feeding_and_capturing(&self, cmd: &CommandSpec, input: &[u8]) -> Result<PipeOutput> {
        self.runtime
            .block_on(self.runner.run_feeding_and_capturing(cmd, input))
    }
}
