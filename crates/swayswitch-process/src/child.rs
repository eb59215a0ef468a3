//! Owned child process for the duration of one invocation

use std::process::{ExitStatus, Stdio};

use tokio::process::{Child, ChildStdin, ChildStdout, Command};
use tracing::{debug, info, warn};

use crate::{
    config::{CommandSpec, PipeConfig},
    error::{ProcessError, Result},
};

/// Which standard streams of the child are connected to the parent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Wiring {
    pub stdin: bool,
    pub stdout: bool,
}

impl Wiring {
    pub const NONE: Self = Self {
        stdin: false,
        stdout: false,
    };
    pub const OUTPUT: Self = Self {
        stdin: false,
        stdout: true,
    };
    pub const INPUT: Self = Self {
        stdin: true,
        stdout: false,
    };
    pub const BOTH: Self = Self {
        stdin: true,
        stdout: true,
    };
}

fn stdio(piped: bool) -> Stdio {
    if piped {
        Stdio::piped()
    } else {
        Stdio::inherit()
    }
}

/// A spawned child that must be waited on exactly once
pub(crate) struct PipedChild {
    child: Child,
    command: String,
    pid: u32,
}

impl PipedChild {
    /// Spawn `spec` with the requested pipes.
    ///
    /// Pipes are created close-on-exec, so the child only keeps the ends
    /// rewired onto its stdin/stdout. Exec failures surface here.
    pub fn spawn(spec: &CommandSpec, config: &PipeConfig, wiring: Wiring) -> Result<Self> {
        if spec.program().is_empty() {
            return Err(ProcessError::EmptyCommand);
        }
        let command = spec.to_string();

        debug!(
            command = %command,
            stdin = wiring.stdin,
            stdout = wiring.stdout,
            "Spawning process"
        );

        let mut cmd = Command::new(spec.program());
        cmd.args(spec.get_args());

        if let Some(ref dir) = config.working_dir {
            cmd.current_dir(dir);
        }
        for (key, value) in &config.env {
            cmd.env(key, value);
        }

        cmd.stdin(stdio(wiring.stdin));
        cmd.stdout(stdio(wiring.stdout));
        cmd.stderr(Stdio::inherit());
        cmd.kill_on_drop(true);

        let child = cmd.spawn().map_err(|source| {
            warn!(command = %command, error = %source, "Spawn failed");
            ProcessError::SpawnFailed {
                command: command.clone(),
                source,
            }
        })?;
        let pid = child.id().unwrap_or(0);

        info!(pid = %pid, command = %command, "Process spawned");

        Ok(Self {
            child,
            command,
            pid,
        })
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn pid(&self) -> u32 {
        self.pid
    }

    /// Take the parent's write end of the child's stdin
    pub fn take_stdin(&mut self) -> Option<ChildStdin> {
        self.child.stdin.take()
    }

    /// Take the parent's read end of the child's stdout
    pub fn take_stdout(&mut self) -> Option<ChildStdout> {
        self.child.stdout.take()
    }

    /// Wait for the child to exit.
    ///
    /// Closes any pipe end the parent still holds first.
    pub async fn wait(&mut self) -> Result<ExitStatus> {
        drop(self.child.stdin.take());
        drop(self.child.stdout.take());

        let status = self
            .child
            .wait()
            .await
            .map_err(|source| ProcessError::WaitFailed {
                command: self.command.clone(),
                source,
            })?;

        debug!(pid = %self.pid, status = %status, "Process exited");
        Ok(status)
    }

    /// Kill the child if it is still running, then reap it.
    ///
    /// Used on error paths; never fails, only logs.
    pub async fn reap(&mut self) {
        drop(self.child.stdin.take());
        drop(self.child.stdout.take());

        match self.child.try_wait() {
            Ok(Some(status)) => {
                debug!(pid = %self.pid, status = %status, "Process already reaped");
                return;
            }
            Ok(None) => {
                if let Err(e) = self.child.start_kill() {
                    warn!(pid = %self.pid, error = %e, "Failed to kill process");
                }
            }
            Err(e) => {
                warn!(pid = %self.pid, error = %e, "Failed to poll process");
            }
        }

        match self.child.wait().await {
            Ok(status) => debug!(pid = %self.pid, status = %status, "Process reaped"),
            Err(e) => warn!(pid = %self.pid, error = %e, "Failed to reap process"),
        }
    }
}
