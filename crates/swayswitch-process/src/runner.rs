//! The four invocation modes over one spawn/transfer/wait sequence

use std::future::Future;
use std::io;
use std::process::ExitStatus;

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

use crate::{
    child::{PipedChild, Wiring},
    config::{CommandSpec, PipeConfig},
    error::{ProcessError, Result},
    outcome::{ExitReport, PipeOutput},
};

/// Runs commands with zero, one or two pipes to the child.
///
/// Every method returns only after the child has been waited on, on success
/// and on every error path.
#[derive(Debug, Clone, Default)]
pub struct PipeRunner {
    config: PipeConfig,
}

impl PipeRunner {
    /// Create a runner with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a runner with a validated configuration
    pub fn with_config(config: PipeConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &PipeConfig {
        &self.config
    }

    /// Run a command without pipes and wait for it.
    ///
    /// # Examples
    /// ```no_run
    /// use swayswitch_process::{CommandSpec, PipeRunner};
    ///
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let runner = PipeRunner::new();
    /// let cmd = CommandSpec::from_argv(["swaymsg", "[con_id=12]", "focus"])?;
    /// let report = runner.run(&cmd).await?;
    /// println!("exit code: {:?}", report.code());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn run(&self, cmd: &CommandSpec) -> Result<ExitReport> {
        let child = PipedChild::spawn(cmd, &self.config, Wiring::NONE)?;
        let ((), status) = self.complete(child, |_| async { Ok(()) }).await?;
        self.report(cmd, status)
    }

    /// Run a command and capture everything it writes to stdout.
    ///
    /// # Examples
    /// ```no_run
    /// use swayswitch_process::{CommandSpec, PipeRunner};
    ///
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let runner = PipeRunner::new();
    /// let cmd = CommandSpec::from_argv(["swaymsg", "-t", "get_tree"])?;
    /// let output = runner.run_capturing_output(&cmd).await?;
    /// println!("{} bytes", output.stdout().len());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn run_capturing_output(&self, cmd: &CommandSpec) -> Result<PipeOutput> {
        let child = PipedChild::spawn(cmd, &self.config, Wiring::OUTPUT)?;
        let buffer_size = self.config.read_buffer_size;

        let (stdout, status) = self
            .complete(child, |child| {
                let stdout = child.take_stdout();
                let command = child.command().to_string();
                async move { capture(stdout, buffer_size, &command).await }
            })
            .await?;

        Ok(PipeOutput::new(self.report(cmd, status)?, stdout))
    }

    /// Run a command, write `input` to its stdin and close it.
    pub async fn run_feeding_input(&self, cmd: &CommandSpec, input: &[u8]) -> Result<ExitReport> {
        let child = PipedChild::spawn(cmd, &self.config, Wiring::INPUT)?;

        let ((), status) = self
            .complete(child, |child| {
                let stdin = child.take_stdin();
                let command = child.command().to_string();
                async move { feed(stdin, input, &command).await }
            })
            .await?;

        self.report(cmd, status)
    }

    /// Run a command, feed it `input` and capture its stdout.
    ///
    /// The write and the read loop run concurrently, so a child that fills
    /// its stdout pipe before draining stdin cannot deadlock the pair. The
    /// write end is still closed before this returns.
    ///
    /// # Examples
    /// ```no_run
    /// use swayswitch_process::{CommandSpec, PipeRunner};
    ///
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let runner = PipeRunner::new();
    /// let cmd = CommandSpec::new("cat");
    /// let output = runner.run_feeding_and_capturing(&cmd, b"hello\n").await?;
    /// assert_eq!(output.stdout(), b"hello\n");
    /// # Ok(())
    /// # }
    /// ```
    pub async fn run_feeding_and_capturing(
        &self,
        cmd: &CommandSpec,
        input: &[u8],
    ) -> Result<PipeOutput> {
        let child = PipedChild::spawn(cmd, &self.config, Wiring::BOTH)?;
        let buffer_size = self.config.read_buffer_size;

        let (stdout, status) = self
            .complete(child, |child| {
                let stdin = child.take_stdin();
                let stdout = child.take_stdout();
                let command = child.command().to_string();
                async move {
                    let ((), captured) = tokio::try_join!(
                        feed(stdin, input, &command),
                        capture(stdout, buffer_size, &command),
                    )?;
                    Ok::<_, ProcessError>(captured)
                }
            })
            .await?;

        Ok(PipeOutput::new(self.report(cmd, status)?, stdout))
    }

    /// Drive the transfer, then wait; reap the child on any failure.
    async fn complete<F, Fut, T>(&self, mut child: PipedChild, transfer: F) -> Result<(T, ExitStatus)>
    where
        F: FnOnce(&mut PipedChild) -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let transfer = transfer(&mut child);
        let body = async {
            let value = transfer.await?;
            let status = child.wait().await?;
            Ok::<_, ProcessError>((value, status))
        };

        let timed = match self.config.timeout {
            Some(limit) => tokio::time::timeout(limit, body).await.map_err(|_| limit),
            None => Ok(body.await),
        };

        let outcome = match timed {
            Ok(outcome) => outcome,
            Err(limit) => {
                warn!(
                    pid = %child.pid(),
                    command = %child.command(),
                    timeout_ms = limit.as_millis() as u64,
                    "Process timed out, killing"
                );
                Err(ProcessError::Timeout {
                    command: child.command().to_string(),
                    seconds: limit.as_secs_f64(),
                })
            }
        };

        if outcome.is_err() {
            child.reap().await;
        }
        outcome
    }

    fn report(&self, cmd: &CommandSpec, status: ExitStatus) -> Result<ExitReport> {
        let report = ExitReport::new(cmd.to_string(), status);
        if !report.success() {
            debug!(command = %cmd, code = ?report.code(), "Process exited unsuccessfully");
        }
        if self.config.check_status {
            report.ensure_success()
        } else {
            Ok(report)
        }
    }
}

/// Write all of `input`, then close the write end so the child sees
/// end-of-stream.
async fn feed<W>(stdin: Option<W>, input: &[u8], command: &str) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    let Some(mut stdin) = stdin else {
        return Err(missing_pipe(command, "stdin"));
    };

    let written = async {
        stdin.write_all(input).await?;
        stdin.flush().await
    }
    .await;
    drop(stdin);

    written.map_err(|source| {
        warn!(command = %command, bytes = input.len(), error = %source, "Write to child failed");
        ProcessError::WriteFailed {
            command: command.to_string(),
            source,
        }
    })?;

    debug!(command = %command, bytes = input.len(), "Input written, stdin closed");
    Ok(())
}

/// Read bounded chunks until a zero-length read.
async fn capture<R>(stdout: Option<R>, buffer_size: usize, command: &str) -> Result<Vec<u8>>
where
    R: AsyncRead + Unpin,
{
    let Some(mut stdout) = stdout else {
        return Err(missing_pipe(command, "stdout"));
    };

    let mut captured = Vec::new();
    let mut buffer = vec![0u8; buffer_size];
    loop {
        match stdout.read(&mut buffer).await {
            Ok(0) => break,
            Ok(n) => captured.extend_from_slice(&buffer[..n]),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(source) => {
                warn!(command = %command, error = %source, "Read from child failed");
                return Err(ProcessError::ReadFailed {
                    command: command.to_string(),
                    source,
                });
            }
        }
    }

    debug!(command = %command, bytes = captured.len(), "Output captured");
    Ok(captured)
}

fn missing_pipe(command: &str, stream: &str) -> ProcessError {
    ProcessError::SpawnFailed {
        command: command.to_string(),
        source: io::Error::new(
            io::ErrorKind::BrokenPipe,
            format!("child {} was not piped", stream),
        ),
    }
}
