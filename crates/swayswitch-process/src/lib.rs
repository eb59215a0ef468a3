//! # swayswitch-process
//!
//! **Purpose**: Run one external command per call and exchange bytes with it
//! over its standard streams.
//!
//! ## Invocation modes
//!
//! - **run**: no pipes, wait for exit
//! - **run_capturing_output**: read the child's stdout to end-of-stream
//! - **run_feeding_input**: write all input to the child's stdin, then close it
//! - **run_feeding_and_capturing**: both at once; the write and the read loop
//!   run concurrently so large payloads cannot deadlock the two pipes
//!
//! Each call returns only after the child has been waited on. The child's
//! exit status is returned to the caller; it only becomes an error when
//! [`PipeConfig::check_status`] is set or [`ExitReport::ensure_success`] is
//! called. Without a [`PipeConfig::timeout`] a hung child blocks the caller
//! indefinitely.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use swayswitch_process::{CommandSpec, ProcessPipe};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let pipe = ProcessPipe::new()?;
//! let output = pipe.run_feeding_and_capturing(&CommandSpec::new("cat"), b"hello\n")?;
//! assert_eq!(output.stdout(), b"hello\n");
//! # Ok(())
//! # }
//! ```

pub mod blocking;
mod child;
pub mod config;
pub mod error;
pub mod outcome;
pub mod runner;

pub use blocking::ProcessPipe;
pub use config::{CommandSpec, PipeConfig, DEFAULT_READ_BUFFER_SIZE, MAX_READ_BUFFER_SIZE};
pub use error::{ProcessError, Result};
pub use outcome::{ExitReport, PipeOutput};
pub use runner::PipeRunner;
