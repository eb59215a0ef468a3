//! Property-based tests for the pipe invocation modes
//!
//! Output capture returns exactly what the child wrote, echo-through returns
//! exactly what was fed, and payloads far above the kernel pipe buffer do
//! not deadlock the combined mode.

#![cfg(unix)]

use proptest::prelude::*;
use swayswitch_process::{CommandSpec, PipeConfig, ProcessError, ProcessPipe};

fn printf_arg(text: &str) -> CommandSpec {
    CommandSpec::new("sh").args(["-c", "printf '%s' \"$1\"", "sh", text])
}

/// Capture returns the child's output byte for byte, whatever the chunk size
#[test]
fn prop_capture_returns_exact_output() {
    proptest!(ProptestConfig::with_cases(32), |(
        text in "[a-zA-Z0-9 \\n\\[\\]<>:/]{0,4000}",
        buffer_size in 1usize..2048,
    )| {
        let pipe = ProcessPipe::with_config(PipeConfig::new().read_buffer_size(buffer_size)).unwrap();
        let output = pipe.run_capturing_output(&printf_arg(&text)).unwrap();
        prop_assert_eq!(output.stdout(), text.as_bytes());
        prop_assert!(output.success());
    });
}

/// Arbitrary bytes, including NUL and invalid UTF-8, pass through `cat` unchanged
#[test]
fn prop_echo_through_returns_input() {
    proptest!(ProptestConfig::with_cases(32), |(
        input in proptest::collection::vec(any::<u8>(), 0..16 * 1024),
    )| {
        let pipe = ProcessPipe::new().unwrap();
        let output = pipe.run_feeding_and_capturing(&CommandSpec::new("cat"), &input).unwrap();
        prop_assert_eq!(output.stdout(), &input[..]);
    });
}

#[test]
fn test_capture_multi_chunk_output() {
    let pipe = ProcessPipe::new().unwrap();
    let cmd = CommandSpec::from_argv(["head", "-c", "262144", "/dev/zero"]).unwrap();
    let output = pipe.run_capturing_output(&cmd).unwrap();
    assert_eq!(output.stdout().len(), 262_144);
    assert!(output.stdout().iter().all(|b| *b == 0));
}

#[test]
fn test_hello_scenario() {
    let pipe = ProcessPipe::new().unwrap();
    let output = pipe
        .run_feeding_and_capturing(&CommandSpec::new("cat"), b"hello\n")
        .unwrap();
    assert_eq!(output.stdout(), b"hello\n");
}

/// Input and output both exceed the pipe buffers; the concurrent writer keeps
/// the exchange moving.
#[test]
fn test_large_echo_through_does_not_deadlock() {
    let pipe = ProcessPipe::with_config(PipeConfig::new().timeout_secs(60)).unwrap();
    let input: Vec<u8> = (0..4 * 1024 * 1024).map(|i| (i % 251) as u8).collect();

    let output = pipe
        .run_feeding_and_capturing(&CommandSpec::new("cat"), &input)
        .unwrap();
    assert_eq!(output.stdout().len(), input.len());
    assert!(output.stdout() == &input[..]);
}

#[test]
fn test_invocations_are_idempotent() {
    let pipe = ProcessPipe::new().unwrap();
    let cmd = CommandSpec::new("sort");
    let input = b"pear\napple\nfig\n";

    let first = pipe.run_feeding_and_capturing(&cmd, input).unwrap();
    let second = pipe.run_feeding_and_capturing(&cmd, input).unwrap();
    assert_eq!(first.stdout(), b"apple\nfig\npear\n");
    assert_eq!(first, second);
}

#[test]
fn test_missing_executable_reports_spawn_failure() {
    let pipe = ProcessPipe::new().unwrap();
    let cmd = CommandSpec::new("/nonexistent/swayswitch-missing");

    assert!(matches!(pipe.run(&cmd), Err(ProcessError::SpawnFailed { .. })));
    assert!(matches!(
        pipe.run_capturing_output(&cmd),
        Err(ProcessError::SpawnFailed { .. })
    ));
    assert!(matches!(
        pipe.run_feeding_input(&cmd, b"x"),
        Err(ProcessError::SpawnFailed { .. })
    ));
}

#[test]
fn test_non_zero_exit_default_and_checked() {
    let cmd = CommandSpec::new("sh").args(["-c", "printf out; exit 3"]);

    let lenient = ProcessPipe::new().unwrap();
    let output = lenient.run_capturing_output(&cmd).unwrap();
    assert_eq!(output.code(), Some(3));
    assert_eq!(output.stdout(), b"out");

    let strict = ProcessPipe::with_config(PipeConfig::new().check_status(true)).unwrap();
    match strict.run_capturing_output(&cmd) {
        Err(ProcessError::NonZeroExit { code, .. }) => assert_eq!(code, Some(3)),
        other => panic!("unexpected result: {:?}", other),
    }
}
