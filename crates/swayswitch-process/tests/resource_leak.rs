//! Descriptor and child accounting across many invocations
//!
//! Kept as the only test in this binary so no other test spawns children or
//! opens descriptors while the counts are taken.

#![cfg(target_os = "linux")]

use nix::errno::Errno;
use nix::sys::wait::{waitpid, WaitPidFlag};
use nix::unistd::Pid;
use swayswitch_process::{CommandSpec, ProcessPipe};

const ROUNDS: usize = 100;

fn open_descriptors() -> usize {
    std::fs::read_dir("/proc/self/fd").unwrap().count()
}

fn assert_no_children() {
    assert_eq!(
        waitpid(None::<Pid>, Some(WaitPidFlag::WNOHANG)),
        Err(Errno::ECHILD),
        "a child process was left unreaped"
    );
}

fn run_every_mode(pipe: &ProcessPipe) {
    let silent = CommandSpec::new("true");
    let echo = CommandSpec::new("cat");
    let sink = CommandSpec::new("sh").args(["-c", "cat >/dev/null"]);
    let failing = CommandSpec::new("sh").args(["-c", "exit 7"]);

    assert!(pipe.run(&silent).unwrap().success());
    assert_eq!(pipe.run_capturing_output(&failing).unwrap().code(), Some(7));
    assert!(pipe.run_feeding_input(&sink, b"payload").unwrap().success());
    assert_eq!(
        pipe.run_feeding_and_capturing(&echo, b"hello\n").unwrap().stdout(),
        b"hello\n"
    );
    assert!(pipe.run(&CommandSpec::new("/nonexistent/swayswitch-missing")).is_err());
    assert!(pipe
        .run_feeding_input(&CommandSpec::new("true"), &vec![0u8; 1024 * 1024])
        .is_err());
}

#[test]
fn test_repeated_invocations_release_resources() {
    let pipe = ProcessPipe::new().unwrap();

    // first round lets the runtime set up its process driver
    run_every_mode(&pipe);
    let baseline = open_descriptors();
    assert_no_children();

    for _ in 0..ROUNDS {
        run_every_mode(&pipe);
    }

    assert_eq!(open_descriptors(), baseline);
    assert_no_children();
}
