//! Child process execution with a kill deadline

use std::io::Read;
use std::process::{Command, Stdio};
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use crate::domain::{CommandLine, CommandOutput, CommandRunner};
use crate::error::{MirrorError, MirrorResult};

/// How often the child is polled while waiting
const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// How long to wait for pipe readers once the child is gone. Grandchildren
/// (ssh under sshpass) can keep a pipe open after a kill.
const DRAIN_GRACE: Duration = Duration::from_secs(1);

/// Runs commands as real child processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&self, command: &CommandLine, timeout: Duration) -> MirrorResult<CommandOutput> {
        let mut child = Command::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| MirrorError::Spawn {
                program: command.program.clone(),
                source,
            })?;

        let stdout = child.stdout.take().map(drain);
        let stderr = child.stderr.take().map(drain);

        // A timeout too large for the clock means no deadline.
        let deadline = Instant::now().checked_add(timeout);
        let mut timed_out = false;

        let status = loop {
            match child.try_wait() {
                Ok(Some(status)) => break status,
                Ok(None) => {}
                Err(e) => {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(e.into());
                }
            }

            let now = Instant::now();
            match deadline {
                Some(deadline) if now >= deadline => {
                    // The child may exit between try_wait and kill; that is fine.
                    let _ = child.kill();
                    timed_out = true;
                    break child.wait()?;
                }
                Some(deadline) => thread::sleep(POLL_INTERVAL.min(deadline - now)),
                None => thread::sleep(POLL_INTERVAL),
            }
        };

        Ok(CommandOutput {
            exit_code: status.code(),
            success: status.success() && !timed_out,
            stdout: collect(stdout),
            stderr: collect(stderr),
            timed_out,
        })
    }
}

fn drain<R: Read + Send + 'static>(mut pipe: R) -> Receiver<Vec<u8>> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = pipe.read_to_end(&mut buf);
        let _ = tx.send(buf);
    });
    rx
}

fn collect(rx: Option<Receiver<Vec<u8>>>) -> Vec<u8> {
    rx.and_then(|rx| rx.recv_timeout(DRAIN_GRACE).ok())
        .unwrap_or_default()
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn sh(script: &str) -> CommandLine {
        CommandLine::new("sh").arg("-c").arg(script)
    }

    #[test]
    fn captures_both_streams() {
        let out = ProcessRunner
            .run(&sh("echo out; echo err 1>&2"), Duration::from_secs(10))
            .unwrap();

        assert!(out.success);
        assert_eq!(out.exit_code, Some(0));
        assert_eq!(String::from_utf8_lossy(&out.stdout), "out\n");
        assert_eq!(String::from_utf8_lossy(&out.stderr), "err\n");
        assert!(!out.timed_out);
    }

    #[test]
    fn nonzero_exit_is_reported_not_raised() {
        let out = ProcessRunner
            .run(&sh("echo nope 1>&2; exit 3"), Duration::from_secs(10))
            .unwrap();

        assert!(!out.success);
        assert_eq!(out.exit_code, Some(3));
        assert_eq!(out.combined(), "nope");
    }

    #[test]
    fn fast_exit_returns_before_deadline() {
        let started = Instant::now();
        let out = ProcessRunner
            .run(&CommandLine::new("true"), Duration::from_secs(30))
            .unwrap();

        assert!(out.success);
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[test]
    fn slow_child_is_killed_at_deadline() {
        let started = Instant::now();
        let out = ProcessRunner
            .run(&CommandLine::new("sleep").arg("30"), Duration::from_millis(300))
            .unwrap();

        assert!(out.timed_out);
        assert!(!out.success);
        assert!(started.elapsed() < Duration::from_secs(10));
    }

    #[test]
    fn huge_timeout_runs_without_deadline() {
        let out = ProcessRunner
            .run(&CommandLine::new("true"), Duration::from_secs(u64::MAX))
            .unwrap();

        assert!(out.success);
        assert!(!out.timed_out);
    }

    #[test]
    fn missing_program_is_spawn_error() {
        let err = ProcessRunner
            .run(
                &CommandLine::new("wsmirror-definitely-not-installed"),
                Duration::from_secs(1),
            )
            .unwrap_err();
        assert!(matches!(err, MirrorError::Spawn { .. }), "{err}");
    }
}
