//! Ports: interfaces the transfer logic needs from the outside world

use std::ffi::OsString;
use std::fmt;
use std::time::Duration;

use crate::error::MirrorResult;

/// Operating-system family the transfer runs on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Unix,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }

    /// Whether `sshpass` can wrap the transfer
    pub fn supports_password_helper(&self) -> bool {
        !matches!(self, Platform::Windows)
    }
}

/// A program and its arguments, not yet spawned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub program: String,
    pub args: Vec<OsString>,
}

impl CommandLine {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Put `program` (and `prefix_args`) in front of the current command
    pub fn wrap(self, program: impl Into<String>, prefix_args: &[OsString]) -> Self {
        let mut args = prefix_args.to_vec();
        args.push(OsString::from(self.program));
        args.extend(self.args);
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn args_lossy(&self) -> Vec<String> {
        self.args
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in self.args_lossy() {
            if arg.is_empty() || arg.contains(|c: char| c.is_whitespace() || c == '\'') {
                write!(f, " '{}'", arg.replace('\'', "'\\''"))?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

/// What a finished (or killed) child process left behind
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub exit_code: Option<i32>,
    pub success: bool,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
    pub timed_out: bool,
}

impl CommandOutput {
    /// stdout followed by stderr, trimmed
    pub fn combined(&self) -> String {
        let mut text = String::from_utf8_lossy(&self.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&self.stderr));
        text.trim().to_string()
    }
}

/// Runs a command line to completion or until `timeout` elapses.
///
/// Implementations must kill the child on timeout and report it through
/// [`CommandOutput::timed_out`] rather than an error.
pub trait CommandRunner: Send + Sync {
    fn run(&self, command: &CommandLine, timeout: Duration) -> MirrorResult<CommandOutput>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for std::sync::Arc<R> {
    fn run(&self, command: &CommandLine, timeout: Duration) -> MirrorResult<CommandOutput> {
        (**self).run(command, timeout)
    }
}
