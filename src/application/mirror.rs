//! Mirror Use Case: push one saved file to the remote host
//!
//! Validating -> Building Command -> Executing -> Succeeded | Failed.
//! Rejections (missing settings, unsupported platform, unrelated path) happen
//! before any process is spawned. There are no retries at this layer.

use std::path::Path;
use std::time::{Duration, Instant};

use crate::config::{MirrorConfig, TransferSettings};
use crate::domain::{CommandLine, CommandRunner, Platform, TransferRequest};
use crate::error::{MirrorError, MirrorResult};
use crate::infrastructure::ScpCommand;

/// Placeholder when a failed transfer printed nothing
pub const NO_OUTPUT: &str = "no debug error";

/// Everything decided before execution
#[derive(Debug, Clone)]
pub struct TransferPlan {
    pub request: TransferRequest,
    pub settings: TransferSettings,
    pub command: CommandLine,
}

/// A completed, successful transfer
#[derive(Debug, Clone)]
pub struct MirrorReport {
    pub request: TransferRequest,
    pub command: CommandLine,
    pub destination: String,
    pub elapsed: Duration,
}

pub struct MirrorUseCase<R: CommandRunner> {
    runner: R,
    platform: Platform,
}

impl<R: CommandRunner> MirrorUseCase<R> {
    pub fn new(runner: R) -> Self {
        Self {
            runner,
            platform: Platform::current(),
        }
    }

    /// Override the platform family (used to exercise the Windows rules)
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Validate settings and build the command without running it
    pub fn plan(&self, file: &Path, config: &MirrorConfig) -> MirrorResult<TransferPlan> {
        let settings = config.validate()?;
        let request = TransferRequest::new(file, &settings)?;
        let command = ScpCommand::build(&request, &settings, self.platform)?;

        Ok(TransferPlan {
            request,
            settings,
            command,
        })
    }

    pub fn mirror(&self, file: &Path, config: &MirrorConfig) -> MirrorResult<MirrorReport> {
        let plan = self.plan(file, config)?;
        self.execute(plan)
    }

    pub fn execute(&self, plan: TransferPlan) -> MirrorResult<MirrorReport> {
        let started = Instant::now();
        let timeout = plan.settings.timeout;
        let output = self.runner.run(&plan.command, timeout)?;

        if !output.success {
            let mut text = output.combined();
            if output.timed_out {
                let note = format!("timed out after {}s", timeout.as_secs_f64());
                text = if text.is_empty() {
                    note
                } else {
                    format!("{}\n{}", text, note)
                };
            }
            if text.is_empty() {
                text = match output.exit_code {
                    Some(code) => format!("{} (exit status {})", NO_OUTPUT, code),
                    None => NO_OUTPUT.to_string(),
                };
            }
            return Err(MirrorError::TransferFailed {
                path: plan.request.relative_display(),
                output: text,
            });
        }

        let destination = plan.request.destination(&plan.settings);
        Ok(MirrorReport {
            request: plan.request,
            command: plan.command,
            destination,
            elapsed: started.elapsed(),
        })
    }
}
