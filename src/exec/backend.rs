// src/exec/backend.rs

//! Pluggable executor backend abstraction.
//!
//! The runtime talks to an `ExecutorBackend` instead of spawning processes
//! itself. This makes it easy to swap in a fake executor in tests while
//! keeping the production implementation in [`ProcessExecutor`].

use std::ffi::OsString;
use std::future::Future;
use std::io;
use std::pin::Pin;
use std::process::{ExitStatus, Stdio};

use tokio::process::Command;
use tracing::{debug, info};

use crate::errors::{PollwatchError, Result};

/// How a triggered command ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Success,
    /// Exited with a non-zero status code.
    Failed(i32),
    /// Killed by a signal; no exit code available.
    Terminated,
}

impl CommandOutcome {
    pub fn from_status(status: ExitStatus) -> Self {
        match status.code() {
            Some(0) => CommandOutcome::Success,
            Some(code) => CommandOutcome::Failed(code),
            None => CommandOutcome::Terminated,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, CommandOutcome::Success)
    }
}

/// Trait abstracting how a concrete argument vector is executed.
///
/// The returned future must resolve only once the command has finished;
/// the runtime relies on that to keep executions serialized.
pub trait ExecutorBackend: Send {
    fn execute(
        &mut self,
        argv: Vec<OsString>,
    ) -> Pin<Box<dyn Future<Output = Result<CommandOutcome>> + Send + '_>>;
}

/// Real executor: runs `argv[0]` with the remaining arguments as a child
/// process sharing this process's stdin, stdout and stderr.
#[derive(Debug, Clone, Default)]
pub struct ProcessExecutor;

impl ProcessExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl ExecutorBackend for ProcessExecutor {
    fn execute(
        &mut self,
        argv: Vec<OsString>,
    ) -> Pin<Box<dyn Future<Output = Result<CommandOutcome>> + Send + '_>> {
        Box::pin(async move {
            let (program, args) = argv.split_first().ok_or(PollwatchError::EmptyTemplate)?;

            if program.is_empty() {
                return Err(PollwatchError::Spawn {
                    program: String::new(),
                    source: io::Error::new(io::ErrorKind::InvalidInput, "empty program name"),
                });
            }

            info!(?program, ?args, "running command");

            let mut child = Command::new(program)
                .args(args)
                .stdin(Stdio::inherit())
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit())
                .kill_on_drop(true)
                .spawn()
                .map_err(|source| PollwatchError::Spawn {
                    program: program.to_string_lossy().into_owned(),
                    source,
                })?;

            let status = child.wait().await?;
            let outcome = CommandOutcome::from_status(status);
            debug!(?program, ?outcome, "command finished");

            Ok(outcome)
        })
    }
}
