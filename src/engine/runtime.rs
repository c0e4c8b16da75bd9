// src/engine/runtime.rs

use std::fmt;

use tokio::sync::{mpsc, watch};
use tracing::{debug, error, info};

use crate::errors::Result;
use crate::exec::{CommandOutcome, CommandTemplate, ExecutorBackend};

use super::{ChangeEvent, RuntimeEvent};

/// Counters reported when the runtime loop ends.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Change events consumed.
    pub changes: usize,
    pub succeeded: usize,
    /// Commands that failed to start, exited non-zero or were killed.
    pub failed: usize,
}

/// Single consumer of the change channel.
///
/// For each event it renders the command template and awaits the executor
/// before receiving the next one, so at most one command is ever running.
/// Command failures are logged and never stop the loop.
pub struct Runtime<E: ExecutorBackend> {
    template: CommandTemplate,
    event_rx: mpsc::Receiver<RuntimeEvent>,
    executor: E,
    shutdown_tx: watch::Sender<bool>,
}

impl<E: ExecutorBackend> fmt::Debug for Runtime<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Runtime")
            .field("template", &self.template)
            .finish_non_exhaustive()
    }
}

impl<E: ExecutorBackend> Runtime<E> {
    pub fn new(
        template: CommandTemplate,
        event_rx: mpsc::Receiver<RuntimeEvent>,
        executor: E,
    ) -> Self {
        let (shutdown_tx, _) = watch::channel(false);
        Self {
            template,
            event_rx,
            executor,
            shutdown_tx,
        }
    }

    /// Receiver that flips to `true` when the runtime stops. Pollers select
    /// on it so they end together with the runtime.
    pub fn shutdown_signal(&self) -> watch::Receiver<bool> {
        self.shutdown_tx.subscribe()
    }

    /// Main event loop.
    ///
    /// Runs until shutdown is requested or every event sender is dropped.
    pub async fn run(mut self) -> Result<RunSummary> {
        info!(command = %self.template, "pollwatch runtime started");
        let mut summary = RunSummary::default();

        loop {
            let event = match self.event_rx.recv().await {
                Some(e) => e,
                None => {
                    info!("runtime event channel closed; exiting");
                    break;
                }
            };

            debug!(?event, "runtime received event");

            match event {
                RuntimeEvent::FileChanged(change) => {
                    summary.changes += 1;
                    if self.dispatch(change).await {
                        summary.succeeded += 1;
                    } else {
                        summary.failed += 1;
                    }
                }
                RuntimeEvent::ShutdownRequested => {
                    info!("shutdown requested; stopping runtime");
                    break;
                }
            }
        }

        // No receivers left is fine.
        let _ = self.shutdown_tx.send(true);

        info!(
            changes = summary.changes,
            succeeded = summary.succeeded,
            failed = summary.failed,
            "runtime exiting"
        );
        Ok(summary)
    }

    /// Run the command for one change. Returns whether it succeeded.
    async fn dispatch(&mut self, change: ChangeEvent) -> bool {
        let argv = self.template.render(&change.path);
        info!(
            path = %change.path.display(),
            kind = %change.kind,
            ?argv,
            "dispatching command"
        );

        match self.executor.execute(argv).await {
            Ok(CommandOutcome::Success) => true,
            Ok(CommandOutcome::Failed(code)) => {
                error!(path = %change.path.display(), exit_code = code, "command exited with failure");
                false
            }
            Ok(CommandOutcome::Terminated) => {
                error!(path = %change.path.display(), "command was terminated by a signal");
                false
            }
            Err(err) => {
                error!(path = %change.path.display(), error = %err, "command could not be run");
                false
            }
        }
    }
}
